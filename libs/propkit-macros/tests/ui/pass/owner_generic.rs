use std::fmt::Debug;

mod queue {
    use std::fmt::Debug;

    #[propkit::owner]
    #[derive(Clone, Debug)]
    pub struct Queue<'a, T, const N: usize>
    where
        T: Clone + Debug,
    {
        #[property(get)]
        pub items: Vec<T>,
        #[property(get, set)]
        pub label: &'a str,
    }

    impl<'a, T, const N: usize> Queue<'a, T, N>
    where
        T: Clone + Debug,
    {
        pub fn new(label: &'a str) -> Self {
            Self {
                items: propkit::Property::new(Vec::with_capacity(N)),
                label: propkit::Property::new(label),
            }
        }

        pub fn push(&mut self, item: T) -> bool {
            let items = self.items.owner_value_mut(Self::OWNER_KEY);
            if items.len() == N {
                return false;
            }
            items.push(item);
            true
        }
    }
}

fn drain<T: Clone + Debug, const N: usize>(queue: &queue::Queue<'_, T, N>) -> Vec<T> {
    queue.items.value().clone()
}

fn main() {
    let mut q: queue::Queue<'_, u8, 2> = queue::Queue::new("jobs");
    assert!(q.push(1));
    assert!(q.push(2));
    assert!(!q.push(3));

    q.label.assign("done");
    assert_eq!(*q.label, "done");
    assert_eq!(drain(&q), vec![1, 2]);
}
