mod units {
    #[propkit::owner(key = MetersKey)]
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub struct Meters(#[property(get)] pub f64, pub u8);

    impl Meters {
        pub fn stretch(mut self, by: f64) -> Self {
            *self.0.owner_value_mut(Self::OWNER_KEY) += by;
            self
        }
    }

    pub fn key_size() -> usize {
        std::mem::size_of::<MetersKey>()
    }
}

fn assert_owner<O: propkit::Owner<Key = units::MetersKey>>() {}

fn main() {
    assert_owner::<units::Meters>();
    assert_eq!(units::key_size(), 0);

    let a = units::Meters::default().stretch(1.5);
    let b = a;
    assert_eq!(a, b);
    assert!((*b.0 - 1.5).abs() < f64::EPSILON);
    assert_eq!(std::mem::size_of::<units::Meters>(), std::mem::size_of::<(f64, u8)>());
}
