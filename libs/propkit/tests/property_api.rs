#![cfg(feature = "macros")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use propkit::{AccessPolicy, Owner, Property, PublicRead, PublicWrite};

mod opened {
    #[propkit::owner]
    #[derive(Clone, Debug, Default)]
    pub struct Widget {
        #[property(get, set)]
        pub property: i32,
    }
}

mod opened_read {
    #[propkit::owner]
    #[derive(Clone, Debug, Default)]
    pub struct Widget {
        #[property(get)]
        pub property: i32,
    }

    impl Widget {
        pub fn bump(&mut self) -> i32 {
            let value = self.property.owner_value_mut(Self::OWNER_KEY);
            *value += 1;
            *value
        }

        pub fn reset_to(&mut self, value: i32) -> i32 {
            *self.property.owner_assign(Self::OWNER_KEY, value)
        }
    }
}

mod closed {
    #[propkit::owner]
    #[derive(Clone, Debug, Default)]
    pub struct Widget {
        #[property]
        pub property: String,
    }

    impl Widget {
        pub fn remember(&mut self, secret: &str) {
            self.property.owner_assign(Self::OWNER_KEY, secret.to_owned());
        }

        pub fn matches(&self, guess: &str) -> bool {
            self.property.owner_value(Self::OWNER_KEY) == guess
        }
    }
}

/// Policy of a property type, for access checks on the declared member.
trait PolicyOf {
    type Policy: AccessPolicy;
}

impl<O: Owner, T, P: AccessPolicy> PolicyOf for Property<O, T, P> {
    type Policy = P;
}

fn policy_of<T: PolicyOf>(_: &T) -> &'static str {
    <T::Policy as AccessPolicy>::NAME
}

fn assert_public_read<T: PolicyOf>(_: &T)
where
    T::Policy: PublicRead,
{
}

fn assert_public_write<T: PolicyOf>(_: &T)
where
    T::Policy: PublicWrite,
{
}

#[test]
fn access_test() {
    let opened = opened::Widget::default();
    assert_public_read(&opened.property);
    assert_public_write(&opened.property);
    assert_eq!(policy_of(&opened.property), "public_get_set");

    let opened_read = opened_read::Widget::default();
    assert_public_read(&opened_read.property);
    assert_eq!(policy_of(&opened_read.property), "public_get");

    let closed = closed::Widget::default();
    assert_eq!(policy_of(&closed.property), "private_get_set");
}

#[test]
fn value_test() {
    let mut obj = opened::Widget::default();
    obj.property.assign(12);
    assert_eq!(12, *obj.property);
    *obj.property += 1;
    assert_eq!(13, *obj.property);
}

#[test]
fn copy_test() {
    let mut obj = opened::Widget::default();
    obj.property.assign(13);
    let copy = obj.clone();
    obj.property.assign(0);
    assert_eq!(13, *copy.property);
    assert_eq!(0, *obj.property);
}

#[test]
fn copy_assign_test() {
    let mut obj = opened::Widget::default();
    let mut obj2 = opened::Widget::default();
    obj.property.assign(13);
    obj2.property.clone_from(&obj.property);
    assert_eq!(13, *obj2.property);

    obj2.property = obj.property;
    assert_eq!(13, *obj2.property);
}

#[test]
fn move_test() {
    let mut obj = opened::Widget::default();
    obj.property.assign(13);
    let moved = obj;
    assert_eq!(13, *moved.property);
}

#[test]
fn move_assign_test() {
    let mut obj = closed::Widget::default();
    let mut obj2 = closed::Widget::default();
    obj.remember("swordfish");
    obj2.property = obj.property;
    assert!(obj2.matches("swordfish"));
}

#[test]
fn owner_writes_read_only_property() {
    let mut obj = opened_read::Widget::default();
    assert_eq!(obj.bump(), 1);
    assert_eq!(obj.bump(), 2);
    assert_eq!(obj.reset_to(40), 40);
    assert_eq!(40, *obj.property);
    assert_eq!(obj.property.value(), &40);
}

#[test]
fn chained_assignment() {
    let mut a = opened::Widget::default();
    let mut b = opened::Widget::default();
    b.property.assign(*a.property.assign(7) * 2);
    assert_eq!(7, *a.property);
    assert_eq!(14, *b.property);
}

#[test]
fn private_property_round_trips_through_owner() {
    let mut obj = closed::Widget::default();
    assert!(obj.matches(""));
    obj.remember("swordfish");
    assert!(obj.matches("swordfish"));
    assert!(!obj.matches("marlin"));
}

#[test]
fn debug_hides_private_properties() {
    let mut closed = closed::Widget::default();
    closed.remember("swordfish");
    let rendered = format!("{closed:?}");
    assert_eq!(rendered, "Widget { property: <private> }");
    assert!(!rendered.contains("swordfish"));

    let mut opened = opened::Widget::default();
    opened.property.assign(5);
    assert_eq!(format!("{opened:?}"), "Widget { property: 5 }");
}

#[test]
fn from_value_for_writable_properties() {
    let obj = opened::Widget {
        property: Property::from(3),
    };
    assert_eq!(obj.property.into_value(), 3);
}

#[test]
fn whole_member_replacement_follows_field_visibility() {
    let mut obj = opened_read::Widget::default();
    obj.bump();
    obj.property = Property::new(99);
    assert_eq!(99, *obj.property);

    let mut closed = closed::Widget::default();
    closed.remember("swordfish");
    closed.property = Property::default();
    assert!(closed.matches(""));
}
