use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use crate::policy::{AccessPolicy, PrivateGetSet, PublicRead, PublicWrite};
use crate::trust::Owner;

/// A value member of `O` whose read and write accessors are gated by `P`.
///
/// The property always holds a value. It is embedded by value in its owner,
/// copied and moved with it, and adds no runtime state besides the value
/// itself.
///
/// | policy | public read | public write | owner (with key) |
/// |---|---|---|---|
/// | [`PrivateGetSet`] | no | no | read + write |
/// | [`PublicGet`](crate::PublicGet) | yes | no | read + write |
/// | [`PublicGetSet`](crate::PublicGetSet) | yes | yes | read + write |
///
/// Public reads go through [`value`](Self::value) or `Deref`, public writes
/// through [`assign`](Self::assign), [`value_mut`](Self::value_mut) or
/// `DerefMut`. The owner reaches every policy through the `owner_*`
/// accessors, which require its [`Owner::Key`].
///
/// The policy gates reads and writes of the stored value, not the member
/// itself. Construction, cloning and moves are public for every policy, so
/// code that can reach the field can still replace the whole property
/// (`cart.items = Property::new(99)`). Keep the field private, or behind
/// `pub(crate)`, when the whole member must not be replaceable from outside.
///
/// Writing a read-only property from outside its owner does not compile:
///
/// ```compile_fail
/// mod shop {
///     #[propkit::owner]
///     pub struct Cart {
///         #[property(get)]
///         pub items: u32,
///     }
/// }
///
/// let mut cart = shop::Cart { items: propkit::Property::new(1) };
/// cart.items.assign(2);
/// ```
///
/// ```compile_fail
/// mod shop {
///     #[propkit::owner]
///     pub struct Cart {
///         #[property(get)]
///         pub items: u32,
///     }
/// }
///
/// let mut cart = shop::Cart { items: propkit::Property::new(1) };
/// *cart.items += 1;
/// ```
///
/// Neither does reading a private one:
///
/// ```compile_fail
/// mod shop {
///     #[propkit::owner]
///     pub struct Cart {
///         #[property]
///         pub coupon: String,
///     }
/// }
///
/// let cart = shop::Cart { coupon: propkit::Property::new(String::new()) };
/// let coupon: &String = &cart.coupon;
/// ```
///
/// or writing one:
///
/// ```compile_fail
/// mod shop {
///     #[propkit::owner]
///     pub struct Cart {
///         #[property]
///         pub coupon: String,
///     }
/// }
///
/// let mut cart = shop::Cart { coupon: propkit::Property::new(String::new()) };
/// cart.coupon.assign("FREE".to_owned());
/// ```
///
/// ```compile_fail
/// mod shop {
///     #[propkit::owner]
///     pub struct Cart {
///         #[property]
///         pub coupon: String,
///     }
/// }
///
/// let mut cart = shop::Cart { coupon: propkit::Property::new(String::new()) };
/// *cart.coupon = "FREE".to_owned();
/// ```
///
/// A private field cannot be replaced from outside at all:
///
/// ```compile_fail
/// mod shop {
///     #[propkit::owner]
///     pub struct Cart {
///         #[property(get)]
///         items: u32,
///     }
///
///     impl Cart {
///         pub fn new() -> Self {
///             Self { items: propkit::Property::new(1) }
///         }
///     }
/// }
///
/// let mut cart = shop::Cart::new();
/// cart.items = propkit::Property::new(99);
/// ```
///
/// Default construction requires a `Default` value type:
///
/// ```compile_fail
/// mod shop {
///     pub struct Sku(pub u64);
///
///     #[propkit::owner]
///     pub struct Line {
///         #[property(get, set)]
///         pub sku: Sku,
///     }
/// }
///
/// let sku: propkit::Property<shop::Line, shop::Sku, propkit::PublicGetSet> = Default::default();
/// ```
#[repr(transparent)]
pub struct Property<O, T, P = PrivateGetSet>
where
    O: Owner,
    P: AccessPolicy,
{
    value: T,
    _marker: PhantomData<fn() -> (O, P)>,
}

impl<O, T, P> Property<O, T, P>
where
    O: Owner,
    P: AccessPolicy,
{
    /// Creates a property holding `value`.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Owner-only read access.
    #[must_use]
    pub fn owner_value(&self, _key: &O::Key) -> &T {
        &self.value
    }

    /// Owner-only mutable access.
    pub fn owner_value_mut(&mut self, _key: &O::Key) -> &mut T {
        &mut self.value
    }

    /// Owner-only assignment. Returns the updated stored value.
    pub fn owner_assign(&mut self, _key: &O::Key, value: T) -> &mut T {
        Self::trace_assign("owner");
        self.value = value;
        &mut self.value
    }

    /// Owner-only assignment returning the previous value.
    pub fn owner_replace(&mut self, _key: &O::Key, value: T) -> T {
        Self::trace_assign("owner");
        std::mem::replace(&mut self.value, value)
    }

    /// Consumes the property, returning the value to its owner.
    #[must_use]
    pub fn into_owner_value(self, _key: &O::Key) -> T {
        self.value
    }

    #[cfg(feature = "tracing")]
    fn trace_assign(access: &'static str) {
        tracing::trace!(
            owner = std::any::type_name::<O>(),
            policy = P::NAME,
            access,
            "property assigned"
        );
    }

    #[cfg(not(feature = "tracing"))]
    #[inline]
    fn trace_assign(_access: &'static str) {}
}

impl<O, T, P> Property<O, T, P>
where
    O: Owner,
    P: PublicRead,
{
    /// Public read access.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the property, returning its value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<O, T, P> Property<O, T, P>
where
    O: Owner,
    P: PublicWrite,
{
    /// Public mutable access.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Public assignment. Returns the updated stored value, so assignments
    /// chain: `*p.assign(12) += 1`.
    pub fn assign(&mut self, value: T) -> &mut T {
        Self::trace_assign("public");
        self.value = value;
        &mut self.value
    }
}

impl<O, T, P> Default for Property<O, T, P>
where
    O: Owner,
    T: Default,
    P: AccessPolicy,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[allow(clippy::expl_impl_clone_on_copy)]
impl<O, T, P> Clone for Property<O, T, P>
where
    O: Owner,
    T: Clone,
    P: AccessPolicy,
{
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.value.clone_from(&source.value);
    }
}

impl<O, T, P> Copy for Property<O, T, P>
where
    O: Owner,
    T: Copy,
    P: AccessPolicy,
{
}

impl<O, T, P> From<T> for Property<O, T, P>
where
    O: Owner,
    P: PublicWrite,
{
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<O, T, P> Deref for Property<O, T, P>
where
    O: Owner,
    P: PublicRead,
{
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<O, T, P> DerefMut for Property<O, T, P>
where
    O: Owner,
    P: PublicWrite,
{
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<O, T, P> AsRef<T> for Property<O, T, P>
where
    O: Owner,
    P: PublicRead,
{
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<O, T, P> AsMut<T> for Property<O, T, P>
where
    O: Owner,
    P: PublicWrite,
{
    fn as_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

// Comparison, hashing and display observe the value, so they exist only for
// publicly readable properties.

impl<O, T, P> PartialEq for Property<O, T, P>
where
    O: Owner,
    T: PartialEq,
    P: PublicRead,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<O, T, P> Eq for Property<O, T, P>
where
    O: Owner,
    T: Eq,
    P: PublicRead,
{
}

impl<O, T, P> PartialOrd for Property<O, T, P>
where
    O: Owner,
    T: PartialOrd,
    P: PublicRead,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<O, T, P> Ord for Property<O, T, P>
where
    O: Owner,
    T: Ord,
    P: PublicRead,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<O, T, P> Hash for Property<O, T, P>
where
    O: Owner,
    T: Hash,
    P: PublicRead,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<O, T, P> fmt::Display for Property<O, T, P>
where
    O: Owner,
    T: fmt::Display,
    P: PublicRead,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// Readable properties format as their value; private ones print
/// `<private>` so a derived `Debug` on the owner never exposes them.
impl<O, T, P> fmt::Debug for Property<O, T, P>
where
    O: Owner,
    T: fmt::Debug,
    P: AccessPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if P::PUBLIC_GET {
            fmt::Debug::fmt(&self.value, f)
        } else {
            f.write_str("<private>")
        }
    }
}
