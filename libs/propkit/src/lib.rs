#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! # propkit
//!
//! Properties are members that read like public data but keep their write
//! (and optionally read) accessors private to the type that owns them. The
//! access rules are chosen per member and checked at compile time; a
//! [`Property`] is exactly as large as the value it holds.
//!
//! ```
//! mod sensors {
//!     #[propkit::owner]
//!     #[derive(Debug, Default)]
//!     pub struct Thermometer {
//!         /// Anyone can read and write it.
//!         #[property(get, set)]
//!         pub label: String,
//!         /// Anyone can read it; only `Thermometer` can change it.
//!         #[property(get)]
//!         pub celsius: f64,
//!         /// Only `Thermometer` can read or change it.
//!         #[property]
//!         pub offset: f64,
//!     }
//!
//!     impl Thermometer {
//!         pub fn calibrate(&mut self, offset: f64) {
//!             self.offset.owner_assign(Self::OWNER_KEY, offset);
//!         }
//!
//!         pub fn sample(&mut self, raw: f64) {
//!             let offset = *self.offset.owner_value(Self::OWNER_KEY);
//!             self.celsius.owner_assign(Self::OWNER_KEY, raw + offset);
//!         }
//!     }
//! }
//!
//! let mut t = sensors::Thermometer::default();
//! t.label.assign("kitchen".to_owned());
//! t.calibrate(0.5);
//! t.sample(20.0);
//!
//! assert_eq!(t.label.as_str(), "kitchen");
//! assert!((*t.celsius - 20.5).abs() < f64::EPSILON);
//! assert_eq!(
//!     format!("{t:?}"),
//!     r#"Thermometer { label: "kitchen", celsius: 20.5, offset: <private> }"#
//! );
//! ```
//!
//! See [`Property`] for the accessor table, [`policy`] for the three access
//! policies and [`trust`] for declaring owners without the macro.
//!
//! ## Features
//!
//! - `macros` (default): re-exports the [`owner`] attribute macro.
//! - `tracing`: emits a `trace!` event named `property assigned` on every
//!   assignment.

pub mod policy;
pub mod property;
pub mod trust;

pub use policy::{AccessPolicy, PrivateGetSet, PublicGet, PublicGetSet, PublicRead, PublicWrite};
pub use property::Property;
pub use trust::Owner;

/// Declares a struct as a property owner.
///
/// The macro:
/// - declares `<Name>OwnerKey` (or the name given with `key = ...`) with the
///   struct's visibility and a private field,
/// - implements [`Owner`] for the struct with that key,
/// - adds a private `OWNER_KEY: &'static <Key>` associated constant,
/// - rewrites every field marked `#[property]`, `#[property(get)]` or
///   `#[property(get, set)]` into a [`Property`] with policy
///   [`PrivateGetSet`], [`PublicGet`] or [`PublicGetSet`].
///
/// Place it above any `#[derive]` so derives see the rewritten fields.
///
/// ```
/// mod inventory {
///     #[propkit::owner(key = StockToken)]
///     #[derive(Clone)]
///     pub struct Stock<T: Clone> {
///         #[property(get)]
///         pub items: Vec<T>,
///         pub location: String,
///     }
///
///     impl<T: Clone> Stock<T> {
///         pub fn new(location: &str) -> Self {
///             Self { items: propkit::Property::new(Vec::new()), location: location.to_owned() }
///         }
///
///         pub fn receive(&mut self, item: T) {
///             self.items.owner_value_mut(Self::OWNER_KEY).push(item);
///         }
///     }
///
///     pub fn token_is_zero_sized() -> bool {
///         std::mem::size_of::<StockToken>() == 0
///     }
/// }
///
/// let mut stock = inventory::Stock::new("north");
/// stock.receive("bolt");
/// let copy = stock.clone();
/// stock.receive("nut");
/// assert_eq!(copy.items.len(), 1);
/// assert_eq!(stock.items.len(), 2);
/// assert!(inventory::token_is_zero_sized());
/// ```
///
/// Invalid input is rejected with a diagnostic:
///
/// ```compile_fail
/// #[propkit::owner]
/// pub struct Meter {
///     #[property(set)]
///     pub reading: u32,
/// }
/// ```
///
/// ```compile_fail
/// #[propkit::owner]
/// pub struct Meter {
///     #[property(get, gte)]
///     pub reading: u32,
/// }
/// ```
///
/// ```compile_fail
/// #[propkit::owner]
/// pub enum Meter {
///     Idle,
/// }
/// ```
///
/// The key cannot be forged outside the owner's module:
///
/// ```compile_fail
/// mod meters {
///     #[propkit::owner]
///     pub struct Meter {
///         #[property]
///         pub reading: u32,
///     }
/// }
///
/// let meter = meters::Meter { reading: propkit::Property::new(1) };
/// let key = meters::MeterOwnerKey { _seal: () };
/// let _ = meter.reading.owner_value(&key);
/// ```
#[cfg(feature = "macros")]
pub use propkit_macros::owner;
