//! Owner trust relationship.
//!
//! Every property names exactly one owner type. The owner proves it is the
//! caller by presenting a reference to its [`Owner::Key`], a token type whose
//! only field is private to the owner's module:
//!
//! ```
//! use propkit::Property;
//!
//! mod bank {
//!     use propkit::{Owner, Property, PublicGet};
//!
//!     pub struct Account {
//!         pub balance: Property<Account, u64, PublicGet>,
//!     }
//!
//!     pub struct AccountKey(());
//!
//!     impl Owner for Account {
//!         type Key = AccountKey;
//!     }
//!
//!     const KEY: &AccountKey = &AccountKey(());
//!
//!     impl Account {
//!         pub fn deposit(&mut self, amount: u64) {
//!             *self.balance.owner_value_mut(KEY) += amount;
//!         }
//!     }
//! }
//!
//! let mut account = bank::Account { balance: Property::new(10) };
//! account.deposit(5);
//! assert_eq!(*account.balance, 15);
//! ```
//!
//! Code outside the owner's module cannot build the key, so it cannot reach
//! the owner-only accessors:
//!
//! ```compile_fail
//! mod bank {
//!     use propkit::{Owner, Property, PublicGet};
//!
//!     pub struct Account {
//!         pub balance: Property<Account, u64, PublicGet>,
//!     }
//!
//!     pub struct AccountKey(());
//!
//!     impl Owner for Account {
//!         type Key = AccountKey;
//!     }
//! }
//!
//! let mut account = bank::Account { balance: propkit::Property::new(10) };
//! account.balance.owner_assign(&bank::AccountKey(()), 1_000_000);
//! ```
//!
//! The `#[owner]` attribute macro generates the key, the [`Owner`] impl and a
//! private `OWNER_KEY` constant, which is the usual way to declare an owner.

/// A type that embeds properties and holds exclusive trust over them.
///
/// Implement it once per owner type. The key type should have no public
/// constructor; anyone able to produce a `&Self::Key` is treated as part of
/// the owner's implementation.
pub trait Owner {
    /// Token proving the caller is inside the owner's implementation.
    type Key: 'static;
}
