//! Access policies for [`Property`](crate::Property).
//!
//! A policy is an uninhabited tag type selected at the property's type
//! definition. The set of policies is closed: [`AccessPolicy`] is sealed, so a
//! property cannot be instantiated with any other tag.
//!
//! ```compile_fail
//! use propkit::{AccessPolicy, Owner, Property};
//!
//! enum ReadTwice {}
//! impl AccessPolicy for ReadTwice {
//!     const PUBLIC_GET: bool = true;
//!     const PUBLIC_SET: bool = true;
//!     const NAME: &'static str = "read_twice";
//! }
//! ```
//!
//! ```compile_fail
//! use propkit::{Owner, Property};
//!
//! pub struct Doc {
//!     title: Property<Doc, String, u8>,
//! }
//! pub struct DocKey(());
//! impl Owner for Doc {
//!     type Key = DocKey;
//! }
//! ```

mod sealed {
    pub trait Sealed {}
}

/// Compile-time access policy of a property.
pub trait AccessPolicy: sealed::Sealed + 'static {
    /// Whether the read accessor is visible outside the owner.
    const PUBLIC_GET: bool;
    /// Whether the write accessor is visible outside the owner.
    const PUBLIC_SET: bool;
    /// Policy name used in diagnostics and trace events.
    const NAME: &'static str;
}

/// Policies whose read accessor is visible to everyone.
pub trait PublicRead: AccessPolicy {}

/// Policies whose write accessor is visible to everyone.
pub trait PublicWrite: PublicRead {}

/// Neither accessor is visible outside the owner. This is the default policy.
#[derive(Debug)]
pub enum PrivateGetSet {}

/// Public read accessor, owner-only write accessor.
#[derive(Debug)]
pub enum PublicGet {}

/// Public read and write accessors.
#[derive(Debug)]
pub enum PublicGetSet {}

impl sealed::Sealed for PrivateGetSet {}
impl sealed::Sealed for PublicGet {}
impl sealed::Sealed for PublicGetSet {}

impl AccessPolicy for PrivateGetSet {
    const PUBLIC_GET: bool = false;
    const PUBLIC_SET: bool = false;
    const NAME: &'static str = "private_get_set";
}

impl AccessPolicy for PublicGet {
    const PUBLIC_GET: bool = true;
    const PUBLIC_SET: bool = false;
    const NAME: &'static str = "public_get";
}

impl AccessPolicy for PublicGetSet {
    const PUBLIC_GET: bool = true;
    const PUBLIC_SET: bool = true;
    const NAME: &'static str = "public_get_set";
}

impl PublicRead for PublicGet {}
impl PublicRead for PublicGetSet {}

impl PublicWrite for PublicGetSet {}
