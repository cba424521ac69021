// Proc-macro crate for propkit owners
//
//! # propkit-macros
//!
//! ## `#[owner]`
//!
//! Declares a struct as the owner of its `#[property]` fields: generates the
//! owner key, the `propkit::Owner` impl and a private `OWNER_KEY` constant,
//! and rewrites annotated fields into `propkit::Property` members.
//!
//! ### Example
//!
//! ```ignore
//! #[propkit::owner]
//! #[derive(Debug, Default)]
//! pub struct Session {
//!     #[property(get, set)]
//!     pub user: String,
//!     #[property(get)]
//!     pub expires_at: u64,
//!     #[property]
//!     token: String,
//! }
//! ```
//!
//! ### Attributes
//!
//! - `#[owner]` / `#[owner(key = Ident)]` on the struct
//! - `#[property]`: private read and write (`PrivateGetSet`)
//! - `#[property(get)]`: public read, owner-only write (`PublicGet`)
//! - `#[property(get, set)]`: public read and write (`PublicGetSet`)

use proc_macro::TokenStream;
use proc_macro_error2::proc_macro_error;
use syn::{DeriveInput, parse_macro_input};

mod owner;

/// Attribute macro declaring a property owner.
///
/// See the `propkit` crate documentation for the generated items.
#[proc_macro_attribute]
#[proc_macro_error]
pub fn owner(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as owner::OwnerArgs);
    let input = parse_macro_input!(item as DeriveInput);
    owner::expand_owner(&args, input).into()
}
