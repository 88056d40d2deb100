//! Request payload types
//!
//! Deserialized from JSON bodies and query strings, with shape validation via
//! the validator crate. Update payloads are partial patches: `None` means the
//! field was not provided. Nullable fields use a double `Option` so a JSON
//! `null` (clear the value) is distinguishable from an absent field.

mod items;
mod lists;

pub use items::{ItemCreate, ItemFilterQuery, ItemUpdate};
pub use lists::{ListCreate, ListDetailQuery, ListUpdate};
