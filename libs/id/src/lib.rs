//! # inkpost-id
//!
//! Typed identifiers for print API resources, with strict parsing and
//! validation.
//!
//! ## Design Principles
//!
//! - Identifiers are opaque and server-generated; they are only ever
//!   constructed by parsing
//! - All identifiers have a canonical string representation with strict
//!   parsing, and round-trip unchanged (parse → format → parse)
//! - Identifiers are typed to prevent handing one resource's id to an
//!   endpoint expecting another
//!
//! ## Identifier Format
//!
//! Resource identifiers use a prefixed format: `{prefix}_{hex}` where the
//! prefix is 3 lowercase letters and the suffix is 16 lowercase hex digits,
//! for a total length of exactly 20 characters.
//!
//! Examples:
//! - `adr_43769b47aed248c2`
//! - `job_7f9ece71fbca3796`
//! - `obj_7ca5f80b42b6dfca`
//!
//! Catalog resources use their own formats and are handled separately:
//! numeric ids for settings, services, and packagings, and `{zip}-{route}`
//! for zip-code routes (e.g. `94158-C001`).

mod error;
mod macros;
mod types;

pub use error::IdError;
pub use types::*;

/// Total length of a prefixed hex identifier, separator included.
pub const ID_LENGTH: usize = 20;
