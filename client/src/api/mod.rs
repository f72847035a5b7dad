//! Per-resource operations, one module per collection.
//!
//! Every resource follows the same shapes: `create` POSTs the encoded
//! parameter map, `get` fetches `{collection}/{id}`, `list` takes
//! [`crate::ListOptions`], and `delete` exists where the API supports it.

mod addresses;
mod area_mail;
mod bank_accounts;
mod catalog;
mod checks;
mod jobs;
mod objects;
mod postcards;
