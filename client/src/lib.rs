//! # inkpost-client
//!
//! Asynchronous client for the inkpost print & mail REST API.
//!
//! Requests are typed records built through builders; the client encodes
//! them as form parameters (multipart when a local file is attached),
//! authenticates with the API key over preemptive basic auth, and
//! deserializes JSON responses into typed values. Every operation is an
//! `async fn`; the returned future is the asynchronous handle for the call.
//!
//! ```no_run
//! use inkpost_client::{Client, Config};
//! use inkpost_client::id::{AddressId, ObjectId};
//! use inkpost_client::protocol::request::JobRequest;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(Config::new("test_0dc8d51e0acffcb188"))?;
//!
//! let request = JobRequest::builder()
//!     .name("Michigan fan letter")
//!     .to(AddressId::parse("adr_43769b47aed248c2")?)
//!     .from(AddressId::parse("adr_7f9ece71fbca3796")?)
//!     .object(ObjectId::parse("obj_7ca5f80b42b6dfca")?)
//!     .build()?;
//!
//! let job = client.create_job(&request).await?;
//! println!("created {}", job.id);
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod config;
mod error;
mod options;
mod routes;

pub use client::Client;
pub use config::Config;
pub use error::Error;
pub use options::ListOptions;

// Re-exported so callers need only one dependency.
pub use inkpost_id as id;
pub use inkpost_protocol as protocol;
