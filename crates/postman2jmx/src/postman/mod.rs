//! Postman input documents: collection and environment data models.
//!
//! These types mirror the subset of the Postman collection format (v2
//! `item`/`request`/`url` shapes) that the converter consumes. Absent
//! optional fields deserialize to empty defaults; shape variation in the
//! source JSON is normal, not an error.

pub mod environment;
pub mod model;

pub use environment::{EnvironmentLoad, load_environment};
pub use model::{Collection, Item, KeyValue, Request, RequestUrl};
