//! JMeter test-plan output: element tree, fixed skeleton, request mapping,
//! and serialization.
//!
//! ## Architecture
//!
//! The converter builds an in-memory XML element tree ([`document`]) using
//! a fixed skeleton ([`plan`]): test plan -> thread group -> variable
//! blocks -> flattened request samplers ([`sampler`]). Every JMeter
//! container element is immediately followed by a sibling `hashTree`
//! scope-closer, including empty ones. [`document::serialize`] renders the
//! tree as 4-space-indented XML.

pub mod document;
pub mod plan;
pub mod props;
pub mod sampler;

pub use document::{XmlElement, serialize};
pub use plan::build_plan;
