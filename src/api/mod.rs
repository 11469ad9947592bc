//! REST API clients for the external user/post resources.
//!
//! The graph treats these as black-box record suppliers: each fetch yields
//! the full sequence of raw records for one resource. Transport and decode
//! failures surface as errors; they are never swallowed here.

mod client;
mod records;

pub use client::ApiClient;
pub use records::{PostRecord, UserRecord};
