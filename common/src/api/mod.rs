//! The REST contract consumed by the client.
//!
//! [`ApiCall`] is the single description of a network request: state machines
//! emit it, the frontend executes it, and tests assert on it.

mod call;
mod error;

pub use call::{ApiCall, Method};
pub use error::{ApiError, ErrorBody};
