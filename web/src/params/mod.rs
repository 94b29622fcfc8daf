//! This module holds typed parameters for the demo's endpoint inputs.
//!
//! Form and query values arrive as text. Fields default to empty strings so
//! that a missing field reaches the domain layer and is rejected there with
//! the same status code as a malformed one.

pub(crate) mod counter;
pub(crate) mod todo;
