//! SSE HTTP handler for the web layer.
//!
//! This module contains only the Axum handler for the event stream.
//! The broker itself lives in the `sse` crate.

pub mod handler;
