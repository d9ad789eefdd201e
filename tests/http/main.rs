//! HTTP transport integration tests.
//!
//! Starts an axum server over a temporary data directory and exercises it with reqwest.

#![cfg(feature = "http")]

mod support;
