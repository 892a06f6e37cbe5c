//! Core application primitives (HTTP adapter)

pub mod http;

pub use http::*;
