//! reqwest transport

pub mod client;

pub use client::{HttpTransport, HttpTransportConfig};
