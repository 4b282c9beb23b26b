//! API resource endpoints
//!
//! Endpoint groups of the main [`Client`](crate::Client), organized by
//! resource type.

pub mod canvases;
pub mod organizations;
pub mod projects;

pub use canvases::Canvases;
pub use organizations::Organizations;
pub use projects::Projects;
