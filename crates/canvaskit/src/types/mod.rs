//! Domain types
//!
//! Every type decodes from a JSON:API resource through
//! [`FromResource`](crate::FromResource) and has a plain dictionary form
//! through serde.

pub use account::{AccessToken, Account};
pub use canvas::{Canvas, WEB_BASE_URL};
pub use color::Color;
pub use organization::Organization;
pub use project::Project;
pub use user::User;

pub mod account;
pub mod canvas;
pub mod color;
mod lenient;
pub mod organization;
pub mod project;
pub mod user;
