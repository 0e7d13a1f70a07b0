//! Data models for the DIY Repair Hub client.
//!
//! These models match the backend JSON documents exactly for seamless
//! interoperability; id fields accept both `id` and the backend's `_id`.

mod filters;
mod guide;
mod user;

pub use filters::*;
pub use guide::*;
pub use user::*;
