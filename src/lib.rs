//! DIY Repair Hub Client
//!
//! A typed async client for the Repair Hub REST backend: the session and
//! guide collection stores, the data model, and a thin HTTP wrapper.
//!
//! Components never reach into each other's state. The [`SessionStore`] owns
//! the authenticated identity and bearer credential, the [`GuideStore`] owns
//! the fetched guide collection, and the [`ApiClient`] performs no implicit
//! session lookup — credentials are always passed explicitly by the caller.

pub mod assistant;
pub mod client;
pub mod config;
pub mod errors;
pub mod guides;
pub mod models;
pub mod session;

pub use assistant::Assistant;
pub use client::ApiClient;
pub use config::Config;
pub use errors::ApiError;
pub use guides::GuideStore;
pub use session::{LoginOutcome, SessionStore};
