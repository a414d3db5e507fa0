//! Cineshelf player: a desktop client for filtering and browsing a remote
//! movie catalog.
#![allow(missing_docs)]

pub mod api_client;
pub mod config;
pub mod message;
pub mod routes;
pub mod state;
pub mod theme;
pub mod update;
pub mod updates;
pub mod views;

pub use api_client::{ApiClient, SearchPage};
pub use config::Config;
pub use message::Message;
pub use state::State;
