//! # mandrill
//!
//! An async Rust client for the Mandrill transactional email API.
//!
//! ## Features
//!
//! - One call primitive, [`Client::call`], shared by every resource wrapper
//! - API key lookup from an argument, `MANDRILL_APIKEY`, `~/.mandrill.key`
//!   or `/etc/mandrill.key`
//! - Server error names mapped to [`ErrorKind`]
//!
//! ## Example
//!
//! ```no_run
//! use mandrill::{api, Client};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Resolve the key from the environment or a key file
//!     let client = Client::from_key(None, false)?;
//!
//!     let pong = api::users::ping(&client).await?;
//!     println!("{}", pong);
//!
//!     let message = json!({
//!         "subject": "Hello",
//!         "from_email": "me@example.com",
//!         "to": [{"email": "you@example.com"}],
//!         "text": "Hi there",
//!     });
//!     let result = api::messages::send(&client, &message, false).await?;
//!     println!("{}", result);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
mod client;
mod config;
mod error;

// Re-export main types
pub use api::Api;
pub use client::Client;
pub use config::{Config, KeySources, API_KEY_ENV};
pub use error::{ApiError, ConfigError, ErrorKind, MandrillError, Result};
