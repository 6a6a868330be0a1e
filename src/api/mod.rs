//! # API Module
//!
//! HTTP endpoints served by the temporary local server that runs during
//! `songlist auth`.
//!
//! - [`callback`] - Receives the authorization code from Spotify's OAuth redirect
//!   and exchanges it for an access token using the stored PKCE verifier.
//! - [`health`] - Reports application status and version.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use songlist::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
