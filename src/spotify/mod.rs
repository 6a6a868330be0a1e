//! # Spotify Integration Module
//!
//! Thin wrappers around the Spotify Web API endpoints the importer needs, plus
//! the OAuth flow that produces the token they run with.
//!
//! ```text
//! management (resolver, updater)
//!          ↓  SpotifyApi
//! SpotifyClient ── TokenManager (refresh)
//!          ↓
//! search / user / playlist / library  (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Endpoints
//!
//! - `GET /search` - best single track match for a title
//! - `GET /me` - current user, needed to create playlists
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - add tracks to a playlist
//! - `GET /me/tracks/contains` - saved-library membership check
//! - `PUT /me/tracks` - save tracks to the library
//! - `POST /api/token` - code exchange and token refresh
//!
//! Requests are not retried. Any transport error or non-2xx status is returned
//! to the caller, which aborts the run.

use async_trait::async_trait;

use crate::{
    Res,
    types::{CreatePlaylistResponse, CurrentUser, PlaylistSpec, Track},
};

pub mod auth;
mod client;
pub mod library;
pub mod playlist;
pub mod search;
pub mod user;

pub use client::SpotifyClient;

/// The catalog and library operations the importer depends on.
///
/// [`SpotifyClient`] is the production implementation; tests provide in-memory
/// doubles.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Returns the first track matching `query`, or `None` when nothing matches.
    async fn search_track(&self, query: &str) -> Res<Option<Track>>;

    async fn current_user(&self) -> Res<CurrentUser>;

    async fn create_playlist(&self, user_id: &str, spec: &PlaylistSpec)
    -> Res<CreatePlaylistResponse>;

    /// Appends up to 100 track URIs and returns the playlist snapshot ID.
    async fn add_items_to_playlist(&self, playlist_id: &str, uris: &[String]) -> Res<String>;

    /// One flag per ID, in the same order.
    async fn check_saved_tracks(&self, ids: &[String]) -> Res<Vec<bool>>;

    async fn add_saved_tracks(&self, ids: &[String]) -> Res<()>;
}
