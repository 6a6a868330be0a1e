//! # CLI Module
//!
//! Command implementations behind the `songlist` binary. Each command loads what
//! it needs (cached token, song list), delegates to [`crate::management`] for
//! the actual work and turns failures into log output.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth login (Authorization Code with PKCE); caches the token
//! - [`playlist`] - Resolves a song list and adds the matches to a new or existing playlist
//! - [`library`] - Resolves a song list and saves the matches that are not saved yet
//! - [`resolve`] - Dry run that only prints what each title resolves to
//! - [`whoami`] - Shows which account the cached token belongs to
//!
//! ## Typical usage
//!
//! ```bash
//! songlist auth
//! songlist resolve songs.txt
//! songlist playlist songs.txt --name "Road trip"
//! songlist library songs.txt
//! ```
//!
//! Failures that abort a run (missing token, remote errors) go through the
//! `error!` macro and exit with status 1. Songs without a catalog match are
//! only warned about.

mod auth;
mod import;
mod library;
mod playlist;
mod resolve;
mod whoami;

pub use auth::auth;
pub use import::resolve_file;
pub use import::run_import;
pub use library::library;
pub use playlist::playlist;
pub use resolve::resolve;
pub use resolve::table_rows;
pub use whoami::whoami;
