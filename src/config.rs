//! Configuration management for the song list importer.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)
//!
//! Required values are collected into a [`SpotifyConfig`] once at startup so that a
//! missing credential aborts the run before any network call is made.

use std::{env, path::PathBuf};

use crate::errors::ConfigError;

pub const CLIENT_ID_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";
pub const REDIRECT_URI_VAR: &str = "SPOTIFY_API_REDIRECT_URI";
pub const SCOPE_VAR: &str = "SPOTIFY_API_AUTH_SCOPE";
pub const SERVER_ADDRESS_VAR: &str = "SERVER_ADDRESS";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
pub const AUTH_URL_VAR: &str = "SPOTIFY_API_AUTH_URL";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from `.env` files.
///
/// Looks first for a `.env` in the current working directory, then for one in the
/// platform-specific local data directory under `songlist/.env`:
/// - Linux: `~/.local/share/songlist/.env`
/// - macOS: `~/Library/Application Support/songlist/.env`
/// - Windows: `%LOCALAPPDATA%/songlist/.env`
///
/// Variables already present in the process environment are never overwritten.
/// Missing files are skipped; only a failure to create the data directory is
/// reported as an error.
///
/// # Example
///
/// ```
/// use songlist::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    dotenv::dotenv().ok();

    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the application directory inside the local data directory.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("songlist");
    path
}

/// Spotify credentials and endpoints needed by every command that talks to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub server_addr: String,
    pub api_url: String,
    pub auth_url: String,
    pub token_url: String,
}

impl SpotifyConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming every required variable that is
    /// unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values count as missing. Optional endpoints fall back to the public
    /// Spotify URLs.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let mut require = |key: &'static str| match get(key) {
            Some(value) => value,
            None => {
                missing.push(key);
                String::new()
            }
        };

        let client_id = require(CLIENT_ID_VAR);
        let client_secret = require(CLIENT_SECRET_VAR);
        let redirect_uri = require(REDIRECT_URI_VAR);
        let scope = require(SCOPE_VAR);

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
            scope,
            server_addr: get(SERVER_ADDRESS_VAR).unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.into()),
            api_url: get(API_URL_VAR)
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.into()),
            auth_url: get(AUTH_URL_VAR).unwrap_or_else(|| DEFAULT_AUTH_URL.into()),
            token_url: get(TOKEN_URL_VAR).unwrap_or_else(|| DEFAULT_TOKEN_URL.into()),
        })
    }
}
