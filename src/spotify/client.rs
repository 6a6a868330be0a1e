use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    Res,
    config::SpotifyConfig,
    errors::SpotifyError,
    management::TokenManager,
    spotify::{SpotifyApi, library, playlist, search, user},
    types::{CreatePlaylistResponse, CurrentUser, PlaylistSpec, Track},
};

/// Authenticated Spotify Web API client.
///
/// Holds a single HTTP connection pool and the cached token. Every request asks
/// the [`TokenManager`] for a valid token first, which refreshes it when needed.
pub struct SpotifyClient {
    http: Client,
    config: Arc<SpotifyConfig>,
    token_mgr: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(config: Arc<SpotifyConfig>, token_mgr: TokenManager) -> Self {
        Self {
            http: Client::new(),
            config,
            token_mgr: Mutex::new(token_mgr),
        }
    }

    /// Builds a client from the token cached by `songlist auth`.
    pub async fn from_cache(config: Arc<SpotifyConfig>) -> Result<Self, SpotifyError> {
        let token_mgr = TokenManager::load()
            .await
            .map_err(SpotifyError::MissingToken)?;
        Ok(Self::new(config, token_mgr))
    }

    async fn token(&self) -> String {
        self.token_mgr
            .lock()
            .await
            .get_valid_token(&self.config)
            .await
    }

    fn api_url(&self) -> &str {
        &self.config.api_url
    }
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn search_track(&self, query: &str) -> Res<Option<Track>> {
        let token = self.token().await;
        Ok(search::search_track(&self.http, self.api_url(), &token, query).await?)
    }

    async fn current_user(&self) -> Res<CurrentUser> {
        let token = self.token().await;
        Ok(user::current_user(&self.http, self.api_url(), &token).await?)
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        spec: &PlaylistSpec,
    ) -> Res<CreatePlaylistResponse> {
        let token = self.token().await;
        Ok(playlist::create(&self.http, self.api_url(), &token, user_id, spec).await?)
    }

    async fn add_items_to_playlist(&self, playlist_id: &str, uris: &[String]) -> Res<String> {
        let token = self.token().await;
        Ok(playlist::add_tracks(&self.http, self.api_url(), &token, playlist_id, uris).await?)
    }

    async fn check_saved_tracks(&self, ids: &[String]) -> Res<Vec<bool>> {
        let token = self.token().await;
        let flags = library::contains(&self.http, self.api_url(), &token, ids).await?;
        if flags.len() != ids.len() {
            return Err(SpotifyError::UnexpectedResponse(format!(
                "asked about {} tracks, got {} answers",
                ids.len(),
                flags.len()
            ))
            .into());
        }
        Ok(flags)
    }

    async fn add_saved_tracks(&self, ids: &[String]) -> Res<()> {
        let token = self.token().await;
        Ok(library::save(&self.http, self.api_url(), &token, ids).await?)
    }
}
