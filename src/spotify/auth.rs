use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    Res,
    config::SpotifyConfig,
    errors::SpotifyError,
    management::TokenManager,
    server::start_api_server,
    types::{PkceToken, Token},
    utils, warning,
};

/// Runs the OAuth 2.0 Authorization Code flow with PKCE against Spotify.
///
/// 1. Generates a code verifier and its S256 challenge
/// 2. Starts the local callback server on the configured address
/// 3. Opens the authorization URL in the user's browser
/// 4. Waits for the callback handler to exchange the code for a token
/// 5. Persists the token for later commands
///
/// Browser launch failures only print the URL for manual navigation.
///
/// # Errors
///
/// Fails when the authorize URL cannot be built, the callback never delivers a
/// token within 60 seconds, or the token cannot be written to the cache.
pub async fn auth(config: Arc<SpotifyConfig>, shared_state: Arc<Mutex<Option<PkceToken>>>) -> Res<()> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let auth_url = utils::build_authorize_url(&config, &code_challenge)?;

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier,
            token: None,
        });
    }

    let server_state = Arc::clone(&shared_state);
    let server_config = Arc::clone(&config);
    let server = tokio::spawn(async move {
        if let Err(e) = start_api_server(server_config, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state).await;
    server.abort();

    let token = token.ok_or("Authentication failed or timed out.")?;
    TokenManager::new(token)
        .persist()
        .await
        .map_err(|e| format!("Failed to save token to cache: {}", e))?;

    Ok(())
}

/// Polls the shared state once per second for up to 60 seconds until the
/// callback handler has stored a token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|p| p.token.as_ref()) {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges a refresh token for a new access token.
///
/// The client secret is sent as HTTP Basic credentials. Spotify does not always
/// rotate the refresh token, so the returned `refresh_token` may be empty.
pub async fn refresh_token(config: &SpotifyConfig, refresh_token: &str) -> Result<Token, SpotifyError> {
    let res = Client::new()
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", config.client_id.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;
    token_from_json(&json)
}

/// Completes the PKCE flow by exchanging an authorization code for a token.
///
/// The verifier must be the one whose challenge was sent with the authorize
/// request. Authorization codes are single-use and short-lived, so this runs
/// straight from the callback handler.
pub async fn exchange_code_pkce(
    config: &SpotifyConfig,
    code: &str,
    verifier: &str,
) -> Result<Token, SpotifyError> {
    let res = Client::new()
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", config.client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;
    token_from_json(&json)
}

/// Maps a token endpoint response onto [`Token`], stamping it with the current time.
pub fn token_from_json(json: &Value) -> Result<Token, SpotifyError> {
    let access_token = json["access_token"]
        .as_str()
        .ok_or_else(|| SpotifyError::UnexpectedResponse("missing access_token".into()))?;

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
