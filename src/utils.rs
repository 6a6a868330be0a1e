use std::path::Path;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{Res, config::SpotifyConfig, types::SongQuery};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Builds the Spotify authorize URL for the PKCE flow.
pub fn build_authorize_url(config: &SpotifyConfig, code_challenge: &str) -> Res<String> {
    let url = reqwest::Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("code_challenge", code_challenge),
            ("code_challenge_method", "S256"),
            ("scope", config.scope.as_str()),
        ],
    )?;
    Ok(url.to_string())
}

/// Turns file contents into song queries, one per non-blank line, in file order.
pub fn parse_song_queries(content: &str) -> Vec<SongQuery> {
    content
        .trim_start_matches('\u{feff}')
        .lines()
        .filter_map(SongQuery::new)
        .collect()
}

pub async fn read_song_file(path: impl AsRef<Path>) -> Res<Vec<SongQuery>> {
    let path = path.as_ref();
    let content = async_fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read song list {}: {}", path.display(), e))?;
    Ok(parse_song_queries(&content))
}
