use std::sync::Arc;

use crate::{config::SpotifyConfig, error, spotify::{SpotifyApi, SpotifyClient}, success};

pub async fn whoami(config: Arc<SpotifyConfig>) {
    let client = match SpotifyClient::from_cache(config).await {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    match client.current_user().await {
        Ok(user) => success!(
            "Logged in as {} ({})",
            user.display_name.as_deref().unwrap_or("<no display name>"),
            user.id
        ),
        Err(e) => error!("Failed to fetch current user: {}", e),
    }
}
