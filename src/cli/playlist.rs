use std::{path::Path, sync::Arc};

use crate::{
    cli::import::run_import,
    config::SpotifyConfig,
    error, info,
    management::ConsoleReporter,
    spotify::SpotifyClient,
    types::{PlaylistSpec, UpdateTarget},
};

pub async fn playlist(
    config: Arc<SpotifyConfig>,
    file: &Path,
    spec: PlaylistSpec,
    playlist_id: Option<String>,
    dedupe: bool,
) {
    let target = match playlist_id {
        Some(id) => UpdateTarget::ExistingPlaylist(id),
        None => UpdateTarget::NewPlaylist(spec),
    };

    let client = match SpotifyClient::from_cache(config).await {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let reporter = ConsoleReporter::new();
    match run_import(&client, file, &target, dedupe, &reporter).await {
        Ok(outcome) => {
            if let Some(id) = outcome.playlist_id {
                info!("Playlist: https://open.spotify.com/playlist/{}", id);
            }
        }
        Err(e) => error!("Import failed: {}", e),
    }
}
