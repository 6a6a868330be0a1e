use std::{path::Path, sync::Arc};

use crate::{
    cli::import::run_import, config::SpotifyConfig, error, info, management::ConsoleReporter,
    spotify::SpotifyClient, types::UpdateTarget,
};

pub async fn library(config: Arc<SpotifyConfig>, file: &Path, dedupe: bool) {
    let client = match SpotifyClient::from_cache(config).await {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let reporter = ConsoleReporter::new();
    match run_import(&client, file, &UpdateTarget::SavedLibrary, dedupe, &reporter).await {
        Ok(outcome) => {
            if outcome.already_present > 0 {
                info!(
                    "{} songs were already in your library",
                    outcome.already_present
                );
            }
        }
        Err(e) => error!("Import failed: {}", e),
    }
}
