use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config::SpotifyConfig, error, spotify, success, types::PkceToken};

pub async fn auth(config: Arc<SpotifyConfig>, shared_state: Arc<Mutex<Option<PkceToken>>>) {
    match spotify::auth::auth(config, shared_state).await {
        Ok(()) => success!("Authentication successful!"),
        Err(e) => error!("{}", e),
    }
}
