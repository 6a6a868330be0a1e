use reqwest::Client;

use crate::types::{
    AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
    CreatePlaylistResponse, PlaylistSpec,
};

/// Maximum number of items Spotify accepts in one add-items request.
pub const MAX_ITEMS_PER_REQUEST: usize = 100;

/// Creates a playlist owned by `user_id`.
///
/// Spotify does not deduplicate by name: calling this twice with the same spec
/// yields two playlists.
pub async fn create(
    http: &Client,
    api_url: &str,
    token: &str,
    user_id: &str,
    spec: &PlaylistSpec,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let request = CreatePlaylistRequest {
        name: spec.name.clone(),
        description: spec.description.clone(),
        public: spec.public,
        collaborative: false,
    };

    http.post(format!("{api_url}/users/{user_id}/playlists"))
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?
        .json::<CreatePlaylistResponse>()
        .await
}

/// Appends track URIs to a playlist and returns the new snapshot ID.
///
/// The caller is responsible for keeping `uris` within [`MAX_ITEMS_PER_REQUEST`].
pub async fn add_tracks(
    http: &Client,
    api_url: &str,
    token: &str,
    playlist_id: &str,
    uris: &[String],
) -> Result<String, reqwest::Error> {
    let request = AddTrackToPlaylistRequest {
        uris: uris.to_vec(),
    };

    let res = http
        .post(format!("{api_url}/playlists/{playlist_id}/tracks"))
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?
        .json::<AddTrackToPlaylistResponse>()
        .await?;

    Ok(res.snapshot_id)
}
