use reqwest::Client;

use crate::types::SaveTracksRequest;

/// Checks which of the given track IDs are in the user's saved tracks.
///
/// The returned flags are in the same order as `ids`.
pub async fn contains(
    http: &Client,
    api_url: &str,
    token: &str,
    ids: &[String],
) -> Result<Vec<bool>, reqwest::Error> {
    http.get(format!("{api_url}/me/tracks/contains"))
        .query(&[("ids", ids.join(","))])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<bool>>()
        .await
}

/// Saves tracks to the user's library. Saving an already saved track is a no-op
/// on Spotify's side.
pub async fn save(
    http: &Client,
    api_url: &str,
    token: &str,
    ids: &[String],
) -> Result<(), reqwest::Error> {
    http.put(format!("{api_url}/me/tracks"))
        .bearer_auth(token)
        .json(&SaveTracksRequest { ids: ids.to_vec() })
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}
