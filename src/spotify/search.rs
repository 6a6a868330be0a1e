use reqwest::Client;

use crate::types::{SearchResponse, Track};

/// Searches the catalog for a track and returns the first hit, if any.
///
/// Issues `GET /search` with `type=track` and `limit=1`. The query is passed to
/// Spotify verbatim (URL-encoded), so field filters such as `artist:` work too.
///
/// # Errors
///
/// Network failures and non-2xx responses are returned as `reqwest::Error`.
/// An empty result is not an error and yields `Ok(None)`.
pub async fn search_track(
    http: &Client,
    api_url: &str,
    token: &str,
    query: &str,
) -> Result<Option<Track>, reqwest::Error> {
    let res = http
        .get(format!("{api_url}/search"))
        .query(&[("q", query), ("type", "track"), ("limit", "1")])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let body = res.json::<SearchResponse>().await?;
    Ok(body.tracks.items.into_iter().next())
}
