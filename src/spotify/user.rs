use reqwest::Client;

use crate::types::CurrentUser;

/// Fetches the profile of the user the token belongs to (`GET /me`).
pub async fn current_user(
    http: &Client,
    api_url: &str,
    token: &str,
) -> Result<CurrentUser, reqwest::Error> {
    http.get(format!("{api_url}/me"))
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?
        .json::<CurrentUser>()
        .await
}
