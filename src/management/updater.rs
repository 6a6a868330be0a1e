use crate::{
    Res,
    errors::SpotifyError,
    management::Reporter,
    spotify::{SpotifyApi, playlist::MAX_ITEMS_PER_REQUEST},
    types::{ResolvedTrack, UpdateOutcome, UpdateTarget},
};

/// Adds resolved tracks to the given target.
///
/// An empty `tracks` slice performs no remote call at all, not even playlist
/// creation, and reports zero added.
///
/// For [`UpdateTarget::NewPlaylist`] a playlist is created on every call, so
/// running the same import twice leaves two playlists behind. Tracks are added
/// with one request per 100 URIs.
///
/// For [`UpdateTarget::SavedLibrary`] each track is checked for membership
/// first and only saved when absent, which makes repeated runs add nothing.
pub async fn update_target(
    api: &dyn SpotifyApi,
    target: &UpdateTarget,
    tracks: &[ResolvedTrack],
    reporter: &dyn Reporter,
) -> Res<UpdateOutcome> {
    if tracks.is_empty() {
        reporter.nothing_to_add();
        return Ok(UpdateOutcome::default());
    }

    let outcome = match target {
        UpdateTarget::NewPlaylist(spec) => {
            let user = api.current_user().await?;
            let playlist = api.create_playlist(&user.id, spec).await?;
            reporter.playlist_created(&playlist);
            add_to_playlist(api, &playlist.id, tracks).await?
        }
        UpdateTarget::ExistingPlaylist(playlist_id) => {
            add_to_playlist(api, playlist_id, tracks).await?
        }
        UpdateTarget::SavedLibrary => add_to_library(api, tracks, reporter).await?,
    };

    if outcome.added == 0 {
        reporter.nothing_to_add();
    } else {
        reporter.added(outcome.added, target);
    }
    Ok(outcome)
}

async fn add_to_playlist(
    api: &dyn SpotifyApi,
    playlist_id: &str,
    tracks: &[ResolvedTrack],
) -> Res<UpdateOutcome> {
    let uris: Vec<String> = tracks.iter().map(|t| t.uri.clone()).collect();

    for chunk in uris.chunks(MAX_ITEMS_PER_REQUEST) {
        api.add_items_to_playlist(playlist_id, chunk).await?;
    }

    Ok(UpdateOutcome {
        added: uris.len(),
        already_present: 0,
        playlist_id: Some(playlist_id.to_string()),
    })
}

async fn add_to_library(
    api: &dyn SpotifyApi,
    tracks: &[ResolvedTrack],
    reporter: &dyn Reporter,
) -> Res<UpdateOutcome> {
    let mut outcome = UpdateOutcome::default();

    for track in tracks {
        let ids = [track.id.clone()];
        let Some(&saved) = api.check_saved_tracks(&ids).await?.first() else {
            return Err(SpotifyError::UnexpectedResponse(format!(
                "no membership answer for track {}",
                track.id
            ))
            .into());
        };

        if saved {
            reporter.already_present(track);
            outcome.already_present += 1;
            continue;
        }

        api.add_saved_tracks(&ids).await?;
        outcome.added += 1;
    }

    Ok(outcome)
}
