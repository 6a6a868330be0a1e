use std::collections::HashSet;

use crate::{
    Res,
    management::Reporter,
    spotify::SpotifyApi,
    types::{ResolveSummary, ResolvedTrack, SongQuery},
};

/// Looks up a single song with one search request and accepts the first hit.
///
/// Returns `Ok(None)` when the catalog has no match.
pub async fn resolve_song(api: &dyn SpotifyApi, query: &SongQuery) -> Res<Option<ResolvedTrack>> {
    let track = api.search_track(query.title()).await?;
    Ok(track.map(|t| ResolvedTrack::from_track(t, query.clone())))
}

/// Resolves songs one after another in input order.
///
/// Unmatched songs are reported and collected in `unresolved`; they never abort
/// the run. Duplicate titles are searched again and may produce duplicate
/// tracks. Any remote failure is returned immediately.
pub async fn resolve_songs(
    api: &dyn SpotifyApi,
    queries: &[SongQuery],
    reporter: &dyn Reporter,
) -> Res<ResolveSummary> {
    let mut summary = ResolveSummary::default();

    for query in queries {
        reporter.resolving(query);
        match resolve_song(api, query).await? {
            Some(track) => {
                reporter.resolved(&track);
                summary.resolved.push(track);
            }
            None => {
                reporter.unresolved(query);
                summary.unresolved.push(query.clone());
            }
        }
    }

    reporter.resolution_finished(&summary);
    Ok(summary)
}

/// Keeps the first occurrence of every track ID.
pub fn dedupe_tracks(tracks: Vec<ResolvedTrack>) -> Vec<ResolvedTrack> {
    let mut seen = HashSet::new();
    tracks
        .into_iter()
        .filter(|t| seen.insert(t.id.clone()))
        .collect()
}
