use std::path::Path;

use crate::{
    Res,
    management::{self, Reporter},
    spotify::SpotifyApi,
    types::{ResolveSummary, SongQuery, UpdateOutcome, UpdateTarget},
    utils,
};

/// Reads the song list, resolves every title and hands the matches to the updater.
///
/// Unmatched titles never reach the updater. With `dedupe` only the first
/// occurrence of each track is added.
pub async fn run_import(
    api: &dyn SpotifyApi,
    file: &Path,
    target: &UpdateTarget,
    dedupe: bool,
    reporter: &dyn Reporter,
) -> Res<UpdateOutcome> {
    let (_, summary) = resolve_file(api, file, reporter).await?;

    let tracks = if dedupe {
        management::dedupe_tracks(summary.resolved)
    } else {
        summary.resolved
    };

    management::update_target(api, target, &tracks, reporter).await
}

/// Reads and resolves the song list, returning the parsed queries alongside the
/// resolution result.
pub async fn resolve_file(
    api: &dyn SpotifyApi,
    file: &Path,
    reporter: &dyn Reporter,
) -> Res<(Vec<SongQuery>, ResolveSummary)> {
    let queries = utils::read_song_file(file).await?;
    reporter.parsed(queries.len());
    let summary = management::resolve_songs(api, &queries, reporter).await?;
    Ok((queries, summary))
}
