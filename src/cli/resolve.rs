use std::{path::Path, sync::Arc};

use tabled::Table;

use crate::{
    cli::import::resolve_file,
    config::SpotifyConfig,
    error,
    management::ConsoleReporter,
    spotify::SpotifyClient,
    types::{ResolveSummary, ResolvedTableRow, SongQuery},
};

/// Dry run: resolves the song list and prints the matches without touching
/// any playlist or library.
pub async fn resolve(config: Arc<SpotifyConfig>, file: &Path) {
    let client = match SpotifyClient::from_cache(config).await {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let reporter = ConsoleReporter::new();
    match resolve_file(&client, file, &reporter).await {
        Ok((queries, summary)) => println!("{}", Table::new(table_rows(&queries, &summary))),
        Err(e) => error!("Resolving songs failed: {}", e),
    }
}

/// One row per query, in input order. `resolved` and `unresolved` each keep
/// input order, so walking the queries merges them back together.
pub fn table_rows(queries: &[SongQuery], summary: &ResolveSummary) -> Vec<ResolvedTableRow> {
    let mut resolved = summary.resolved.iter().peekable();

    queries
        .iter()
        .map(|query| match resolved.next_if(|t| &t.query == query) {
            Some(t) => ResolvedTableRow {
                title: query.title().to_string(),
                track: t.name.clone(),
                artists: t.artists.join(", "),
            },
            None => ResolvedTableRow {
                title: query.title().to_string(),
                track: "-".to_string(),
                artists: "-".to_string(),
            },
        })
        .collect()
}
