mod common;

use common::{Call, FakeSpotify, RecordingReporter, queries, resolved, song_file};
use songlist::cli::{resolve_file, run_import, table_rows};
use songlist::management::NullReporter;
use songlist::types::{PlaylistSpec, ResolveSummary, UpdateTarget};

fn new_playlist() -> UpdateTarget {
    UpdateTarget::NewPlaylist(PlaylistSpec {
        name: "Imported".to_string(),
        description: "test".to_string(),
        public: false,
    })
}

fn added_uris(api: &FakeSpotify) -> Vec<String> {
    api.calls()
        .into_iter()
        .flat_map(|c| match c {
            Call::AddItems(_, uris) => uris,
            Call::AddSaved(ids) => ids,
            _ => Vec::new(),
        })
        .collect()
}

#[tokio::test]
async fn test_import_to_playlist_skips_unmatched_titles() {
    let path = song_file("playlist", "Song A\n\nMissing Song\n  Song B  \n");
    let api = FakeSpotify::new()
        .with_track("Song A", "a")
        .with_track("Song B", "b");
    let reporter = RecordingReporter::default();

    let outcome = run_import(&api, &path, &new_playlist(), false, &reporter)
        .await
        .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(outcome.added, 2);
    assert_eq!(
        added_uris(&api),
        vec!["spotify:track:a".to_string(), "spotify:track:b".to_string()]
    );
    assert_eq!(api.count(|c| matches!(c, Call::Search(_))), 3);

    let events = reporter.events();
    assert_eq!(events[0], "parsed:3");
    assert!(events.contains(&"unresolved:Missing Song".to_string()));
    assert_eq!(events.last().map(String::as_str), Some("added:2"));
}

#[tokio::test]
async fn test_import_to_library_skips_unmatched_titles() {
    let path = song_file("library", "Song A\nMissing Song\n");
    let api = FakeSpotify::new().with_track("Song A", "a");

    let outcome = run_import(&api, &path, &UpdateTarget::SavedLibrary, false, &NullReporter)
        .await
        .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(outcome.added, 1);
    assert_eq!(added_uris(&api), vec!["a".to_string()]);
    assert_eq!(api.count(|c| matches!(c, Call::CheckSaved(_))), 1);
}

#[tokio::test]
async fn test_import_with_nothing_matched_makes_no_update_calls() {
    let path = song_file("nomatch", "Nope\nAlso Nope\n");
    let api = FakeSpotify::new();
    let reporter = RecordingReporter::default();

    let outcome = run_import(&api, &path, &new_playlist(), false, &reporter)
        .await
        .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(outcome.added, 0);
    assert_eq!(outcome.playlist_id, None);
    assert!(
        api.calls()
            .iter()
            .all(|c| matches!(c, Call::Search(_)))
    );
    assert_eq!(reporter.events().last().map(String::as_str), Some("nothing"));
}

#[tokio::test]
async fn test_import_dedupe_removes_duplicate_tracks() {
    let path = song_file("dedupe", "Creep\nKarma Police\nCreep\n");
    let api = FakeSpotify::new()
        .with_track("Creep", "c")
        .with_track("Karma Police", "k");

    let outcome = run_import(
        &api,
        &path,
        &UpdateTarget::ExistingPlaylist("p".to_string()),
        true,
        &NullReporter,
    )
    .await
    .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(outcome.added, 2);
    assert_eq!(
        added_uris(&api),
        vec!["spotify:track:c".to_string(), "spotify:track:k".to_string()]
    );
}

#[tokio::test]
async fn test_import_without_dedupe_keeps_duplicates() {
    let path = song_file("nodedupe", "Creep\nCreep\n");
    let api = FakeSpotify::new().with_track("Creep", "c");

    let outcome = run_import(
        &api,
        &path,
        &UpdateTarget::ExistingPlaylist("p".to_string()),
        false,
        &NullReporter,
    )
    .await
    .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(outcome.added, 2);
    assert_eq!(added_uris(&api).len(), 2);
}

#[tokio::test]
async fn test_resolve_file_table_keeps_input_order() {
    let path = song_file("table", "Missing\nSong A\nGone\nSong B\n");
    let api = FakeSpotify::new()
        .with_track("Song A", "a")
        .with_track("Song B", "b");

    let (parsed, summary) = resolve_file(&api, &path, &NullReporter).await.unwrap();
    std::fs::remove_file(&path).unwrap();

    let rows = table_rows(&parsed, &summary);
    let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
    let tracks: Vec<&str> = rows.iter().map(|r| r.track.as_str()).collect();
    assert_eq!(titles, vec!["Missing", "Song A", "Gone", "Song B"]);
    assert_eq!(tracks, vec!["-", "Track a", "-", "Track b"]);
    assert_eq!(rows[1].artists, "Artist a");
}

#[test]
fn test_table_rows_with_duplicate_titles() {
    let input = queries(&["x", "y", "x"]);
    let summary = ResolveSummary {
        resolved: vec![resolved("1", "x"), resolved("1", "x")],
        unresolved: queries(&["y"]),
    };

    let rows = table_rows(&input, &summary);
    let tracks: Vec<&str> = rows.iter().map(|r| r.track.as_str()).collect();
    assert_eq!(tracks, vec!["Track 1", "-", "Track 1"]);
}
