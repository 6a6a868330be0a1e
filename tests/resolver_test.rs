mod common;

use common::{Call, FakeSpotify, RecordingReporter, queries, resolved};
use songlist::management::{NullReporter, dedupe_tracks, resolve_song, resolve_songs};
use songlist::types::SongQuery;
use songlist::utils::parse_song_queries;

#[tokio::test]
async fn test_resolve_song_takes_first_hit() {
    let api = FakeSpotify::new().with_track("Hey Jude", "t1");
    let query = SongQuery::new("Hey Jude").unwrap();

    let track = resolve_song(&api, &query).await.unwrap().unwrap();

    assert_eq!(track.id, "t1");
    assert_eq!(track.uri, "spotify:track:t1");
    assert_eq!(track.query, query);
    assert_eq!(api.calls(), vec![Call::Search("Hey Jude".to_string())]);
}

#[tokio::test]
async fn test_resolve_song_not_found_is_not_an_error() {
    let api = FakeSpotify::new();
    let query = SongQuery::new("No Such Song").unwrap();

    assert!(resolve_song(&api, &query).await.unwrap().is_none());
}

#[tokio::test]
async fn test_resolve_songs_excludes_unmatched_and_reports_them() {
    let api = FakeSpotify::new()
        .with_track("Song A", "a")
        .with_track("Song C", "c");
    let reporter = RecordingReporter::default();

    let summary = resolve_songs(&api, &queries(&["Song A", "Song B", "Song C"]), &reporter)
        .await
        .unwrap();

    let ids: Vec<&str> = summary.resolved.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
    assert_eq!(summary.unresolved, queries(&["Song B"]));
    assert_eq!(
        reporter.events(),
        vec![
            "resolving:Song A",
            "resolved:a",
            "resolving:Song B",
            "unresolved:Song B",
            "resolving:Song C",
            "resolved:c",
            "finished:2/1",
        ]
    );
}

#[tokio::test]
async fn test_blank_lines_never_reach_search() {
    let api = FakeSpotify::new().with_track("Song A", "a");
    let parsed = parse_song_queries("\n   \nSong A\n\t\n\n");

    let summary = resolve_songs(&api, &parsed, &NullReporter).await.unwrap();

    assert_eq!(summary.resolved.len(), 1);
    assert_eq!(api.calls(), vec![Call::Search("Song A".to_string())]);
}

#[tokio::test]
async fn test_resolved_never_exceeds_input() {
    let api = FakeSpotify::new()
        .with_track("x", "1")
        .with_track("y", "2");
    let input = queries(&["x", "y", "z", "x", "w"]);

    let summary = resolve_songs(&api, &input, &NullReporter).await.unwrap();

    assert!(summary.resolved.len() <= input.len());
    assert_eq!(
        summary.resolved.len() + summary.unresolved.len(),
        input.len()
    );
    assert_eq!(
        api.count(|c| matches!(c, Call::Search(_))),
        input.len()
    );
}

#[tokio::test]
async fn test_duplicate_titles_resolve_independently() {
    let api = FakeSpotify::new().with_track("Creep", "c1");

    let summary = resolve_songs(&api, &queries(&["Creep", "Creep"]), &NullReporter)
        .await
        .unwrap();

    assert_eq!(summary.resolved.len(), 2);
    assert_eq!(summary.resolved[0].id, summary.resolved[1].id);
    assert_eq!(api.count(|c| matches!(c, Call::Search(_))), 2);
}

#[tokio::test]
async fn test_remote_failure_aborts_resolution() {
    let api = FakeSpotify::new().failing_search();

    let result = resolve_songs(&api, &queries(&["a", "b"]), &NullReporter).await;

    assert!(result.is_err());
    assert_eq!(api.calls().len(), 1);
}

#[test]
fn test_dedupe_tracks_keeps_first_occurrence() {
    let tracks = vec![
        resolved("1", "first"),
        resolved("2", "second"),
        resolved("1", "first again"),
    ];

    let deduped = dedupe_tracks(tracks);

    assert_eq!(deduped.len(), 2);
    assert_eq!(deduped[0].query.title(), "first");
    assert_eq!(deduped[1].id, "2");
}
