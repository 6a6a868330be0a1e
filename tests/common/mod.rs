#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;
use songlist::{
    Res,
    management::Reporter,
    spotify::SpotifyApi,
    types::{
        CreatePlaylistResponse, CurrentUser, PlaylistSpec, ResolveSummary, ResolvedTrack,
        SongQuery, Track, TrackArtist, UpdateTarget,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Search(String),
    CurrentUser,
    CreatePlaylist(String),
    AddItems(String, Vec<String>),
    CheckSaved(Vec<String>),
    AddSaved(Vec<String>),
}

/// In-memory stand-in for the Spotify API that records every call.
#[derive(Default)]
pub struct FakeSpotify {
    catalog: HashMap<String, Track>,
    saved: Mutex<HashSet<String>>,
    playlists: Mutex<HashMap<String, Vec<String>>>,
    calls: Mutex<Vec<Call>>,
    fail_search: bool,
    silent_contains: bool,
}

impl FakeSpotify {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_track(mut self, title: &str, id: &str) -> Self {
        self.catalog.insert(title.to_string(), test_track(id));
        self
    }

    pub fn with_saved(self, id: &str) -> Self {
        self.saved.lock().unwrap().insert(id.to_string());
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    /// Answers membership checks with an empty list.
    pub fn silent_contains(mut self) -> Self {
        self.silent_contains = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    pub fn saved(&self) -> HashSet<String> {
        self.saved.lock().unwrap().clone()
    }

    pub fn playlists(&self) -> HashMap<String, Vec<String>> {
        self.playlists.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl SpotifyApi for FakeSpotify {
    async fn search_track(&self, query: &str) -> Res<Option<Track>> {
        self.record(Call::Search(query.to_string()));
        if self.fail_search {
            return Err("429 Too Many Requests".into());
        }
        Ok(self.catalog.get(query).cloned())
    }

    async fn current_user(&self) -> Res<CurrentUser> {
        self.record(Call::CurrentUser);
        Ok(CurrentUser {
            id: "tester".to_string(),
            display_name: Some("Tester".to_string()),
        })
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        spec: &PlaylistSpec,
    ) -> Res<CreatePlaylistResponse> {
        self.record(Call::CreatePlaylist(user_id.to_string()));
        let mut playlists = self.playlists.lock().unwrap();
        let id = format!("playlist{}", playlists.len() + 1);
        playlists.insert(id.clone(), Vec::new());
        Ok(CreatePlaylistResponse {
            id,
            name: spec.name.clone(),
            description: Some(spec.description.clone()),
            public: Some(spec.public),
            collaborative: false,
        })
    }

    async fn add_items_to_playlist(&self, playlist_id: &str, uris: &[String]) -> Res<String> {
        self.record(Call::AddItems(playlist_id.to_string(), uris.to_vec()));
        self.playlists
            .lock()
            .unwrap()
            .entry(playlist_id.to_string())
            .or_default()
            .extend(uris.iter().cloned());
        Ok("snapshot".to_string())
    }

    async fn check_saved_tracks(&self, ids: &[String]) -> Res<Vec<bool>> {
        self.record(Call::CheckSaved(ids.to_vec()));
        if self.silent_contains {
            return Ok(Vec::new());
        }
        let saved = self.saved.lock().unwrap();
        Ok(ids.iter().map(|id| saved.contains(id)).collect())
    }

    async fn add_saved_tracks(&self, ids: &[String]) -> Res<()> {
        self.record(Call::AddSaved(ids.to_vec()));
        self.saved.lock().unwrap().extend(ids.iter().cloned());
        Ok(())
    }
}

/// Collects reporter events as plain strings.
#[derive(Default)]
pub struct RecordingReporter {
    pub events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl Reporter for RecordingReporter {
    fn parsed(&self, count: usize) {
        self.push(format!("parsed:{}", count));
    }

    fn resolving(&self, query: &SongQuery) {
        self.push(format!("resolving:{}", query.title()));
    }

    fn resolved(&self, track: &ResolvedTrack) {
        self.push(format!("resolved:{}", track.id));
    }

    fn unresolved(&self, query: &SongQuery) {
        self.push(format!("unresolved:{}", query.title()));
    }

    fn resolution_finished(&self, summary: &ResolveSummary) {
        self.push(format!(
            "finished:{}/{}",
            summary.resolved.len(),
            summary.unresolved.len()
        ));
    }

    fn playlist_created(&self, playlist: &CreatePlaylistResponse) {
        self.push(format!("created:{}", playlist.id));
    }

    fn already_present(&self, track: &ResolvedTrack) {
        self.push(format!("present:{}", track.id));
    }

    fn added(&self, count: usize, _target: &UpdateTarget) {
        self.push(format!("added:{}", count));
    }

    fn nothing_to_add(&self) {
        self.push("nothing".to_string());
    }
}

pub fn test_track(id: &str) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {}", id),
        uri: format!("spotify:track:{}", id),
        artists: vec![TrackArtist {
            id: format!("{}_artist", id),
            name: format!("Artist {}", id),
        }],
    }
}

pub fn resolved(id: &str, title: &str) -> ResolvedTrack {
    ResolvedTrack::from_track(test_track(id), SongQuery::new(title).unwrap())
}

/// Writes `content` to a unique file in the temp directory.
pub fn song_file(name: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "songlist-{}-{}.txt",
        name,
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}

pub fn queries(titles: &[&str]) -> Vec<SongQuery> {
    titles.iter().filter_map(|t| SongQuery::new(t)).collect()
}
