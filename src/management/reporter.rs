use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    info, success,
    types::{CreatePlaylistResponse, ResolveSummary, ResolvedTrack, SongQuery, UpdateTarget},
    warning,
};

/// Observer for resolution and update progress.
///
/// The resolver and updater never print on their own; they report through this
/// trait so they can run without a terminal. Every method defaults to a no-op.
pub trait Reporter: Send + Sync {
    fn parsed(&self, _count: usize) {}
    fn resolving(&self, _query: &SongQuery) {}
    fn resolved(&self, _track: &ResolvedTrack) {}
    fn unresolved(&self, _query: &SongQuery) {}
    fn resolution_finished(&self, _summary: &ResolveSummary) {}
    fn playlist_created(&self, _playlist: &CreatePlaylistResponse) {}
    fn already_present(&self, _track: &ResolvedTrack) {}
    fn added(&self, _count: usize, _target: &UpdateTarget) {}
    fn nothing_to_add(&self) {}
}

/// Discards every event.
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Prints events with the crate's log macros and shows a spinner while
/// songs are being searched.
pub struct ConsoleReporter {
    pb: ProgressBar,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        Self { pb }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn parsed(&self, count: usize) {
        info!("Parsed {} songs from the song list", count);
    }

    fn resolving(&self, query: &SongQuery) {
        self.pb.enable_steady_tick(Duration::from_millis(100));
        self.pb.set_message(format!("Searching \"{}\"...", query.title()));
    }

    fn unresolved(&self, query: &SongQuery) {
        self.pb
            .suspend(|| warning!("Song '{}' not found on Spotify.", query.title()));
    }

    fn resolution_finished(&self, summary: &ResolveSummary) {
        self.pb.finish_and_clear();
        info!(
            "Matched {} songs, {} unmatched",
            summary.resolved.len(),
            summary.unresolved.len()
        );
    }

    fn playlist_created(&self, playlist: &CreatePlaylistResponse) {
        success!("Created playlist \"{}\" ({})", playlist.name, playlist.id);
        warning!("A new playlist is created on every run; use --playlist-id to reuse this one.");
    }

    fn already_present(&self, track: &ResolvedTrack) {
        info!("'{}' is already in your library", track.name);
    }

    fn added(&self, count: usize, target: &UpdateTarget) {
        match target {
            UpdateTarget::SavedLibrary => success!("Added {} songs to your library.", count),
            _ => success!("Added {} songs to the playlist.", count),
        }
    }

    fn nothing_to_add(&self) {
        warning!("No songs were added.");
    }
}
