mod auth;
mod reporter;
mod resolver;
mod updater;

pub use auth::TokenManager;
pub use reporter::ConsoleReporter;
pub use reporter::NullReporter;
pub use reporter::Reporter;
pub use resolver::dedupe_tracks;
pub use resolver::resolve_song;
pub use resolver::resolve_songs;
pub use updater::update_target;
