//! Track metadata reported by the player once an item is ready.

use chrono::Duration;

/// Seconds skipped by each seek-back / seek-forward tap.
pub const SEEK_INTERVAL_SECS: i64 = 15;

/// Step applied by both seek directions.
pub fn seek_interval() -> Duration {
    Duration::seconds(SEEK_INTERVAL_SECS)
}

/// Metadata for the loaded track.
///
/// Obtained once from the player after it becomes ready and never changed
/// for the lifetime of that load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,

    /// Raw artwork image bytes
    pub artwork: Option<Vec<u8>>,

    pub duration: Duration,
}

impl TrackInfo {
    /// Info with only a duration known.
    pub fn new(duration: Duration) -> Self {
        Self {
            title: None,
            artist: None,
            album: None,
            artwork: None,
            duration,
        }
    }

    /// Info with a duration given in whole seconds.
    pub fn with_duration_secs(secs: i64) -> Self {
        Self::new(Duration::seconds(secs))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn with_artwork(mut self, artwork: Vec<u8>) -> Self {
        self.artwork = Some(artwork);
        self
    }

    /// Clamp a position into `[0, duration]`.
    pub fn clamp(&self, position: Duration) -> Duration {
        position.max(Duration::zero()).min(self.duration)
    }
}
