//! Renderable projection of the playback state.
//!
//! A [`View`] is recomputed from scratch for every state and never mutated
//! on its own.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::playback::PlaybackState;
use super::track::seek_interval;

/// What the play/pause button currently does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonMode {
    Play,
    Pause,
}

/// Snapshot handed to the renderer after every state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub button_mode: ButtonMode,
    pub is_play_pause_button_enabled: bool,
    pub are_seek_buttons_hidden: bool,

    /// Remaining time as `-M:SS`, empty while the position is unknown
    pub playback_time: String,

    pub is_seek_back_button_enabled: bool,
    pub is_seek_forward_button_enabled: bool,
    pub is_loading_indicator_visible: bool,

    /// Remote / media-key play command enablement
    pub is_play_command_enabled: bool,

    /// Remote / media-key pause command enablement
    pub is_pause_command_enabled: bool,

    pub seek_interval: Duration,
    pub playback_duration: Duration,

    /// Zero while the position is unknown
    pub elapsed_playback_time: Duration,

    pub track_name: Option<String>,
    pub artist_name: Option<String>,
    pub album_name: Option<String>,
    pub artwork: Option<Vec<u8>>,
}

impl View {
    /// Project the view for a state.
    pub fn of(state: &PlaybackState) -> Self {
        match state {
            PlaybackState::WaitingForUrl => Self::without_track(ButtonMode::Play, false, false),
            PlaybackState::ReadyToLoadUrl { .. } => {
                Self::without_track(ButtonMode::Play, true, false)
            }
            PlaybackState::WaitingForPlayerToLoad { .. } => {
                Self::without_track(ButtonMode::Pause, true, true)
            }
            PlaybackState::ReadyToPlay {
                is_playing,
                elapsed,
                info,
            } => {
                let remaining = elapsed.map(|t| info.duration - t);
                let is_play_pause_button_enabled = remaining != Some(Duration::zero());

                Self {
                    button_mode: if *is_playing {
                        ButtonMode::Pause
                    } else {
                        ButtonMode::Play
                    },
                    is_play_pause_button_enabled,
                    are_seek_buttons_hidden: false,
                    playback_time: remaining.map(format_remaining).unwrap_or_default(),
                    is_seek_back_button_enabled: elapsed.is_some_and(|t| t > Duration::zero()),
                    is_seek_forward_button_enabled: remaining
                        .is_some_and(|r| r > Duration::zero()),
                    is_loading_indicator_visible: *is_playing && elapsed.is_none(),
                    is_play_command_enabled: !*is_playing && is_play_pause_button_enabled,
                    is_pause_command_enabled: *is_playing && is_play_pause_button_enabled,
                    seek_interval: seek_interval(),
                    playback_duration: info.duration,
                    elapsed_playback_time: elapsed.unwrap_or_else(Duration::zero),
                    track_name: info.title.clone(),
                    artist_name: info.artist.clone(),
                    album_name: info.album.clone(),
                    artwork: info.artwork.clone(),
                }
            }
        }
    }

    // Shared shape of the three states with no track metadata yet.
    fn without_track(button_mode: ButtonMode, is_enabled: bool, is_loading: bool) -> Self {
        let is_pause_button = button_mode == ButtonMode::Pause;
        Self {
            button_mode,
            is_play_pause_button_enabled: is_enabled,
            are_seek_buttons_hidden: true,
            playback_time: String::new(),
            is_seek_back_button_enabled: false,
            is_seek_forward_button_enabled: false,
            is_loading_indicator_visible: is_loading,
            is_play_command_enabled: is_enabled && !is_pause_button,
            is_pause_command_enabled: is_enabled && is_pause_button,
            seek_interval: seek_interval(),
            playback_duration: Duration::zero(),
            elapsed_playback_time: Duration::zero(),
            track_name: None,
            artist_name: None,
            album_name: None,
            artwork: None,
        }
    }

    /// Convert to JSON for UI bridges. Times are in fractional seconds.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "button_mode": self.button_mode,
            "is_play_pause_button_enabled": self.is_play_pause_button_enabled,
            "are_seek_buttons_hidden": self.are_seek_buttons_hidden,
            "playback_time": self.playback_time,
            "is_seek_back_button_enabled": self.is_seek_back_button_enabled,
            "is_seek_forward_button_enabled": self.is_seek_forward_button_enabled,
            "is_loading_indicator_visible": self.is_loading_indicator_visible,
            "is_play_command_enabled": self.is_play_command_enabled,
            "is_pause_command_enabled": self.is_pause_command_enabled,
            "seek_interval": as_secs_f64(self.seek_interval),
            "playback_duration": as_secs_f64(self.playback_duration),
            "elapsed_playback_time": as_secs_f64(self.elapsed_playback_time),
            "track_name": self.track_name,
            "artist_name": self.artist_name,
            "album_name": self.album_name,
            "artwork": self.artwork
        })
    }
}

fn as_secs_f64(t: Duration) -> f64 {
    t.num_milliseconds() as f64 / 1000.0
}

/// Format remaining time as `-M:SS`, rounded to the nearest second.
///
/// Minutes are not folded into hours: 3600s renders as `-60:00`.
pub fn format_remaining(remaining: Duration) -> String {
    let millis = remaining.num_milliseconds().max(0);
    let secs = (millis + 500) / 1000;
    format!("-{}:{:02}", secs / 60, secs % 60)
}
