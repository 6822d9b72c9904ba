//! AudioBar State Library
//!
//! This crate provides the control logic behind a single-track audio
//! playback bar.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Playback State Machine** - Tracks whether a track is designated, loading
//!   or ready, and decides which commands the player must run for each event.
//!
//! - **Effects** - Commands are returned as data and their acknowledgements
//!   folded back in as events, so the machine itself never calls the player.
//!
//! - **View Projection** - A pure snapshot of button modes, enablement,
//!   remaining time and track metadata.
//!
//! - **Dispatcher** - Holds the one authoritative state and drives injected
//!   `Player` / `Alerts` / `Render` collaborators.
//!
//! # Design Principles
//!
//! 1. **Total transitions** - Every state/event pair is defined. Events that
//!    mean nothing in the current state are ignored, never a crash.
//!
//! 2. **Clamp, don't fail** - Seeking past either end of the track lands on
//!    the boundary.
//!
//! 3. **No decoding or I/O** - The media engine is an injected collaborator.
//!
//! 4. **One event at a time** - Each event, its commands and their
//!    completions are folded before the next event is accepted.
//!
//! # Example
//!
//! ```rust
//! use audiobar_state::state::{Alerts, AudioBar, Event, PlaybackState, Player, TrackInfo, View};
//! use chrono::Duration;
//! use url::Url;
//!
//! struct Engine;
//!
//! impl Player for Engine {
//!     fn load(&mut self, _url: Option<&Url>) {}
//!     fn get_info(&mut self) -> TrackInfo {
//!         TrackInfo::with_duration_secs(60).with_title("Intro")
//!     }
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn set_elapsed(&mut self, _elapsed: Duration) {}
//! }
//!
//! struct NoAlerts;
//!
//! impl Alerts for NoAlerts {
//!     fn show_alert(&mut self, _text: &str, _button: &str) {}
//! }
//!
//! let mut bar = AudioBar::new(Engine, NoAlerts, |_: &View| {});
//!
//! bar.prepare_to_load(Some(Url::parse("https://example.com/intro.mp3").unwrap()));
//! bar.dispatch(Event::TapPlay);
//! bar.dispatch(Event::PlayerBecameReady);
//! assert!(bar.state().is_playing());
//!
//! bar.dispatch(Event::PlayerReportedElapsed(Duration::seconds(20)));
//! assert_eq!(bar.view().playback_time, "-0:40");
//!
//! bar.reset();
//! assert_eq!(*bar.state(), PlaybackState::WaitingForUrl);
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
