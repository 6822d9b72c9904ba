//! Playback bar state management.
//!
//! - `track` - Track metadata and the seek interval
//! - `command` - Commands issued to the player and their continuations
//! - `playback` - The playback state machine (what can happen next?)
//! - `view` - Renderable projection of a state
//! - `dispatcher` - Single owner of the state, runs commands against collaborators
//! - `inbox` - Marshals events raised on other threads back to the dispatcher
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                             AudioBar                                     │
//! │                                                                          │
//! │   Event ──▶ PlaybackState::transition ──▶ (PlaybackState, [Effect])      │
//! │                                                  │            │          │
//! │                                                  │            ▼          │
//! │                                                  │     Player / Alerts   │
//! │                                                  │            │          │
//! │                                                  │  Event::Completed     │
//! │                                                  │◀───────────┘          │
//! │                                                  ▼                       │
//! │                                           View::of ──▶ Render            │
//! └─────────────────────────────────────────────────────────────────────────┘
//!            ▲
//!            │ EventSender (other threads) ──▶ Inbox ──▶ AudioBar::drain
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use audiobar_state::state::{AudioBar, Event};
//!
//! let mut bar = AudioBar::new(player, alerts, |view: &View| ui.update(view));
//! bar.prepare_to_load(Some(url));
//! bar.dispatch(Event::TapPlay);
//! bar.dispatch(Event::PlayerBecameReady);
//! ```

pub mod command;
pub mod dispatcher;
pub mod inbox;
pub mod playback;
pub mod track;
pub mod view;

// Re-export commonly used types
pub use command::{
    Command, Effect, Pending, Reply, LOAD_FAILURE_ALERT_BUTTON, LOAD_FAILURE_ALERT_TEXT,
};
pub use dispatcher::{Alerts, AudioBar, Player, Render};
pub use inbox::{EventSender, Inbox, InboxClosed};
pub use playback::{Event, InvalidTransition, PlaybackState, Transition};
pub use track::{seek_interval, TrackInfo, SEEK_INTERVAL_SECS};
pub use view::{format_remaining, ButtonMode, View};
