//! Playback state machine.
//!
//! Owns the single authoritative playback-bar state and decides which
//! commands the player must run for every user or player event.
//!
//! # State Diagram
//!
//! ```text
//! ┌───────────────┐  prepare_to_load(url)   ┌────────────────┐
//! │ WaitingForUrl │────────────────────────▶│ ReadyToLoadUrl │◀──────────────┐
//! └───────────────┘                         └───────┬────────┘               │
//!         ▲                                         │ tap play               │
//!         │ reset / prepare_to_load(none)           │ Load(url) done         │
//!         │                                         ▼                        │ fail + alert
//!         │                              ┌────────────────────────┐          │ tap (cancel)
//!         ├──────────────────────────────│ WaitingForPlayerToLoad │──────────┤
//!         │          Load(none) done     └───────────┬────────────┘          │
//!         │                                          │ ready                 │
//!         │                                          │ Play, GetInfo done    │
//!         │                                          ▼                       │
//!         │                                  ┌─────────────┐                 │
//!         └──────────────────────────────────│ ReadyToPlay │─────────────────┘
//!                    Load(none) done         └─────────────┘ prepare_to_load(url)
//! ```
//!
//! Effectful requests leave the state untouched and return [`Effect`]s. The
//! state only moves once the matching [`Event::Completed`] is folded.

use std::fmt;

use chrono::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use super::command::{Effect, Pending, Reply};
use super::track::{seek_interval, TrackInfo};
use super::view::View;

/// Where the playback bar currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackState {
    /// No track designated
    WaitingForUrl,

    /// Track designated but not yet handed to the player
    ReadyToLoadUrl { url: Url },

    /// Player told to load `url`; waiting for ready or fail
    WaitingForPlayerToLoad { url: Url },

    /// Player has a decodable item.
    ///
    /// `elapsed` is `None` until the player first reports a position.
    ReadyToPlay {
        is_playing: bool,
        elapsed: Option<Duration>,
        info: TrackInfo,
    },
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::WaitingForUrl
    }
}

impl PlaybackState {
    /// Check if a track URL has been designated.
    pub fn has_url(&self) -> bool {
        !matches!(self, Self::WaitingForUrl)
    }

    /// Check if the player is involved (loading or loaded).
    pub fn is_player_active(&self) -> bool {
        matches!(
            self,
            Self::WaitingForPlayerToLoad { .. } | Self::ReadyToPlay { .. }
        )
    }

    pub fn is_ready_to_play(&self) -> bool {
        matches!(self, Self::ReadyToPlay { .. })
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Self::ReadyToPlay { is_playing: true, .. })
    }

    /// Get the URL while one is designated but not yet playable.
    pub fn url(&self) -> Option<&Url> {
        match self {
            Self::ReadyToLoadUrl { url } | Self::WaitingForPlayerToLoad { url } => Some(url),
            _ => None,
        }
    }

    /// Get the last known position, if ready and reported.
    pub fn elapsed(&self) -> Option<Duration> {
        match self {
            Self::ReadyToPlay { elapsed, .. } => *elapsed,
            _ => None,
        }
    }

    /// Get the track info when ready to play.
    pub fn info(&self) -> Option<&TrackInfo> {
        match self {
            Self::ReadyToPlay { info, .. } => Some(info),
            _ => None,
        }
    }

    /// Short variant name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WaitingForUrl => "WaitingForUrl",
            Self::ReadyToLoadUrl { .. } => "ReadyToLoadUrl",
            Self::WaitingForPlayerToLoad { .. } => "WaitingForPlayerToLoad",
            Self::ReadyToPlay { .. } => "ReadyToPlay",
        }
    }

    /// Project the renderable view.
    pub fn view(&self) -> View {
        View::of(self)
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WaitingForUrl => write!(f, "WaitingForUrl"),
            Self::ReadyToLoadUrl { url } => write!(f, "ReadyToLoadUrl({})", url),
            Self::WaitingForPlayerToLoad { url } => write!(f, "WaitingForPlayerToLoad({})", url),
            Self::ReadyToPlay {
                is_playing,
                elapsed,
                info,
            } => {
                let mode = if *is_playing { "playing" } else { "paused" };
                match elapsed {
                    Some(t) => write!(
                        f,
                        "ReadyToPlay({}, {}s/{}s)",
                        mode,
                        t.num_seconds(),
                        info.duration.num_seconds()
                    ),
                    None => write!(f, "ReadyToPlay({}, ?/{}s)", mode, info.duration.num_seconds()),
                }
            }
        }
    }
}

/// Everything that can be folded into the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // User input
    PrepareToLoad(Option<Url>),
    Reset,
    TapPlay,
    TapPause,
    TapPlayPause,
    TapSeekBack,
    TapSeekForward,

    // Player notifications
    PlayerBecameReady,
    PlayerFailedToBecomeReady,
    PlayerReportedElapsed(Duration),
    PlayerReachedEnd,

    /// A previously issued command was acknowledged.
    Completed(Pending, Reply),
}

/// Result of folding one event: the next state and the effects to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: PlaybackState,
    pub effects: Vec<Effect>,
}

impl Transition {
    /// Move to `state` with nothing to run.
    pub fn to(state: PlaybackState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    /// Keep `state` and run `effects`; the move happens on completion.
    pub fn run(state: PlaybackState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }

    pub fn is_noop_for(&self, state: &PlaybackState) -> bool {
        self.effects.is_empty() && self.state == *state
    }
}

/// An event with no meaning in the current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid transition from {from} via {event:?}: {reason}")]
pub struct InvalidTransition {
    pub from: PlaybackState,
    pub event: Event,
    pub reason: &'static str,
}

impl PlaybackState {
    /// Fold an event, reporting why it was ignored if it has no meaning here.
    pub fn apply(&self, event: Event) -> Result<Transition, InvalidTransition> {
        use Event::*;
        use PlaybackState::*;

        let invalid = |reason: &'static str| InvalidTransition {
            from: self.clone(),
            event: event.clone(),
            reason,
        };
        let stay = |effects: Vec<Effect>| -> Result<Transition, InvalidTransition> {
            Ok(Transition::run(self.clone(), effects))
        };

        match (self, &event) {
            // PrepareToLoad: designate, replace or clear the track
            (WaitingForUrl, PrepareToLoad(Some(url))) => Ok(Transition::to(ReadyToLoadUrl {
                url: url.clone(),
            })),
            (WaitingForUrl, PrepareToLoad(None)) => Err(invalid("No track to clear")),
            (ReadyToLoadUrl { .. }, PrepareToLoad(Some(url))) => {
                Ok(Transition::to(ReadyToLoadUrl { url: url.clone() }))
            }
            (ReadyToLoadUrl { .. }, PrepareToLoad(None)) => Ok(Transition::to(WaitingForUrl)),
            (WaitingForPlayerToLoad { url }, PrepareToLoad(Some(next))) if url == next => {
                Err(invalid("Already loading this URL"))
            }
            // Cancel the in-flight load, then load the new URL straight away
            (WaitingForPlayerToLoad { .. }, PrepareToLoad(Some(next))) => stay(vec![
                Effect::unload(Some(next.clone())),
                Effect::load(next.clone()),
            ]),
            (WaitingForPlayerToLoad { .. }, PrepareToLoad(None)) => stay(vec![Effect::unload(None)]),
            (ReadyToPlay { .. }, PrepareToLoad(next)) => stay(vec![Effect::unload(next.clone())]),

            // Reset: always unload before landing in WaitingForUrl
            (WaitingForUrl, Reset) => Err(invalid("Already reset")),
            (_, Reset) => stay(vec![Effect::unload(None)]),

            // Play / pause taps
            (WaitingForUrl, TapPlay | TapPause | TapPlayPause) => Err(invalid("No track to play")),
            (ReadyToLoadUrl { url }, TapPlay | TapPlayPause) => stay(vec![Effect::load(url.clone())]),
            (ReadyToLoadUrl { .. }, TapPause) => Err(invalid("Nothing is playing")),
            (WaitingForPlayerToLoad { url }, TapPlay | TapPause | TapPlayPause) => {
                stay(vec![Effect::unload(Some(url.clone()))])
            }
            (ReadyToPlay { is_playing: false, .. }, TapPlay) => stay(vec![Effect::play()]),
            (ReadyToPlay { is_playing: true, .. }, TapPlay) => Err(invalid("Already playing")),
            (ReadyToPlay { is_playing: true, .. }, TapPause) => stay(vec![Effect::pause()]),
            (ReadyToPlay { is_playing: false, .. }, TapPause) => Err(invalid("Already paused")),
            (ReadyToPlay { is_playing, .. }, TapPlayPause) => {
                if *is_playing {
                    stay(vec![Effect::pause()])
                } else {
                    stay(vec![Effect::play()])
                }
            }

            // Seeks: clamp into [0, duration], never error on bounds
            (ReadyToPlay { elapsed: None, .. }, TapSeekBack | TapSeekForward) => {
                Err(invalid("Elapsed time not reported yet"))
            }
            (
                ReadyToPlay {
                    elapsed: Some(elapsed),
                    ..
                },
                TapSeekBack,
            ) => {
                let to = (*elapsed - seek_interval()).max(Duration::zero());
                stay(vec![Effect::seek(to)])
            }
            (
                ReadyToPlay {
                    is_playing,
                    elapsed: Some(elapsed),
                    info,
                },
                TapSeekForward,
            ) => {
                let to = (*elapsed + seek_interval()).min(info.duration);
                let mut effects = vec![Effect::seek(to)];
                if to == info.duration && *is_playing {
                    effects.push(Effect::pause());
                }
                stay(effects)
            }
            (_, TapSeekBack | TapSeekForward) => Err(invalid("No track ready to seek")),

            // Player notifications
            (WaitingForPlayerToLoad { .. }, PlayerBecameReady) => stay(vec![Effect::play()]),
            (_, PlayerBecameReady) => Err(invalid("Not waiting for the player")),

            (WaitingForPlayerToLoad { .. }, PlayerFailedToBecomeReady) => {
                stay(vec![Effect::load_failure_alert()])
            }
            (_, PlayerFailedToBecomeReady) => Err(invalid("Not waiting for the player")),

            (
                ReadyToPlay {
                    is_playing, info, ..
                },
                PlayerReportedElapsed(reported),
            ) => {
                let elapsed = info.clamp(*reported);
                if elapsed != *reported {
                    warn!(
                        reported_ms = reported.num_milliseconds(),
                        duration_ms = info.duration.num_milliseconds(),
                        "player reported position outside track, clamping"
                    );
                }
                Ok(Transition::to(ReadyToPlay {
                    is_playing: *is_playing,
                    elapsed: Some(elapsed),
                    info: info.clone(),
                }))
            }
            (_, PlayerReportedElapsed(_)) => Err(invalid("No track ready")),

            (ReadyToPlay { info, .. }, PlayerReachedEnd) => Ok(Transition::to(ReadyToPlay {
                is_playing: false,
                elapsed: Some(info.duration),
                info: info.clone(),
            })),
            (_, PlayerReachedEnd) => Err(invalid("No track ready")),

            // Completions
            (ReadyToLoadUrl { url }, Completed(Pending::Load(loaded), _)) if url == loaded => {
                Ok(Transition::to(WaitingForPlayerToLoad { url: url.clone() }))
            }
            (WaitingForUrl, Completed(Pending::Unload(_), _)) => Err(invalid("Nothing to unload")),
            (_, Completed(Pending::Unload(next), _)) => Ok(Transition::to(match next {
                Some(url) => ReadyToLoadUrl { url: url.clone() },
                None => WaitingForUrl,
            })),
            (WaitingForPlayerToLoad { .. }, Completed(Pending::Play, _)) => {
                stay(vec![Effect::get_info()])
            }
            (WaitingForPlayerToLoad { .. }, Completed(Pending::Info, Reply::Info(info))) => {
                Ok(Transition::to(ReadyToPlay {
                    is_playing: true,
                    elapsed: None,
                    info: info.clone(),
                }))
            }
            (WaitingForPlayerToLoad { url }, Completed(Pending::Alert, _)) => {
                Ok(Transition::to(ReadyToLoadUrl { url: url.clone() }))
            }
            (ReadyToPlay { elapsed, info, .. }, Completed(Pending::Play, _)) => {
                Ok(Transition::to(ReadyToPlay {
                    is_playing: true,
                    elapsed: *elapsed,
                    info: info.clone(),
                }))
            }
            (ReadyToPlay { elapsed, info, .. }, Completed(Pending::Pause, _)) => {
                Ok(Transition::to(ReadyToPlay {
                    is_playing: false,
                    elapsed: *elapsed,
                    info: info.clone(),
                }))
            }
            (
                ReadyToPlay {
                    is_playing, info, ..
                },
                Completed(Pending::Seek(to), _),
            ) => Ok(Transition::to(ReadyToPlay {
                is_playing: *is_playing,
                elapsed: Some(info.clamp(*to)),
                info: info.clone(),
            })),
            (_, Completed(..)) => Err(invalid("Unexpected completion")),
        }
    }

    /// Total transition: events with no meaning leave the state unchanged
    /// and run nothing.
    pub fn transition(&self, event: Event) -> Transition {
        match self.apply(event) {
            Ok(transition) => transition,
            Err(err) => {
                debug!(%err, "ignoring event");
                Transition::to(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::command::Command;
    use pretty_assertions::assert_eq;

    fn url(name: &str) -> Url {
        Url::parse(&format!("https://example.com/{}.mp3", name)).unwrap()
    }

    fn secs(s: i64) -> Duration {
        Duration::seconds(s)
    }

    fn ready(is_playing: bool, elapsed: Option<i64>, duration: i64) -> PlaybackState {
        PlaybackState::ReadyToPlay {
            is_playing,
            elapsed: elapsed.map(secs),
            info: TrackInfo::with_duration_secs(duration),
        }
    }

    fn commands(transition: &Transition) -> Vec<Command> {
        transition.effects.iter().map(|e| e.command.clone()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = PlaybackState::default();
        assert_eq!(state, PlaybackState::WaitingForUrl);
        assert!(!state.has_url());
        assert!(!state.is_player_active());
    }

    #[test]
    fn test_prepare_to_load_from_waiting() {
        let state = PlaybackState::WaitingForUrl;

        let t = state.transition(Event::PrepareToLoad(Some(url("foo"))));
        assert_eq!(t, Transition::to(PlaybackState::ReadyToLoadUrl { url: url("foo") }));

        let t = state.transition(Event::PrepareToLoad(None));
        assert!(t.is_noop_for(&state));
    }

    #[test]
    fn test_ready_to_load_replace_and_clear() {
        let state = PlaybackState::ReadyToLoadUrl { url: url("foo") };

        let t = state.transition(Event::PrepareToLoad(Some(url("bar"))));
        assert_eq!(t.state, PlaybackState::ReadyToLoadUrl { url: url("bar") });
        assert!(t.effects.is_empty());

        let t = state.transition(Event::PrepareToLoad(None));
        assert_eq!(t, Transition::to(PlaybackState::WaitingForUrl));
    }

    #[test]
    fn test_ready_to_load_same_url_is_idempotent() {
        let state = PlaybackState::ReadyToLoadUrl { url: url("foo") };

        let once = state.transition(Event::PrepareToLoad(Some(url("foo"))));
        let twice = once.state.transition(Event::PrepareToLoad(Some(url("foo"))));

        assert_eq!(twice.state, state);
        assert!(twice.effects.is_empty());
    }

    #[test]
    fn test_tap_play_loads_then_waits() {
        let state = PlaybackState::ReadyToLoadUrl { url: url("foo") };

        let t = state.transition(Event::TapPlay);
        assert_eq!(t.state, state);
        assert_eq!(commands(&t), vec![Command::Load(Some(url("foo")))]);

        let pending = t.effects[0].pending.clone();
        let t = t.state.transition(Event::Completed(pending, Reply::Ack));
        assert_eq!(
            t,
            Transition::to(PlaybackState::WaitingForPlayerToLoad { url: url("foo") })
        );
    }

    #[test]
    fn test_tap_play_pause_also_loads() {
        let state = PlaybackState::ReadyToLoadUrl { url: url("foo") };
        let t = state.transition(Event::TapPlayPause);
        assert_eq!(commands(&t), vec![Command::Load(Some(url("foo")))]);
    }

    #[test]
    fn test_stale_load_completion_ignored() {
        let state = PlaybackState::ReadyToLoadUrl { url: url("bar") };
        let t = state.transition(Event::Completed(Pending::Load(url("foo")), Reply::Ack));
        assert!(t.is_noop_for(&state));
    }

    #[test]
    fn test_player_became_ready() {
        let state = PlaybackState::WaitingForPlayerToLoad { url: url("foo") };

        let t = state.transition(Event::PlayerBecameReady);
        assert_eq!(t.state, state);
        assert_eq!(commands(&t), vec![Command::Play]);

        let t = state.transition(Event::Completed(Pending::Play, Reply::Ack));
        assert_eq!(t.state, state);
        assert_eq!(commands(&t), vec![Command::GetInfo]);

        let info = TrackInfo::with_duration_secs(60).with_title("foo");
        let t = state.transition(Event::Completed(Pending::Info, Reply::Info(info.clone())));
        assert_eq!(
            t,
            Transition::to(PlaybackState::ReadyToPlay {
                is_playing: true,
                elapsed: None,
                info,
            })
        );
    }

    #[test]
    fn test_info_completion_without_info_ignored() {
        let state = PlaybackState::WaitingForPlayerToLoad { url: url("foo") };
        let t = state.transition(Event::Completed(Pending::Info, Reply::Ack));
        assert!(t.is_noop_for(&state));
    }

    #[test]
    fn test_player_failed_to_become_ready() {
        let state = PlaybackState::WaitingForPlayerToLoad { url: url("foo") };

        let t = state.transition(Event::PlayerFailedToBecomeReady);
        assert_eq!(commands(&t), vec![Command::load_failure_alert()]);

        let t = state.transition(Event::Completed(Pending::Alert, Reply::Ack));
        assert_eq!(t.state, PlaybackState::ReadyToLoadUrl { url: url("foo") });
    }

    #[test]
    fn test_tap_while_loading_cancels() {
        let state = PlaybackState::WaitingForPlayerToLoad { url: url("foo") };

        for event in [Event::TapPlay, Event::TapPause, Event::TapPlayPause] {
            let t = state.transition(event);
            assert_eq!(commands(&t), vec![Command::Load(None)]);

            let pending = t.effects[0].pending.clone();
            let t = state.transition(Event::Completed(pending, Reply::Ack));
            assert_eq!(t.state, PlaybackState::ReadyToLoadUrl { url: url("foo") });
        }
    }

    #[test]
    fn test_reload_while_loading() {
        let state = PlaybackState::WaitingForPlayerToLoad { url: url("foo") };

        let t = state.transition(Event::PrepareToLoad(Some(url("bar"))));
        assert_eq!(
            commands(&t),
            vec![Command::Load(None), Command::Load(Some(url("bar")))]
        );

        // Fold both completions in order
        let mut current = t.state.clone();
        for effect in t.effects {
            current = current
                .transition(Event::Completed(effect.pending, Reply::Ack))
                .state;
        }
        assert_eq!(current, PlaybackState::WaitingForPlayerToLoad { url: url("bar") });
    }

    #[test]
    fn test_same_url_while_loading_ignored() {
        let state = PlaybackState::WaitingForPlayerToLoad { url: url("foo") };
        let result = state.apply(Event::PrepareToLoad(Some(url("foo"))));
        assert!(result.is_err());
    }

    #[test]
    fn test_reset_unloads() {
        for state in [
            PlaybackState::ReadyToLoadUrl { url: url("foo") },
            PlaybackState::WaitingForPlayerToLoad { url: url("foo") },
            ready(true, Some(10), 60),
        ] {
            let t = state.transition(Event::Reset);
            assert_eq!(commands(&t), vec![Command::Load(None)]);

            let pending = t.effects[0].pending.clone();
            let t = state.transition(Event::Completed(pending, Reply::Ack));
            assert_eq!(t.state, PlaybackState::WaitingForUrl);
        }
    }

    #[test]
    fn test_prepare_to_load_while_ready() {
        let state = ready(true, Some(10), 60);

        let t = state.transition(Event::PrepareToLoad(Some(url("bar"))));
        assert_eq!(commands(&t), vec![Command::Load(None)]);
        let pending = t.effects[0].pending.clone();
        let t = state.transition(Event::Completed(pending, Reply::Ack));
        assert_eq!(t.state, PlaybackState::ReadyToLoadUrl { url: url("bar") });
    }

    #[test]
    fn test_elapsed_report() {
        let state = ready(true, None, 60);
        let t = state.transition(Event::PlayerReportedElapsed(secs(12)));
        assert_eq!(t, Transition::to(ready(true, Some(12), 60)));

        // Out-of-range reports are clamped
        let t = state.transition(Event::PlayerReportedElapsed(secs(75)));
        assert_eq!(t.state, ready(true, Some(60), 60));
    }

    #[test]
    fn test_reached_end() {
        let state = ready(true, Some(50), 60);
        let t = state.transition(Event::PlayerReachedEnd);
        assert_eq!(t, Transition::to(ready(false, Some(60), 60)));

        let again = t.state.transition(Event::PlayerReachedEnd);
        assert_eq!(again, Transition::to(ready(false, Some(60), 60)));
    }

    #[test]
    fn test_play_pause_when_ready() {
        let paused = ready(false, Some(5), 60);
        let t = paused.transition(Event::TapPlay);
        assert_eq!(commands(&t), vec![Command::Play]);
        let t = paused.transition(Event::Completed(Pending::Play, Reply::Ack));
        assert!(t.state.is_playing());

        let playing = ready(true, Some(5), 60);
        let t = playing.transition(Event::TapPause);
        assert_eq!(commands(&t), vec![Command::Pause]);
        let t = playing.transition(Event::Completed(Pending::Pause, Reply::Ack));
        assert!(!t.state.is_playing());

        assert_eq!(commands(&paused.transition(Event::TapPlayPause)), vec![Command::Play]);
        assert_eq!(commands(&playing.transition(Event::TapPlayPause)), vec![Command::Pause]);

        assert!(playing.apply(Event::TapPlay).is_err());
        assert!(paused.apply(Event::TapPause).is_err());
    }

    #[test]
    fn test_seek_back() {
        let cases = [(16, 1), (17, 2), (15, 0), (14, 0), (13, 0)];
        for (from, to) in cases {
            let state = ready(true, Some(from), 60);
            let t = state.transition(Event::TapSeekBack);
            assert_eq!(commands(&t), vec![Command::SetElapsed(secs(to))]);

            let pending = t.effects[0].pending.clone();
            let t = state.transition(Event::Completed(pending, Reply::Ack));
            assert_eq!(t.state.elapsed(), Some(secs(to)));
        }
    }

    #[test]
    fn test_seek_forward() {
        let state = ready(true, Some(1), 600);
        let t = state.transition(Event::TapSeekForward);
        assert_eq!(commands(&t), vec![Command::SetElapsed(secs(16))]);
    }

    #[test]
    fn test_seek_forward_to_end_while_playing_pauses() {
        let state = ready(true, Some(58), 60);
        let t = state.transition(Event::TapSeekForward);
        assert_eq!(
            commands(&t),
            vec![Command::SetElapsed(secs(60)), Command::Pause]
        );

        let mut current = t.state.clone();
        for effect in t.effects {
            current = current
                .transition(Event::Completed(effect.pending, Reply::Ack))
                .state;
        }
        assert_eq!(current, ready(false, Some(60), 60));
    }

    #[test]
    fn test_seek_forward_to_end_while_paused_does_not_pause() {
        let state = ready(false, Some(59), 60);
        let t = state.transition(Event::TapSeekForward);
        assert_eq!(commands(&t), vec![Command::SetElapsed(secs(60))]);
    }

    #[test]
    fn test_seek_without_elapsed_ignored() {
        let state = ready(true, None, 60);
        assert!(state.transition(Event::TapSeekBack).is_noop_for(&state));
        assert!(state.transition(Event::TapSeekForward).is_noop_for(&state));
    }

    #[test]
    fn test_controls_ignored_without_url() {
        let state = PlaybackState::WaitingForUrl;
        for event in [
            Event::TapPlay,
            Event::TapPause,
            Event::TapPlayPause,
            Event::TapSeekBack,
            Event::TapSeekForward,
            Event::Reset,
        ] {
            assert!(state.transition(event).is_noop_for(&state));
        }
    }

    #[test]
    fn test_invalid_transition_error() {
        let state = PlaybackState::WaitingForUrl;
        let err = state.apply(Event::TapSeekBack).unwrap_err();
        assert_eq!(err.from, PlaybackState::WaitingForUrl);
        assert_eq!(err.event, Event::TapSeekBack);
        assert_eq!(
            err.to_string(),
            "Invalid transition from WaitingForUrl via TapSeekBack: No track ready to seek"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PlaybackState::ReadyToLoadUrl { url: url("foo") }.to_string(),
            "ReadyToLoadUrl(https://example.com/foo.mp3)"
        );
        assert_eq!(ready(true, Some(12), 60).to_string(), "ReadyToPlay(playing, 12s/60s)");
        assert_eq!(ready(false, None, 60).to_string(), "ReadyToPlay(paused, ?/60s)");
    }
}
