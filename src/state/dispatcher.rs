//! Dispatcher: the single owner of the playback state.
//!
//! Folds one event at a time, runs every resulting command against the
//! collaborators, and folds each acknowledgement back in before returning.

use std::collections::VecDeque;

use chrono::Duration;
use tracing::{info, trace};
use url::Url;

use super::command::{Command, Effect, Reply};
use super::inbox::Inbox;
use super::playback::{Event, PlaybackState, Transition};
use super::track::TrackInfo;
use super::view::View;

/// Media engine capability.
///
/// Every call is request / acknowledge: returning means the player has
/// accepted the command. Load failures arrive later as
/// [`Event::PlayerFailedToBecomeReady`], never as a failed `load`.
pub trait Player {
    /// Load `url`, or cancel / unload when `None`.
    fn load(&mut self, url: Option<&Url>);

    fn get_info(&mut self) -> TrackInfo;

    fn play(&mut self);

    fn pause(&mut self);

    fn set_elapsed(&mut self, elapsed: Duration);
}

/// Alert capability; returns once the alert is dismissed.
pub trait Alerts {
    fn show_alert(&mut self, text: &str, button: &str);
}

/// Passive consumer of views.
pub trait Render {
    fn render(&mut self, view: &View);
}

impl<F> Render for F
where
    F: FnMut(&View),
{
    fn render(&mut self, view: &View) {
        self(view)
    }
}

/// Playback bar controller.
///
/// Holds exactly one [`PlaybackState`] and nothing else that outlives an
/// event. Collaborators are injected at construction.
#[derive(Debug)]
pub struct AudioBar<P, A, R> {
    state: PlaybackState,
    player: P,
    alerts: A,
    renderer: R,
}

impl<P, A, R> AudioBar<P, A, R>
where
    P: Player,
    A: Alerts,
    R: Render,
{
    /// Create a controller at `WaitingForUrl` and render its first view.
    pub fn new(player: P, alerts: A, mut renderer: R) -> Self {
        let state = PlaybackState::WaitingForUrl;
        renderer.render(&state.view());
        Self {
            state,
            player,
            alerts,
            renderer,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Project the current view.
    pub fn view(&self) -> View {
        self.state.view()
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn alerts(&self) -> &A {
        &self.alerts
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Fold an event to completion.
    ///
    /// Commands run in emission order. Commands emitted while folding a
    /// completion run before the remaining commands of the same batch.
    pub fn dispatch(&mut self, event: Event) {
        let mut queue: VecDeque<Effect> = self.fold(event).into();

        while let Some(Effect { command, pending }) = queue.pop_front() {
            let reply = self.perform(&command);
            let follow_up = self.fold(Event::Completed(pending, reply));
            for effect in follow_up.into_iter().rev() {
                queue.push_front(effect);
            }
        }
    }

    pub fn prepare_to_load(&mut self, url: Option<Url>) {
        self.dispatch(Event::PrepareToLoad(url));
    }

    pub fn reset(&mut self) {
        self.dispatch(Event::Reset);
    }

    /// Fold every event already queued in `inbox`. Returns how many ran.
    pub fn drain(&mut self, inbox: &Inbox) -> usize {
        let mut count = 0;
        while let Some(event) = inbox.try_next() {
            self.dispatch(event);
            count += 1;
        }
        count
    }

    /// Fold events from `inbox` until every sender has been dropped.
    pub fn run(&mut self, inbox: &Inbox) {
        while let Some(event) = inbox.next() {
            self.dispatch(event);
        }
    }

    /// Give back the collaborators and the final state.
    pub fn into_parts(self) -> (PlaybackState, P, A, R) {
        (self.state, self.player, self.alerts, self.renderer)
    }

    fn fold(&mut self, event: Event) -> Vec<Effect> {
        let Transition { state, effects } = self.state.transition(event);

        if state != self.state {
            if state.name() != self.state.name() {
                info!(from = %self.state, to = %state, "playback state changed");
            }
            self.state = state;
            self.renderer.render(&self.state.view());
        }

        effects
    }

    fn perform(&mut self, command: &Command) -> Reply {
        trace!(%command, "running command");

        match command {
            Command::Load(url) => self.player.load(url.as_ref()),
            Command::GetInfo => return Reply::Info(self.player.get_info()),
            Command::Play => self.player.play(),
            Command::Pause => self.player.pause(),
            Command::SetElapsed(elapsed) => self.player.set_elapsed(*elapsed),
            Command::ShowAlert { text, button } => self.alerts.show_alert(text, button),
        }

        Reply::Ack
    }
}
