//! Marshals events raised off the dispatch thread back onto it.
//!
//! Player callbacks (position ticks, ready / fail, end of track) often fire
//! on a decoder or UI thread. They push into an [`EventSender`]; the thread
//! that owns the [`AudioBar`](super::AudioBar) drains the [`Inbox`] so every
//! event is still folded one at a time.

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use thiserror::Error;

use super::playback::Event;

/// Receiving side, owned by the dispatch thread.
#[derive(Debug)]
pub struct Inbox {
    rx: Receiver<Event>,
}

/// Cloneable sending side handed to collaborators.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: Sender<Event>,
}

/// The inbox was dropped before the event could be queued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Audio bar inbox closed, dropped {0:?}")]
pub struct InboxClosed(pub Event);

impl Inbox {
    /// Create a connected inbox / sender pair.
    pub fn channel() -> (Inbox, EventSender) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Inbox { rx }, EventSender { tx })
    }

    /// Next queued event without blocking.
    pub fn try_next(&self) -> Option<Event> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Block for the next event; `None` once every sender is gone.
    pub fn next(&self) -> Option<Event> {
        self.rx.recv().ok()
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl EventSender {
    /// Queue an event for the dispatch thread.
    pub fn send(&self, event: Event) -> Result<(), InboxClosed> {
        self.tx.send(event).map_err(|err| InboxClosed(err.into_inner()))
    }
}
