//! Effect vocabulary.
//!
//! A transition never touches the player directly. It returns [`Effect`]s:
//! a [`Command`] for the collaborator plus a [`Pending`] tag naming what the
//! machine does once that command is acknowledged. The dispatcher performs
//! the command and folds `Event::Completed(pending, reply)` back in.

use std::fmt;

use chrono::Duration;
use url::Url;

use super::track::TrackInfo;

/// Alert text shown when the player cannot become ready.
pub const LOAD_FAILURE_ALERT_TEXT: &str = "Unable to load media";

/// Dismiss button label for the load failure alert.
pub const LOAD_FAILURE_ALERT_BUTTON: &str = "OK";

/// A request handed to the player (or alert) collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load a URL, or unload / cancel whatever is loaded when `None`.
    Load(Option<Url>),
    GetInfo,
    Play,
    Pause,
    SetElapsed(Duration),
    ShowAlert { text: String, button: String },
}

impl Command {
    pub fn load_failure_alert() -> Self {
        Self::ShowAlert {
            text: LOAD_FAILURE_ALERT_TEXT.to_string(),
            button: LOAD_FAILURE_ALERT_BUTTON.to_string(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(Some(url)) => write!(f, "Load({})", url),
            Self::Load(None) => write!(f, "Load(none)"),
            Self::GetInfo => write!(f, "GetInfo"),
            Self::Play => write!(f, "Play"),
            Self::Pause => write!(f, "Pause"),
            Self::SetElapsed(t) => write!(f, "SetElapsed({}ms)", t.num_milliseconds()),
            Self::ShowAlert { text, button } => write!(f, "ShowAlert({:?}, {:?})", text, button),
        }
    }
}

/// Continuation for an issued command, folded back on acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
    /// `Load(Some(url))` accepted; the player is now loading `url`.
    Load(Url),

    /// `Load(None)` accepted. `Some(url)` lands in `ReadyToLoadUrl(url)`,
    /// `None` lands in `WaitingForUrl`.
    Unload(Option<Url>),

    Play,
    Pause,

    /// `SetElapsed` accepted at this position.
    Seek(Duration),

    /// `GetInfo` answered; the reply carries the info.
    Info,

    /// The load failure alert was dismissed.
    Alert,
}

/// What the collaborator returned for a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Ack,
    Info(TrackInfo),
}

/// A command and the continuation to fold once it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub command: Command,
    pub pending: Pending,
}

impl Effect {
    pub fn load(url: Url) -> Self {
        Self {
            command: Command::Load(Some(url.clone())),
            pending: Pending::Load(url),
        }
    }

    /// Cancel or unload, then land in `ReadyToLoadUrl(next)` or `WaitingForUrl`.
    pub fn unload(next: Option<Url>) -> Self {
        Self {
            command: Command::Load(None),
            pending: Pending::Unload(next),
        }
    }

    pub fn play() -> Self {
        Self {
            command: Command::Play,
            pending: Pending::Play,
        }
    }

    pub fn pause() -> Self {
        Self {
            command: Command::Pause,
            pending: Pending::Pause,
        }
    }

    pub fn seek(to: Duration) -> Self {
        Self {
            command: Command::SetElapsed(to),
            pending: Pending::Seek(to),
        }
    }

    pub fn get_info() -> Self {
        Self {
            command: Command::GetInfo,
            pending: Pending::Info,
        }
    }

    pub fn load_failure_alert() -> Self {
        Self {
            command: Command::load_failure_alert(),
            pending: Pending::Alert,
        }
    }
}
