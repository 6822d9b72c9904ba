//! Fake collaborators shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use audiobar_state::{Alerts, AudioBar, Command, Player, Render, TrackInfo, View};
use chrono::Duration;
use url::Url;

/// Every command seen by the player or the alerts, in order.
pub type CallLog = Rc<RefCell<Vec<Command>>>;

pub struct FakePlayer {
    log: CallLog,
    info: TrackInfo,
}

impl Player for FakePlayer {
    fn load(&mut self, url: Option<&Url>) {
        self.log.borrow_mut().push(Command::Load(url.cloned()));
    }

    fn get_info(&mut self) -> TrackInfo {
        self.log.borrow_mut().push(Command::GetInfo);
        self.info.clone()
    }

    fn play(&mut self) {
        self.log.borrow_mut().push(Command::Play);
    }

    fn pause(&mut self) {
        self.log.borrow_mut().push(Command::Pause);
    }

    fn set_elapsed(&mut self, elapsed: Duration) {
        self.log.borrow_mut().push(Command::SetElapsed(elapsed));
    }
}

pub struct FakeAlerts {
    log: CallLog,
}

impl Alerts for FakeAlerts {
    fn show_alert(&mut self, text: &str, button: &str) {
        self.log.borrow_mut().push(Command::ShowAlert {
            text: text.to_string(),
            button: button.to_string(),
        });
    }
}

#[derive(Default)]
pub struct Views(pub Vec<View>);

impl Render for Views {
    fn render(&mut self, view: &View) {
        self.0.push(view.clone());
    }
}

pub type TestBar = AudioBar<FakePlayer, FakeAlerts, Views>;

/// Build a bar whose player answers `GetInfo` with `info`.
pub fn make_bar(info: TrackInfo) -> (TestBar, CallLog) {
    let log = CallLog::default();
    let bar = AudioBar::new(
        FakePlayer {
            log: log.clone(),
            info,
        },
        FakeAlerts { log: log.clone() },
        Views::default(),
    );
    (bar, log)
}

pub fn url(name: &str) -> Url {
    Url::parse(&format!("https://example.com/{}.mp3", name)).unwrap()
}

/// Drain the log, returning what was recorded since the last call.
pub fn take(log: &CallLog) -> Vec<Command> {
    std::mem::take(&mut *log.borrow_mut())
}
