//! Completion modal lifecycle.
//!
//! `Closed -> Opening -> Shown -> Closing -> Closed`. The opening and closing
//! phases each last a fixed delay so CSS transitions can run; duplicate open
//! or close requests are ignored.

use crate::constants::{MODAL_REMOVE_DELAY, MODAL_SHOW_DELAY};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Shown,
    Closing,
}

/// Work the frontend must do when a timed phase ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTransition {
    Show,
    Remove,
}

#[derive(Clone, Debug, Default)]
pub struct Modal {
    phase: ModalPhase,
    due: Option<Duration>,
}

impl Modal {
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Shown)
    }

    pub fn open(&mut self, now: Duration) -> bool {
        if self.phase != ModalPhase::Closed {
            return false;
        }
        self.phase = ModalPhase::Opening;
        self.due = Some(now + MODAL_SHOW_DELAY);
        true
    }

    pub fn request_close(&mut self, now: Duration) -> bool {
        if !self.is_open() {
            return false;
        }
        self.phase = ModalPhase::Closing;
        self.due = Some(now + MODAL_REMOVE_DELAY);
        true
    }

    pub fn poll(&mut self, now: Duration) -> Option<ModalTransition> {
        match self.due {
            Some(d) if now >= d => {}
            _ => return None,
        }
        self.due = None;
        match self.phase {
            ModalPhase::Opening => {
                self.phase = ModalPhase::Shown;
                Some(ModalTransition::Show)
            }
            ModalPhase::Closing => {
                self.phase = ModalPhase::Closed;
                Some(ModalTransition::Remove)
            }
            ModalPhase::Closed | ModalPhase::Shown => None,
        }
    }
}
