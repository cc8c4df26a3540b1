//! Header dropdowns (notifications, profile) and their fade transitions.
//!
//! Each dropdown runs `Closed -> Opening -> Open -> Closing -> Closed`.
//! Entering `Opening` or `Closing` hands out a [`ModalTransition`]; the host
//! waits [`ModalPhase::settle_delay`] and passes it back to
//! [`ModalSet::finish_transition`]. A transition superseded in the meantime
//! is ignored.

use std::time::Duration;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Notification,
    Profile,
}

impl ModalKind {
    pub const ALL: [ModalKind; 2] = [ModalKind::Notification, ModalKind::Profile];

    fn index(self) -> usize {
        match self {
            ModalKind::Notification => 0,
            ModalKind::Profile => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    /// Mounted, fading in.
    Opening,
    Open,
    /// Fading out, still mounted.
    Closing,
}

impl ModalPhase {
    /// Time before the phase completes, if it is transitional.
    pub fn settle_delay(self) -> Option<Duration> {
        match self {
            ModalPhase::Opening => Some(Duration::from_millis(10)),
            ModalPhase::Closing => Some(Duration::from_millis(200)),
            ModalPhase::Closed | ModalPhase::Open => None,
        }
    }

    /// Whether the dropdown is mounted on the page.
    pub fn is_shown(self) -> bool {
        self != ModalPhase::Closed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTransition {
    pub kind: ModalKind,
    pub phase: ModalPhase,
    seq: u64,
}

impl ModalTransition {
    pub fn delay(&self) -> Duration {
        self.phase.settle_delay().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    phase: ModalPhase,
    seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ModalSet {
    slots: [Slot; 2],
}

impl ModalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self, kind: ModalKind) -> ModalPhase {
        self.slots[kind.index()].phase
    }

    pub fn is_shown(&self, kind: ModalKind) -> bool {
        self.phase(kind).is_shown()
    }

    /// Header button click: closes a shown dropdown, opens a hidden one.
    pub fn toggle(&mut self, kind: ModalKind) -> ModalTransition {
        if self.is_shown(kind) {
            self.enter(kind, ModalPhase::Closing)
        } else {
            self.enter(kind, ModalPhase::Opening)
        }
    }

    /// Escape: starts closing every shown dropdown.
    pub fn close_all(&mut self) -> Vec<ModalTransition> {
        self.close_where(|_| true)
    }

    /// Click anywhere on the page. `hit` is the dropdown containing the
    /// click target, if any; every other shown dropdown starts closing.
    pub fn outside_click(
        &mut self,
        hit: Option<ModalKind>,
    ) -> Vec<ModalTransition> {
        self.close_where(|kind| Some(kind) != hit)
    }

    /// Completes a transition once its delay elapsed. Returns false for
    /// superseded transitions.
    pub fn finish_transition(&mut self, transition: ModalTransition) -> bool {
        let slot = &mut self.slots[transition.kind.index()];
        if slot.seq != transition.seq || slot.phase != transition.phase {
            trace!(kind = ?transition.kind, "stale modal transition");
            return false;
        }
        slot.phase = match transition.phase {
            ModalPhase::Opening => ModalPhase::Open,
            ModalPhase::Closing => ModalPhase::Closed,
            settled => settled,
        };
        true
    }

    fn close_where(
        &mut self,
        mut pred: impl FnMut(ModalKind) -> bool,
    ) -> Vec<ModalTransition> {
        let mut closing = Vec::new();
        for kind in ModalKind::ALL {
            if self.is_shown(kind) && pred(kind) {
                closing.push(self.enter(kind, ModalPhase::Closing));
            }
        }
        closing
    }

    fn enter(&mut self, kind: ModalKind, phase: ModalPhase) -> ModalTransition {
        let slot = &mut self.slots[kind.index()];
        slot.phase = phase;
        slot.seq += 1;
        trace!(?kind, ?phase, "modal transition");
        ModalTransition {
            kind,
            phase,
            seq: slot.seq,
        }
    }
}
