//! Page chrome state: the sticky header, nav links and header dropdowns.

pub mod header;
pub mod modal;

pub use header::{HeaderState, NavLinks};
pub use modal::{ModalKind, ModalPhase, ModalSet, ModalTransition};
