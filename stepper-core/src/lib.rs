#![cfg_attr(not(test), no_std)]

//! Step-sequencing engine for 4-phase unipolar steppers (28BYJ-48 on a
//! ULN2003 board).
//!
//! The engine only needs `embedded-hal` pins and an async delay, so the same
//! code runs on the RP2040 firmware and against the recording doubles in the
//! test suite.

pub mod config;
pub mod drive_loop;
pub mod error;
pub mod input;
pub mod motion;
pub mod phase;
pub mod sequencer;

#[cfg(test)]
mod mock;

pub use config::{DriveConfig, InputMode};
pub use drive_loop::DriveLoop;
pub use error::DriveError;
pub use input::InputPolicy;
pub use motion::Uln2003;
pub use phase::{CoilRow, PHASE_COUNT, PHASE_TABLE, StepIndex};
pub use sequencer::Direction;
