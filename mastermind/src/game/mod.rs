//! Guessing engine - scoring and the turn state machine.
//!
//! This module provides the core game implementation:
//! - Feedback scoring with multiset duplicate handling
//! - The turn engine driving attempts, hints, history, and win/loss
//! - Game entities and fixed parameters

pub mod constants;
pub mod entities;
pub mod scorer;
pub mod state_machine;
