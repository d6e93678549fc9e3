//! Playing a game on top of the engine.
//!
//! - `Game`: owns state and RNG, runs the accept/no-op/reject pipeline
//! - `GameSnapshot`: binary save and restore
//! - `share_text` / `outcome_message`: end-of-game text

mod session;
mod share;
mod snapshot;

pub use session::{Game, MoveOutcome};
pub use share::{outcome_message, share_text};
pub use snapshot::GameSnapshot;
