//! Saving throws, opposed throws and morale checks

mod engine;
mod outcome;

pub use engine::ResolutionEngine;
pub use outcome::SaveOutcome;
