pub mod config;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod io;
pub mod media;
pub mod paths;
pub mod round;
pub mod snapshot;
pub mod store;
pub mod types;

pub use controller::{PendingDecision, RoundController, Transition};
pub use error::{Result, ScorecardError};
