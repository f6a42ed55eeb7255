//! CLI command implementations.

mod analyze;
mod inspect;
mod predict;

pub use analyze::{AnalyzeCommand, Report};
pub use inspect::InspectCommand;
pub use predict::{CurrencyChoice, PredictCommand};
