//! Start use case

mod options;
mod use_case;

pub use options::StartOptions;
pub use use_case::{StartOutcome, StartUseCase};
