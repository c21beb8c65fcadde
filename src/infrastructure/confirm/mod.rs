//! Infrastructure implementations for Confirmer

mod interactive;

pub use interactive::{confirm_from, InteractiveConfirmer};
