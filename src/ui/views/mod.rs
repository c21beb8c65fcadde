pub mod diagnostics;
pub mod help;
pub mod version;
