//! Semantic message level for console output

/// What a line of output means, independent of how it is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Warning,
    Info,
    Dim,
    Heading,
}
