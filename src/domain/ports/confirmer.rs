//! Confirmation Port
//!
//! Lets flows ask a yes/no question without touching stdin directly.

/// Answers a yes/no question. Implementations must default to "no".
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirmer that always gives the same answer (non-interactive use and tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirmer for FixedAnswer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// Case-insensitive `y` / `yes`; everything else, including empty input, is "no"
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_answers() {
        for answer in ["y", "Y", "yes", "YES", "Yes", " y\n"] {
            assert!(is_affirmative(answer), "{answer:?} should be yes");
        }
    }

    #[test]
    fn everything_else_is_no() {
        for answer in ["", "\n", "n", "no", "yep", "sure", "ye s"] {
            assert!(!is_affirmative(answer), "{answer:?} should be no");
        }
    }

    #[test]
    fn fixed_answer_ignores_prompt() {
        assert!(FixedAnswer(true).confirm("Continue anyway?"));
        assert!(!FixedAnswer(false).confirm("Continue anyway?"));
    }
}
