//! Interactive Confirmer
//!
//! Asks on the terminal when there is one; otherwise reads a single line from
//! stdin so piped answers (`echo y | tunn8n start`) still work.

use std::io::{self, BufRead, Write};

use is_terminal::IsTerminal;

use crate::domain::ports::{is_affirmative, Confirmer};

/// Prompts with `(y/N)`; anything but `y`/`yes` is a no
#[derive(Debug, Default)]
pub struct InteractiveConfirmer;

impl InteractiveConfirmer {
    pub fn new() -> Self {
        Self
    }
}

impl Confirmer for InteractiveConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        let prompt = format!("{} (y/N)", prompt);

        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            let answer: Result<String, _> = dialoguer::Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text();
            return answer.map(|a| is_affirmative(&a)).unwrap_or(false);
        }

        let stdin = io::stdin();
        confirm_from(&mut stdin.lock(), &mut io::stderr(), &prompt)
    }
}

/// Write `prompt` to `out` and read one answer line from `input`.
///
/// End of input or a read error counts as "no".
pub fn confirm_from<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> bool {
    let _ = write!(out, "{} ", prompt);
    let _ = out.flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => {
            let _ = writeln!(out);
            false
        }
        Ok(_) => is_affirmative(&line),
    }
}
