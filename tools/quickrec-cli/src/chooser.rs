//! Numbered-menu chooser over stdin.

use std::io::{BufRead, Write};

use quickrec_session_core::Chooser;

/// Terminal implementation of the chooser collaborator.
///
/// Prints a numbered menu and reads one line. An empty line or `q`
/// declines; anything unparseable re-prompts. Singleton auto-selection is
/// handled upstream, so every call here genuinely needs an answer.
pub struct TerminalChooser;

impl TerminalChooser {
    pub fn new() -> Self {
        Self
    }
}

impl Chooser for TerminalChooser {
    fn choose(&mut self, prompt: &str, options: &[String]) -> Option<usize> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        println!();
        println!("{prompt}:");
        for (i, option) in options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }

        loop {
            print!("Choice [1-{}, empty/q to cancel]: ", options.len());
            stdout.flush().ok();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).is_err() {
                return None;
            }

            let answer = line.trim();
            if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
                return None;
            }

            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Some(n - 1),
                _ => println!("Not a valid choice."),
            }
        }
    }
}
