/*!
 * Console implementation of the `Chooser` capability.
 *
 * Ambiguous candidate sets are printed as a numbered list with an explicit
 * "none of the above" entry; the user answers by number. Input is read on a
 * blocking task so the async runtime is never stalled, and exactly one
 * question is outstanding at a time.
 */

use async_trait::async_trait;
use log::warn;
use std::io::{BufRead, Write};

use crate::matching::Chooser;

/// Interactive stdin/stdout chooser
#[derive(Debug, Default)]
pub struct ConsoleChooser;

impl ConsoleChooser {
    pub fn new() -> Self {
        Self
    }

    fn ask(prompt: String, options: Vec<String>) -> Option<usize> {
        let mut stdout = std::io::stdout();
        let stdin = std::io::stdin();

        println!();
        println!("Several candidates match {}:", prompt);
        for (index, option) in options.iter().enumerate() {
            println!("  {}) {}", index + 1, option);
        }
        println!("  0) none of the above");

        loop {
            print!("Select [0-{}]: ", options.len());
            let _ = stdout.flush();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
                // Treat a closed stdin as "none of the above"
                warn!("No selection could be read, leaving episode unmatched");
                return None;
            }

            match line.trim().parse::<usize>() {
                Ok(0) => return None,
                Ok(choice) if choice <= options.len() => return Some(choice - 1),
                _ => println!("Please enter a number between 0 and {}.", options.len()),
            }
        }
    }
}

#[async_trait]
impl Chooser for ConsoleChooser {
    async fn choose(&self, prompt: &str, options: &[String]) -> Option<usize> {
        let prompt = prompt.to_string();
        let options = options.to_vec();

        tokio::task::spawn_blocking(move || Self::ask(prompt, options))
            .await
            .unwrap_or_else(|error| {
                warn!("Selection prompt failed: {}", error);
                None
            })
    }
}
