use async_trait::async_trait;
use resume_rag_client::Prompter;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Line reader over stdin shared by the shell and the confirmation prompt
pub struct Console {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl Console {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// Print `prompt` and read one line; `None` at end of input
    pub async fn read_line(&self, prompt: &str) -> std::io::Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        self.lines.lock().await.next_line().await
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// Prompter that asks on the terminal and prints notices to stdout
pub struct TerminalPrompter {
    console: Arc<Console>,
    assume_yes: bool,
}

impl TerminalPrompter {
    pub fn new(console: Arc<Console>, assume_yes: bool) -> Self {
        Self { console, assume_yes }
    }
}

/// `y`/`yes` in any case confirms; anything else declines
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        match self.console.read_line(&format!("{} [y/N] ", message)).await {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }

    async fn notify(&self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_console_default_builds_reader() {
        let console = Console::default();
        assert!(console.lines.try_lock().is_ok());
    }

    #[test]
    fn test_affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative(" YES \n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yep"));
    }
}
