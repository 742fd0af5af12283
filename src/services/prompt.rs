//! Interactive operator prompt.

use crate::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Asks the operator a question and returns one line of input.
#[async_trait]
pub trait Prompt: Send + Sync {
    async fn ask(&self, prompt: &str) -> Result<String>;
}

/// Prompt reading answers line by line from one buffered reader.
///
/// The reader is kept for the whole run so lines buffered ahead (piped
/// answers) are not lost between questions.
pub struct LinePrompt<R> {
    lines: Mutex<Lines<BufReader<R>>>,
}

/// Prompt reading from the terminal.
pub type TerminalPrompt = LinePrompt<Stdin>;

impl<R: AsyncRead + Unpin> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: Mutex::new(BufReader::new(reader).lines()),
        }
    }
}

impl LinePrompt<Stdin> {
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

#[async_trait]
impl<R: AsyncRead + Unpin + Send> Prompt for LinePrompt<R> {
    async fn ask(&self, prompt: &str) -> Result<String> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;

        let line = self.lines.lock().await.next_line().await?;
        match line {
            Some(line) => Ok(line.trim_end_matches('\r').to_string()),
            None => Err(crate::Error::Prompt("stdin closed".to_string())),
        }
    }
}
