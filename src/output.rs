use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use arboard::Clipboard;

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to open the system clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to write to the clipboard")?;
    Ok(())
}

/// Prints `prompt` and reads one line from stdin; true only for an explicit
/// `y`/`Y` answer.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read from stdin")?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
