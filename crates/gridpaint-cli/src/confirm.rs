//! Yes/no confirmation before destructive actions.

use std::io::{self, BufRead, Write};

/// Prints `"<prompt> (y/n): "` and reads one answer line.
///
/// Only `y` or `yes` (any case) confirms. End of input declines.
pub fn confirm<R, W>(prompt: &str, reader: &mut R, writer: &mut W) -> io::Result<bool>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(writer, "{} (y/n): ", prompt)?;
    writer.flush()?;

    let mut answer = String::new();
    if reader.read_line(&mut answer)? == 0 {
        writeln!(writer)?;
        return Ok(false);
    }
    Ok(is_affirmative(&answer))
}

/// True for `y` / `yes`, ignoring case and surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
