//! Input and file helpers shared by the commands.

use std::fs::File;
use std::io::{BufRead, BufWriter};
use std::path::Path;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, or `None` on EOF or a read error.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use petal_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("play 3\n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("play 3"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Creates the parent directory of `path` when it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Opens `path` for writing, truncating it and creating missing directories.
pub fn create_output(path: &Path) -> std::io::Result<BufWriter<File>> {
    ensure_parent_dir(path)?;
    Ok(BufWriter::new(File::create(path)?))
}
