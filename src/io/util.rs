use std::io::BufRead;

use super::error::Error;

/// Reads all lines, pairing each with its 1-based line number and skipping
/// blank lines and `#` comments.
pub(crate) fn data_lines<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>, Error> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push((i + 1, line));
    }
    Ok(lines)
}
