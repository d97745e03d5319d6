mod infer;
mod spec;

pub use infer::output as infer_output_format;
pub use spec::OutputSpec;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};

pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

pub fn open_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Reads from `path`, or from stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(p) => Box::new(open_file(p)?),
        None => Box::new(io::stdin().lock()),
    })
}

/// Buffered writer to `path`, or to stdout when no path is given.
pub fn create_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => {
            let file = File::create(p)
                .with_context(|| format!("Cannot create report file {}", p.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_names_the_path() {
        let err = open_input(Some(Path::new("/nonexistent/ms.txt"))).err().unwrap();
        assert!(err.to_string().contains("/nonexistent/ms.txt"));
    }

    #[test]
    fn report_file_round_trips_through_disk() {
        let path = std::env::temp_dir().join(format!("crgms-io-{}.txt", std::process::id()));

        let mut out = create_output(Some(&path)).unwrap();
        writeln!(out, "1 -12.5 0 3").unwrap();
        drop(out);

        let mut lines = open_input(Some(&path)).unwrap().lines();
        assert_eq!(lines.next().unwrap().unwrap(), "1 -12.5 0 3");
        std::fs::remove_file(&path).unwrap();
    }
}
