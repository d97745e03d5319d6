use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = HintCollector::collect(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Vec<String> {
        let mut collector = Self {
            hints: Vec::new(),
            has_typed_hints: false,
        };

        collector.collect_io_hints(err);
        collector.collect_reduce_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        collector.hints
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use crgms::io::{Error as IoError, Format};

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };
        self.has_typed_hints = true;

        match io_err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::Parse { format, line, .. } => {
                self.add(format!("Check line {} of the {} input", line, format));
                match format {
                    Format::Head3 => {
                        self.add("head3.lst rows need: iConf CONFORMER FL occ crg ...");
                        self.add("The crg column (5th) must be a finite number");
                    }
                    Format::Microstates => {
                        self.add("Microstate rows need: count E iconf [iconf ...]");
                        self.add("count is a non-negative integer, E a finite number");
                    }
                    _ => {}
                }
            }

            IoError::UnsupportedWriteFormat(fmt) => {
                self.add(format!("The '{}' format cannot be used for reports", fmt));
                self.add("Supported report formats: text, tsv, json");
            }

            IoError::Serialize(_) => {
                self.add("Report serialization failed");
                self.add("Try --outfmt tsv or --outfmt text instead");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }
            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }
            ErrorKind::InvalidData => {
                self.add("File is not valid UTF-8 text");
                self.add("Both input tables must be plain text");
            }
            ErrorKind::BrokenPipe => {
                self.add("Output consumer terminated early");
                self.add("This may occur when piping to commands like `head`");
            }
            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions and disk space");
            }
        }
    }

    fn collect_reduce_hints(&mut self, err: &Error) {
        use crgms::ReduceError;

        let Some(reduce_err) = err.downcast_ref::<ReduceError>() else {
            return;
        };
        self.has_typed_hints = true;

        match reduce_err {
            ReduceError::UnknownConformer { conformer, .. } => {
                self.add(format!("Conformer {} is missing from the conformer table", conformer));
                self.add("Make sure head3.lst comes from the same MCCE run as the microstates");
            }
            ReduceError::InvalidCharge { .. } => {
                self.add("Conformer charges must be finite and fit a 32-bit integer");
                self.add("Inspect the crg column of head3.lst");
            }
            ReduceError::ZeroCount { .. } => {
                self.add("Every observed charge pattern needs a positive total count");
                self.add("Drop rows with count 0 from the microstate table");
            }
            ReduceError::CountOverflow { .. } => {
                self.add("Occurrence counts of one charge state exceed 2^64 - 1");
                self.add("Check the count column of the microstate table for corrupt values");
            }
            ReduceError::NonFiniteEnergy { .. } => {
                self.add("Energies summed to infinity or NaN for one charge state");
                self.add("Check the E column of the microstate table for extreme values");
            }
            ReduceError::MalformedIdentity(_) => {
                self.add("An internal charge state key could not be decoded");
                self.add("This indicates a bug; please report it with the input files");
            }
            ReduceError::InvalidSortKey(_) => {
                self.add("Valid sort keys: count, E, total_E");
            }
            ReduceError::InvalidTopDirection { key, expected, .. } => {
                self.add(format!("Top by {} is only meaningful {}", key, expected));
                self.add(format!("Use --{} or drop the direction flag", expected));
            }
            ReduceError::InvalidTopCount => {
                self.add("Pass -n/--top with a value of at least 1");
            }
            ReduceError::ConfigParse(_) => {
                self.add("The configuration file must hold a [rank] table");
                self.add("Allowed keys: key, descending, n");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") {
            self.add("Provide microstates via -i/--input or pipe them to stdin");
            return;
        }

        if msg.contains("cannot infer format") {
            self.add("Use a .txt, .tsv or .json extension, or pass --outfmt");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn typed_reduce_errors_get_specific_hints() {
        let err = Error::new(crgms::ReduceError::InvalidTopCount).context("Ranking failed");
        let hints = HintCollector::collect(&err);
        assert_eq!(hints, vec!["Pass -n/--top with a value of at least 1"]);
    }

    #[test]
    fn parse_errors_point_at_the_line() {
        let parse = crgms::io::Error::parse(crgms::io::Format::Microstates, 7, "bad count");
        let err = Error::new(parse);
        let hints = HintCollector::collect(&err);
        assert!(hints[0].contains("line 7"));
        assert!(hints.iter().any(|h| h.contains("count E iconf")));
    }

    #[test]
    fn untyped_errors_fall_back_to_message_matching() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("x"));
        let err = result
            .context("No microstate input specified and stdin is a terminal")
            .unwrap_err();
        let hints = HintCollector::collect(&err);
        assert_eq!(hints.len(), 1);
        assert!(hints[0].contains("-i/--input"));
    }
}
