use crate::io::{Format, error::Error, util};
use crate::model::microstate::Microstate;
use std::io::BufRead;

/// Reads a microstate table: one sample per row, `count energy iconf iconf ...`.
///
/// Conformer indices are 0-based positions in the conformer table. Blank lines
/// and `#` comments are ignored.
pub fn read<R: BufRead>(reader: R) -> Result<Vec<Microstate>, Error> {
    let lines = util::data_lines(reader)?;
    lines
        .iter()
        .map(|(ln, raw)| parse_row(raw, *ln))
        .collect()
}

fn parse_row(raw: &str, ln: usize) -> Result<Microstate, Error> {
    let parts: Vec<_> = raw.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(Error::parse(
            Format::Microstates,
            ln,
            "row needs a count, an energy and at least one conformer",
        ));
    }

    let count = parts[0]
        .parse::<u64>()
        .map_err(|_| Error::parse(Format::Microstates, ln, "invalid count"))?;
    let energy = parts[1]
        .parse::<f64>()
        .map_err(|_| Error::parse(Format::Microstates, ln, "invalid energy"))?;
    if !energy.is_finite() {
        return Err(Error::parse(Format::Microstates, ln, "energy is not finite"));
    }

    let state = parts[2..]
        .iter()
        .map(|p| {
            p.parse::<usize>().map_err(|_| {
                Error::parse(
                    Format::Microstates,
                    ln,
                    format!("invalid conformer index '{p}'"),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Microstate::new(state, energy, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_in_order() {
        let input = "\
# count E state
5 10.0 0 1 2
3 20.0 0 1 2

2 -5.5 1 1 2
";
        let samples = read(input.as_bytes()).unwrap();
        assert_eq!(
            samples,
            vec![
                Microstate::new(vec![0, 1, 2], 10.0, 5),
                Microstate::new(vec![0, 1, 2], 20.0, 3),
                Microstate::new(vec![1, 1, 2], -5.5, 2),
            ]
        );
    }

    #[test]
    fn missing_state_is_rejected() {
        let err = read("5 10.0\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                format: Format::Microstates,
                line: 1,
                ..
            }
        ));
    }

    #[test]
    fn negative_count_is_rejected() {
        let err = read("1 0.0 0\n-1 0.0 0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn bad_conformer_index_names_the_token() {
        let err = read("1 0.0 0 x7\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("'x7'"));
    }

    #[test]
    fn nan_energy_is_rejected() {
        let err = read("1 NaN 0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
