use crate::io::{Format, error::Error, util};
use crate::model::conformer::{Conformer, ConformerTable};
use std::io::BufRead;

const CRG_COLUMN: usize = 4;

/// Reads an MCCE `head3.lst` conformer table.
///
/// The optional header row (starting with `iConf`) is skipped. Each data row is
/// `iConf CONFORMER FL occ crg ...`; only the serial, name and charge are kept.
/// Row order defines the 0-based conformer index used by microstates.
pub fn read<R: BufRead>(reader: R) -> Result<ConformerTable, Error> {
    let lines = util::data_lines(reader)?;

    let mut conformers = Vec::with_capacity(lines.len());
    for (ln, raw) in &lines {
        let parts: Vec<_> = raw.split_whitespace().collect();
        if parts[0].eq_ignore_ascii_case("iconf") {
            continue;
        }
        if parts.len() <= CRG_COLUMN {
            return Err(Error::parse(
                Format::Head3,
                *ln,
                format!(
                    "expected at least {} columns (iConf CONFORMER FL occ crg), found {}",
                    CRG_COLUMN + 1,
                    parts.len()
                ),
            ));
        }

        let iconf = parts[0]
            .parse::<usize>()
            .map_err(|_| Error::parse(Format::Head3, *ln, "invalid iConf serial"))?;
        let crg = parts[CRG_COLUMN]
            .parse::<f64>()
            .map_err(|_| Error::parse(Format::Head3, *ln, "invalid crg value"))?;
        if !crg.is_finite() {
            return Err(Error::parse(Format::Head3, *ln, "crg value is not finite"));
        }

        conformers.push(Conformer::new(iconf, parts[1], crg));
    }

    Ok(ConformerTable::from(conformers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::conformer::ChargeLookup;

    const HEAD3: &str = "\
iConf CONFORMER     FL  occ    crg   Em0  pKa0 ne nH    vdw0    vdw1    tors    epol   dsolv   extra    history
00001 NTR01W0001_001 f 0.00  1.000     0 10.40  0  1   0.000   0.000   0.000   0.000   0.000   0.000 01O000M000
00002 NTR+1W0001_002 f 0.00  0.000     0  0.00  0  0   0.000   0.000   0.000   0.000   0.000   0.000 01O000M000
00003 GLU-1A0035_001 f 0.00 -1.000     0  4.75  0 -1   0.000   0.000   0.000   0.000   0.000   0.000 -1O000M000
00004 HISA1A0036_005 f 0.00  0.498     0  6.50  0  0   0.000   0.000   0.000   0.000   0.000   0.000 01O000M000
";

    #[test]
    fn reads_conformer_rows() {
        let table = read(HEAD3.as_bytes()).unwrap();
        assert_eq!(table.len(), 4);

        let first = table.get(0).unwrap();
        assert_eq!(first.iconf, 1);
        assert_eq!(first.name, "NTR01W0001_001");
        assert_eq!(first.crg, 1.0);

        assert_eq!(table.charge(2), Some(-1.0));
        assert_eq!(table.charge(3), Some(0.498));
        assert_eq!(table.get(2).unwrap().name, "GLU-1A0035_001");
    }

    #[test]
    fn header_is_optional() {
        let body: String = HEAD3.lines().skip(1).map(|l| format!("{l}\n")).collect();
        let table = read(body.as_bytes()).unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn short_row_is_a_parse_error() {
        let err = read("00001 NTR01W0001_001 f 0.00\n".as_bytes()).unwrap_err();
        match err {
            Error::Parse { format, line, .. } => {
                assert_eq!(format, Format::Head3);
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_charge_reports_its_line() {
        let input = "iConf CONFORMER FL occ crg\n00001 ASP-1A0010_001 f 0.00 abc\n";
        let err = read(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn empty_input_is_an_empty_table() {
        let table = read("".as_bytes()).unwrap();
        assert!(table.is_empty());
    }
}
