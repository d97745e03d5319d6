//! File surfaces for charge microstate analysis.
//!
//! Inputs are an MCCE `head3.lst` conformer table and a whitespace-separated
//! microstate table; outputs are ranked charge state reports in text, TSV or JSON.

use std::fmt;
use std::io::{BufRead, Write};

pub mod error;
mod util;

pub mod head3;
pub mod mstab;
pub mod report;

pub use error::Error;
pub use report::ReportRow;

use crate::model::charge_state::ChargeState;
use crate::model::conformer::ConformerTable;
use crate::model::microstate::Microstate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// MCCE `head3.lst` conformer table.
    Head3,
    /// Microstate table: `count energy iconf...` per row.
    Microstates,
    Text,
    Tsv,
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Head3 => write!(f, "head3.lst"),
            Format::Microstates => write!(f, "microstate table"),
            Format::Text => write!(f, "text"),
            Format::Tsv => write!(f, "TSV"),
            Format::Json => write!(f, "JSON"),
        }
    }
}

pub fn read_conformers<R: BufRead>(reader: R) -> Result<ConformerTable, Error> {
    head3::read(reader)
}

pub fn read_microstates<R: BufRead>(reader: R) -> Result<Vec<Microstate>, Error> {
    mstab::read(reader)
}

pub fn write_report<W: Write>(
    writer: W,
    states: &[ChargeState],
    format: Format,
) -> Result<(), Error> {
    report::write(writer, states, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::{SortKey, reduce, top_n};

    const HEAD3: &str = "\
iConf CONFORMER     FL  occ    crg
00001 NTR01W0001_001 f 0.00  1.000
00002 NTR+1W0001_002 f 0.00  0.000
00003 GLU-1A0035_001 f 0.00 -1.000
";

    const MICROSTATES: &str = "\
5 10.0 0 1 2
3 20.0 0 1 2
2 5.0 1 1 2
";

    #[test]
    fn files_flow_through_reduction_into_a_report() {
        let table = read_conformers(HEAD3.as_bytes()).unwrap();
        let samples = read_microstates(MICROSTATES.as_bytes()).unwrap();
        let states = reduce(&samples, &table).unwrap();
        let top = top_n(&states, 1, SortKey::Count, true).unwrap();

        let mut buf = Vec::new();
        write_report(&mut buf, &top, Format::Tsv).unwrap();
        let tsv = String::from_utf8(buf).unwrap();
        assert_eq!(tsv.lines().nth(1), Some("1\t8\t13.750000\t110.000000\t1,0,-1"));
    }

    #[test]
    fn input_table_formats_are_not_writable() {
        for format in [Format::Head3, Format::Microstates] {
            let err = write_report(Vec::new(), &[], format).unwrap_err();
            assert!(matches!(err, Error::UnsupportedWriteFormat(f) if f == format));
        }
    }
}
