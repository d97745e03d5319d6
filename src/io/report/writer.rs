use crate::io::{Format, error::Error};
use crate::model::charge_state::ChargeState;
use serde::Serialize;
use std::io::Write;

/// One ranked charge state as it appears in tabular and JSON reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub rank: usize,
    pub count: u64,
    pub energy: f64,
    pub total_energy: f64,
    pub state: Vec<i32>,
}

impl ReportRow {
    pub fn from_state(rank: usize, state: &ChargeState) -> Self {
        Self {
            rank,
            count: state.count(),
            energy: state.average_energy(),
            total_energy: state.total_energy(),
            state: state.charges(),
        }
    }
}

/// Numbers the states 1.. in the order given.
pub fn rows(states: &[ChargeState]) -> Vec<ReportRow> {
    states
        .iter()
        .enumerate()
        .map(|(i, s)| ReportRow::from_state(i + 1, s))
        .collect()
}

pub fn write<W: Write>(writer: W, states: &[ChargeState], format: Format) -> Result<(), Error> {
    match format {
        Format::Text => write_text(writer, states),
        Format::Tsv => write_tsv(writer, states),
        Format::Json => write_json(writer, states),
        other => Err(Error::UnsupportedWriteFormat(other)),
    }
}

fn write_text<W: Write>(mut writer: W, states: &[ChargeState]) -> Result<(), Error> {
    for state in states {
        writeln!(writer, "{state}")?;
    }
    writer.flush()?;
    Ok(())
}

fn write_tsv<W: Write>(mut writer: W, states: &[ChargeState]) -> Result<(), Error> {
    writeln!(writer, "rank\tcount\tE\ttotal_E\tstate")?;
    for row in rows(states) {
        let state = row
            .state
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(
            writer,
            "{}\t{}\t{:.6}\t{:.6}\t{}",
            row.rank, row.count, row.energy, row.total_energy, state
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json<W: Write>(mut writer: W, states: &[ChargeState]) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut writer, &rows(states))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
