mod writer;

pub use writer::{ReportRow, rows, write};
