use crgms::SortKey;
use crgms::io::Format;

use crate::cli::{ReportFormat, SortField};

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Count => SortKey::Count,
            SortField::Energy => SortKey::AverageEnergy,
            SortField::TotalEnergy => SortKey::TotalEnergy,
        }
    }
}

impl From<ReportFormat> for Format {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => Format::Text,
            ReportFormat::Tsv => Format::Tsv,
            ReportFormat::Json => Format::Json,
        }
    }
}

pub fn sort_key_display_name(key: SortKey) -> &'static str {
    match key {
        SortKey::Count => "count",
        SortKey::AverageEnergy => "average energy",
        SortKey::TotalEnergy => "total energy",
    }
}

pub fn direction_display_name(descending: bool) -> &'static str {
    if descending { "descending" } else { "ascending" }
}
