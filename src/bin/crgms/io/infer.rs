use std::path::Path;

use crgms::io::Format;

pub fn output(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "txt" | "log" => Some(Format::Text),
        "tsv" | "tab" => Some(Format::Tsv),
        "json" => Some(Format::Json),
        _ => None,
    }
}
