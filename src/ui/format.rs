use crate::models::file_entry::FileEntry;

/// Size column used by the file listing: `bytes / 8 * 0.001` rounded to four
/// decimals, ties to even, printed with at least one fractional digit.
pub fn size_label(size_bytes: u64) -> String {
    let value = size_bytes as f64 / 8.0 * 0.001;
    // Fixed-precision formatting rounds the exact binary value half to even.
    let rounded: f64 = format!("{:.4}", value).parse().unwrap_or(value);
    if rounded.fract() == 0.0 {
        format!("{:.1} mb", rounded)
    } else {
        format!("{} mb", rounded)
    }
}

/// One `"<value> mb - <name>"` line per entry, with the size column padded to
/// the widest label.
pub fn format_entries(entries: &[FileEntry]) -> Vec<String> {
    let labels: Vec<String> = entries.iter().map(|e| size_label(e.size_bytes)).collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    labels
        .iter()
        .zip(entries)
        .map(|(label, entry)| format!("{:<width$} - {}", label, entry.name, width = width))
        .collect()
}
