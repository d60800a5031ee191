const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Format byte count using binary multiples and one decimal place, e.g. `1.5KB`.
///
/// Counts that exceed the exabyte range are reported in `YB`.
pub fn format_size(bytes: u128) -> String {
    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{value:.1}{unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.1}YB")
}
