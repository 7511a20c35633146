//! Human-readable byte size formatting.

const GIB: u64 = 1_073_741_824;
const MIB: u64 = 1_048_576;
const KIB: u64 = 1024;

/// Renders a byte count with binary unit thresholds.
///
/// The GB/MB/KB tiers print thousands-separated, fixed two-decimal numbers
/// (e.g. "1,907.35 MB"); smaller values print as plain bytes, with "1 byte"
/// singular and "0 bytes" for zero.
pub fn format_size(bytes: u64) -> String {
    if bytes >= GIB {
        format!("{} GB", thousands(bytes as f64 / GIB as f64))
    } else if bytes >= MIB {
        format!("{} MB", thousands(bytes as f64 / MIB as f64))
    } else if bytes >= KIB {
        format!("{} KB", thousands(bytes as f64 / KIB as f64))
    } else if bytes > 1 {
        format!("{bytes} bytes")
    } else if bytes == 1 {
        "1 byte".to_string()
    } else {
        "0 bytes".to_string()
    }
}

/// Formats `value` with two decimals and a comma every three integer digits.
fn thousands(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };
    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::with_capacity(fixed.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out.push('.');
    out.push_str(frac_part);
    out
}
