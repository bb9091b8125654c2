//! Display formatting for money and file sizes

use hrms_domain::constants::CURRENCY_PREFIX;

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;

/// `"Rs. 1,234,567"`; amounts are rounded to whole rupees
#[allow(clippy::cast_possible_truncation)]
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{CURRENCY_PREFIX} 0");
    }
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{CURRENCY_PREFIX} {sign}{}", group_thousands(rounded.unsigned_abs()))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Human file size: bytes below 1 KB, one decimal above
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}
