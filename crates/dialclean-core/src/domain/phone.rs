/// Normalizes a raw cell value to a US E.164-like phone string.
///
/// Accepts 11-digit values with a leading `1` or bare 10-digit values;
/// everything else maps to the empty-string sentinel. Unparseable input is
/// not an error: one bad row must never abort a batch.
pub fn normalize_us_phone(raw: &str, keep_plus: bool) -> String {
    let mut digits = String::new();
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        }
    }

    let core = if digits.len() == 11 && digits.starts_with('1') {
        &digits[1..]
    } else if digits.len() == 10 {
        digits.as_str()
    } else {
        return String::new();
    };

    if keep_plus {
        format!("+1{core}")
    } else {
        format!("1{core}")
    }
}
