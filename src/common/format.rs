// src/common/format.rs
// Live input masks, applied on every keystroke.
//
// Each formatter keeps the digits typed so far and re-inserts the fixed
// separators for however many digits are present, so formatting the first
// N digits of a number is always a prefix of formatting all of them.
// Digits past the mask's capacity are dropped.

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// `(xx) xxxx-xxxx` up to 10 digits, `(xx) xxxxx-xxxx` for 11.
pub fn phone(value: &str) -> String {
    let n = digits(value);
    match n.len() {
        0..=2 => n,
        3..=6 => format!("({}) {}", &n[..2], &n[2..]),
        7..=10 => format!("({}) {}-{}", &n[..2], &n[2..6], &n[6..]),
        _ => format!("({}) {}-{}", &n[..2], &n[2..7], &n[7..11]),
    }
}

/// `xxx.xxx.xxx-xx`.
pub fn cpf(value: &str) -> String {
    let n = digits(value);
    match n.len() {
        0..=3 => n,
        4..=6 => format!("{}.{}", &n[..3], &n[3..]),
        7..=9 => format!("{}.{}.{}", &n[..3], &n[3..6], &n[6..]),
        _ => format!("{}.{}.{}-{}", &n[..3], &n[3..6], &n[6..9], &n[9..n.len().min(11)]),
    }
}

/// `dd/mm/yyyy`.
pub fn date(value: &str) -> String {
    let n = digits(value);
    match n.len() {
        0..=2 => n,
        3..=4 => format!("{}/{}", &n[..2], &n[2..]),
        _ => format!("{}/{}/{}", &n[..2], &n[2..4], &n[4..n.len().min(8)]),
    }
}
