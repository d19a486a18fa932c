// src/common/rules.rs

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::validation::Rule;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
// Brazilian phone, already masked: (xx) xxxxx-xxxx or (xx) xxxx-xxxx
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(\d{2}\)\s\d{4,5}-\d{4}$").unwrap());
static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap());

/// Blank input (absent or empty) passes every rule except `required`,
/// which also rejects whitespace-only strings.
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Fails on absent, empty or whitespace-only input.
pub fn required() -> Rule {
    Rule::new("Este campo é obrigatório", |value| {
        value.is_some_and(|v| !v.trim().is_empty())
    })
}

/// Basic `local@domain.tld` shape check.
pub fn email() -> Rule {
    Rule::new("Email inválido", |value| {
        is_blank(value) || EMAIL_REGEX.is_match(value.unwrap_or_default())
    })
}

pub fn min_length(min: usize) -> Rule {
    Rule::new(
        format!("Deve ter pelo menos {} caracteres", min),
        move |value| is_blank(value) || value.unwrap_or_default().chars().count() >= min,
    )
}

pub fn max_length(max: usize) -> Rule {
    Rule::new(
        format!("Deve ter no máximo {} caracteres", max),
        move |value| is_blank(value) || value.unwrap_or_default().chars().count() <= max,
    )
}

/// Accepts only fully masked numbers; run the phone formatter first.
pub fn phone() -> Rule {
    Rule::new("Telefone inválido", |value| {
        is_blank(value) || PHONE_REGEX.is_match(value.unwrap_or_default())
    })
}

pub fn password() -> Rule {
    Rule::new("Senha deve ter pelo menos 6 caracteres", |value| {
        is_blank(value) || value.unwrap_or_default().chars().count() >= 6
    })
}

/// At least 8 chars mixing lowercase, uppercase and a digit.
pub fn strong_password() -> Rule {
    Rule::new(
        "Senha deve ter pelo menos 8 caracteres, incluindo maiúscula, minúscula e número",
        |value| {
            if is_blank(value) {
                return true;
            }
            let v = value.unwrap_or_default();
            v.chars().count() >= 8
                && v.chars().any(|c| c.is_ascii_lowercase())
                && v.chars().any(|c| c.is_ascii_uppercase())
                && v.chars().any(|c| c.is_ascii_digit())
        },
    )
}

/// `DD/MM/YYYY`, and the day must exist on the calendar
/// (rejects 31/02/2024, accepts 29/02/2024).
pub fn date() -> Rule {
    Rule::new("Data inválida", |value| {
        if is_blank(value) {
            return true;
        }
        is_calendar_date(value.unwrap_or_default())
    })
}

fn is_calendar_date(value: &str) -> bool {
    if !DATE_REGEX.is_match(value) {
        return false;
    }

    // Pattern guarantees ASCII digits at fixed offsets
    let day: u32 = match value[0..2].parse() {
        Ok(d) => d,
        Err(_) => return false,
    };
    let month: u32 = match value[3..5].parse() {
        Ok(m) => m,
        Err(_) => return false,
    };
    let year: i32 = match value[6..10].parse() {
        Ok(y) => y,
        Err(_) => return false,
    };

    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Strips the mask and runs both standard CPF check-digit computations.
pub fn cpf() -> Rule {
    Rule::new("CPF inválido", |value| {
        is_blank(value) || is_valid_cpf(value.unwrap_or_default())
    })
}

fn is_valid_cpf(value: &str) -> bool {
    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 11 {
        return false;
    }

    digits[9] == cpf_check_digit(&digits, 9) && digits[10] == cpf_check_digit(&digits, 10)
}

// Weighted sum mod 11 over the first `len` digits, weights descending
// from len + 1; remainders 10 and 11 map to 0.
fn cpf_check_digit(digits: &[u32], len: usize) -> u32 {
    let sum: u32 = digits
        .iter()
        .take(len)
        .enumerate()
        .map(|(i, d)| d * (len as u32 + 1 - i as u32))
        .sum();

    let digit = 11 - (sum % 11);
    if digit >= 10 {
        0
    } else {
        digit
    }
}

/// Wraps an arbitrary predicate. Unlike the built-in rules, the predicate
/// also sees blank input.
pub fn custom(
    predicate: impl Fn(Option<&str>) -> bool + Send + Sync + 'static,
    message: impl Into<String>,
) -> Rule {
    Rule::new(message, predicate)
}
