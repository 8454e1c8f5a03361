//! Field validators for the contact form.
//!
//! Every validator trims its input and returns the cleaned value, or the
//! `FieldError` whose text is shown under the field.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// A field-level validation failure. `Display` is the user-facing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required name field is blank.
    #[error("Laukas negali būti tuščias.")]
    Empty,

    /// A name has characters other than letters, spaces, `'` or `-`.
    #[error("Naudok tik raides.")]
    NotLetters,

    /// Not shaped like `local@domain.tld`.
    #[error("Neteisingas el. pašto formatas.")]
    InvalidEmail,

    /// The address is blank.
    #[error("Adresą įvesk kaip tekstą.")]
    AddressEmpty,

    /// A rating is not a number within 1-10.
    #[error("Skaičius turi būti 1–10.")]
    RatingOutOfRange,

    /// The phone field is blank.
    #[error("Telefono numeris negali būti tuščias.")]
    PhoneEmpty,

    /// The phone starts with something other than `+370` or `8`.
    #[error("Numeris turi prasidėti +370... arba 8...")]
    PhonePrefix,

    /// The phone is not a complete Lithuanian mobile number.
    #[error("Numeris turi būti +370 6xx xxxxx (arba 8xxxxxxxx).")]
    PhoneFormat,
}

static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();
static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn name_pattern() -> &'static Regex {
    NAME_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-zÀ-žąčęėįšųūžĄČĘĖĮŠŲŪŽ\s'-]+$")
            .expect("static name pattern is valid")
    })
}

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern is valid")
    })
}

/// First or last name: letters, whitespace, apostrophes and hyphens.
pub fn validate_name(value: &str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Empty);
    }
    if !name_pattern().is_match(value) {
        return Err(FieldError::NotLetters);
    }
    Ok(value.to_string())
}

/// `local@domain.tld`, no whitespace.
pub fn validate_email(value: &str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Empty);
    }
    if !email_pattern().is_match(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(value.to_string())
}

/// Free-text address; only emptiness is rejected.
pub fn validate_address(value: &str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::AddressEmpty);
    }
    Ok(value.to_string())
}

/// A rating between 1 and 10 inclusive. Fractions are allowed.
pub fn validate_rating(value: &str) -> Result<f64, FieldError> {
    let parsed: f64 = value.trim().parse().map_err(|_| FieldError::RatingOutOfRange)?;
    if !parsed.is_finite() || !(1.0..=10.0).contains(&parsed) {
        return Err(FieldError::RatingOutOfRange);
    }
    Ok(parsed)
}

/// Drop characters a phone field may not contain while typing.
#[must_use]
pub fn sanitize_phone_input(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+' || *c == '-' || c.is_whitespace())
        .collect()
}

/// Digits only; a 9-digit local `8xxxxxxxx` becomes `370xxxxxxxx`.
#[must_use]
pub fn normalize_phone_digits(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 9 && digits.starts_with('8') {
        return format!("370{}", &digits[1..]);
    }
    digits
}

/// Format 11 normalized digits as `+370 6xxx xxxx`.
///
/// Returns `None` unless the digits are a Lithuanian mobile number.
#[must_use]
pub fn format_lt_phone(digits: &str) -> Option<String> {
    if digits.len() != 11 || !digits.starts_with("3706") || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("+{} {}{} {}", &digits[..3], &digits[3..4], &digits[4..7], &digits[7..]))
}

/// Lenient check used while the user is still typing.
pub fn validate_phone_soft(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::PhoneEmpty);
    }
    let digits = normalize_phone_digits(value);
    if !digits.starts_with("370") && !digits.starts_with('8') {
        return Err(FieldError::PhonePrefix);
    }
    Ok(())
}

/// Full check used on blur and submit. Returns the canonical formatting.
pub fn validate_phone_strict(value: &str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::PhoneEmpty);
    }
    format_lt_phone(&normalize_phone_digits(value)).ok_or(FieldError::PhoneFormat)
}

/// Escape text for inclusion in HTML.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}
