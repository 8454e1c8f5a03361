//! Contact form: field validators and client-only submission.
//!
//! - `validate`: One function per field kind, plus phone normalization
//! - `form`: The whole form, validation passes and the submission summary

mod form;
mod validate;

pub use form::{ContactForm, Field, FormReport, Submission, ValidationMode};
pub use validate::{
    escape_html, format_lt_phone, normalize_phone_digits, sanitize_phone_input, validate_address,
    validate_email, validate_name, validate_phone_soft, validate_phone_strict, validate_rating,
    FieldError,
};
