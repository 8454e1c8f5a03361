//! Contact form state, validation passes and client-only submission.
//!
//! Nothing is sent anywhere: a successful submit produces a `Submission`
//! whose HTML summary the page shows in its result panel.

use serde::Serialize;
use smallvec::SmallVec;
use tracing::debug;

use super::validate::{
    escape_html, sanitize_phone_input, validate_address, validate_email, validate_name,
    validate_phone_soft, validate_phone_strict, validate_rating, FieldError,
};

/// Form fields, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    /// Vardas
    FirstName,
    /// Pavardė
    LastName,
    /// El. paštas
    Email,
    /// Tel. numeris
    Phone,
    /// Adresas
    Address,
    /// First 1-10 rating
    Rating1,
    /// Second 1-10 rating
    Rating2,
    /// Third 1-10 rating
    Rating3,
}

impl Field {
    /// The form's `name` attribute for this field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::FirstName => "vardas",
            Field::LastName => "pavarde",
            Field::Email => "email",
            Field::Phone => "telefonas",
            Field::Address => "adresas",
            Field::Rating1 => "vertinimas1",
            Field::Rating2 => "vertinimas2",
            Field::Rating3 => "vertinimas3",
        }
    }
}

/// Which phone check a validation pass applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationMode {
    /// While typing: lenient phone prefix check.
    Live,
    /// On submit: full phone format check, value rewritten to canonical form.
    Submit,
}

/// Outcome of a validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormReport {
    /// Failing fields with their messages, in page order.
    pub errors: SmallVec<[(Field, FieldError); 8]>,
}

impl FormReport {
    /// Did every field pass?
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The submit button is enabled exactly when the form is valid.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.is_valid()
    }

    /// Error for a single field, if it failed.
    #[must_use]
    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().find(|(f, _)| *f == field).map(|(_, e)| *e)
    }

    fn check<T>(&mut self, field: Field, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.errors.push((field, e));
                None
            }
        }
    }
}

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Phone as typed, or canonical `+370 6xxx xxxx` after blur
    pub phone: String,
    /// Postal address
    pub address: String,
    /// The three ratings as typed
    pub ratings: [String; 3],
}

/// A validated, submitted form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Submission {
    /// Trimmed first name
    pub first_name: String,
    /// Trimmed last name
    pub last_name: String,
    /// Trimmed email
    pub email: String,
    /// Canonical phone number
    pub phone: String,
    /// Trimmed address
    pub address: String,
    /// Parsed ratings, each within 1-10
    pub ratings: [f64; 3],
    /// Mean of the ratings, rounded to one decimal.
    pub average: f64,
}

impl Submission {
    /// Average as shown to the user, always one decimal (`7.0`).
    #[must_use]
    pub fn average_text(&self) -> String {
        format!("{:.1}", self.average)
    }

    /// Result panel markup. Every user-supplied string is escaped.
    #[must_use]
    pub fn render_html(&self) -> String {
        let first = escape_html(&self.first_name);
        let last = escape_html(&self.last_name);
        let [r1, r2, r3] = self.ratings;
        format!(
            "<p>Vardas: {first}</p>\n\
             <p>Pavardė: {last}</p>\n\
             <p>El. paštas: {}</p>\n\
             <p>Tel. numeris: {}</p>\n\
             <p>Adresas: {}</p>\n\
             <p>Įvertinimai: {r1}, {r2}, {r3}</p>\n\
             <p><strong>{first} {last}: vidurkis {}</strong></p>",
            escape_html(&self.email),
            escape_html(&self.phone),
            escape_html(&self.address),
            self.average_text(),
        )
    }
}

impl ContactForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every validator.
    ///
    /// In `Submit` mode a valid phone number is rewritten to its canonical
    /// `+370 6xxx xxxx` form.
    pub fn validate(&mut self, mode: ValidationMode) -> FormReport {
        let mut report = FormReport::default();

        report.check(Field::FirstName, validate_name(&self.first_name));
        report.check(Field::LastName, validate_name(&self.last_name));
        report.check(Field::Email, validate_email(&self.email));
        report.check(Field::Address, validate_address(&self.address));
        for (field, raw) in [Field::Rating1, Field::Rating2, Field::Rating3]
            .into_iter()
            .zip(&self.ratings)
        {
            report.check(field, validate_rating(raw));
        }

        match mode {
            ValidationMode::Live => {
                report.check(Field::Phone, validate_phone_soft(&self.phone));
            }
            ValidationMode::Submit => {
                if let Some(formatted) = report.check(Field::Phone, validate_phone_strict(&self.phone)) {
                    self.phone = formatted;
                }
            }
        }

        report
    }

    /// Phone keystroke: strip disallowed characters, then check leniently.
    pub fn input_phone(&mut self, raw: &str) -> Result<(), FieldError> {
        self.phone = sanitize_phone_input(raw);
        validate_phone_soft(&self.phone)
    }

    /// Phone field lost focus: full check and canonical rewrite.
    pub fn blur_phone(&mut self) -> Result<(), FieldError> {
        let formatted = validate_phone_strict(&self.phone)?;
        self.phone = formatted;
        Ok(())
    }

    /// Validate strictly and, if everything passes, produce the submission.
    pub fn submit(&mut self) -> Result<Submission, FormReport> {
        let report = self.validate(ValidationMode::Submit);
        if !report.is_valid() {
            debug!(errors = report.errors.len(), "contact form rejected");
            return Err(report);
        }

        let mut ratings = [0.0; 3];
        for (slot, raw) in ratings.iter_mut().zip(&self.ratings) {
            *slot = validate_rating(raw).map_err(|_| report.clone())?;
        }
        let average = (ratings.iter().sum::<f64>() / 3.0 * 10.0).round() / 10.0;

        let submission = Submission {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            ratings,
            average,
        };
        debug!(?submission, "contact form submitted");
        Ok(submission)
    }
}
