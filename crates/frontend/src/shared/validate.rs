//! Field validators for the entry forms. All checks run before any
//! network call; a failed check only blocks the submit.

use std::collections::HashMap;

pub fn required(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", field))
    } else {
        Ok(())
    }
}

pub fn min_len(value: &str, min: usize, field: &str) -> Result<(), String> {
    required(value, field)?;
    if value.trim().chars().count() < min {
        Err(format!("{} must be at least {} characters", field, min))
    } else {
        Ok(())
    }
}

pub fn max_len(value: &str, max: usize, field: &str) -> Result<(), String> {
    if value.trim().chars().count() > max {
        Err(format!("{} must be at most {} characters", field, max))
    } else {
        Ok(())
    }
}

pub fn digits(value: &str, field: &str) -> Result<(), String> {
    required(value, field)?;
    if value.trim().chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!("{} must contain only digits", field))
    }
}

/// Phone-style field: exactly `len` digits.
pub fn exact_digits(value: &str, len: usize, field: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.len() == len && trimmed.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!("{} must be a {}-digit number", field, len))
    }
}

pub fn alphanumeric(value: &str, field: &str) -> Result<(), String> {
    required(value, field)?;
    if value.trim().chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(format!("{} must contain only letters and numbers", field))
    }
}

pub fn email(value: &str, field: &str) -> Result<(), String> {
    required(value, field)?;
    let trimmed = value.trim();
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !trimmed.contains(' ')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(format!("{} must be a valid email address", field))
    }
}

/// Native date inputs emit `yyyy-mm-dd`; anything else is a hand-typed
/// value that did not parse.
pub fn date(value: &str, field: &str) -> Result<chrono::NaiveDate, String> {
    required(value, field)?;
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("{} must be a valid date", field))
}

pub fn url(value: &str, field: &str) -> Result<(), String> {
    required(value, field)?;
    let trimmed = value.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(())
    } else {
        Err(format!("{} must be a valid http(s) URL", field))
    }
}

/// Dropdown counterpart of [`required`].
pub fn selected<T>(value: &Option<T>, field: &str) -> Result<(), String> {
    if value.is_some() {
        Ok(())
    } else {
        Err(format!("{} is required", field))
    }
}

pub fn positive_number(value: &str, field: &str) -> Result<f64, String> {
    required(value, field)?;
    match value.trim().parse::<f64>() {
        Ok(n) if n >= 0.0 => Ok(n),
        Ok(_) => Err(format!("{} must not be negative", field)),
        Err(_) => Err(format!("{} must be a number", field)),
    }
}

pub fn positive_int(value: &str, field: &str) -> Result<i32, String> {
    required(value, field)?;
    match value.trim().parse::<i32>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err(format!("{} must be greater than zero", field)),
        Err(_) => Err(format!("{} must be a whole number", field)),
    }
}

/// Per-field error collection of one form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    errors: HashMap<&'static str, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the failure of one check under the field key; the first
    /// recorded error per field wins.
    pub fn check<T>(&mut self, field: &'static str, result: Result<T, String>) {
        if let Err(message) = result {
            self.errors.entry(field).or_insert(message);
        }
    }

    /// Unconditional variant for rules that do not fit a validator, such
    /// as "a file must be attached on create".
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert(message.into());
    }

    pub fn get(&self, field: &str) -> Option<String> {
        self.errors.get(field).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        assert!(required("", "Name").is_err());
        assert!(required("   ", "Name").is_err());
        assert!(required("x", "Name").is_ok());
    }

    #[test]
    fn test_min_len_counts_trimmed_chars() {
        assert!(min_len("abc", 3, "Code").is_ok());
        assert!(min_len("ab ", 3, "Code").is_err());
        assert_eq!(
            min_len("ab", 5, "Center code").unwrap_err(),
            "Center code must be at least 5 characters"
        );
    }

    #[test]
    fn test_exact_digits_for_phone_numbers() {
        assert!(exact_digits("9876543210", 10, "Contact number").is_ok());
        assert!(exact_digits("98765", 10, "Contact number").is_err());
        assert!(exact_digits("98765432x0", 10, "Contact number").is_err());
    }

    #[test]
    fn test_alphanumeric_registration_number() {
        assert!(alphanumeric("REG12345", "Registration number").is_ok());
        assert!(alphanumeric("REG-12345", "Registration number").is_err());
    }

    #[test]
    fn test_email_shapes() {
        assert!(email("head@branch.test", "Email").is_ok());
        assert!(email("head@branch", "Email").is_err());
        assert!(email("@branch.test", "Email").is_err());
        assert!(email("head branch@x.y", "Email").is_err());
    }

    #[test]
    fn test_date_parses_iso_shape() {
        use chrono::NaiveDate;

        assert_eq!(
            date("2021-06-15", "Date of joining"),
            NaiveDate::from_ymd_opt(2021, 6, 15).ok_or("valid".to_string())
        );
        assert!(date("15.06.2021", "Date of joining").is_err());
        assert!(date("", "Date of joining").is_err());
    }

    #[test]
    fn test_url_requires_http_scheme() {
        assert!(url("https://videos.example/abc", "Video URL").is_ok());
        assert!(url("videos.example/abc", "Video URL").is_err());
        assert!(url("", "Video URL").is_err());
    }

    #[test]
    fn test_selected_requires_a_choice() {
        assert!(selected(&Some(1), "Program").is_ok());
        assert_eq!(
            selected(&Option::<i32>::None, "Program").unwrap_err(),
            "Program is required"
        );
    }

    #[test]
    fn test_positive_number_parses() {
        assert_eq!(positive_number("1500.50", "Net fee"), Ok(1500.50));
        assert!(positive_number("-1", "Net fee").is_err());
        assert!(positive_number("abc", "Net fee").is_err());
    }

    #[test]
    fn test_positive_int_for_durations() {
        assert_eq!(positive_int("24", "Duration"), Ok(24));
        assert!(positive_int("0", "Duration").is_err());
        assert!(positive_int("2.5", "Duration").is_err());
    }

    #[test]
    fn test_add_records_a_direct_error() {
        let mut errors = FormErrors::new();
        errors.add("file", "Syllabus file is required");
        errors.add("file", "second message loses");

        assert_eq!(
            errors.get("file"),
            Some("Syllabus file is required".to_string())
        );
    }

    #[test]
    fn test_form_errors_keep_first_failure_per_field() {
        let mut errors = FormErrors::new();
        errors.check("code", min_len("a", 5, "Code"));
        errors.check("code", alphanumeric("a", "Code"));
        errors.check("name", required("x", "Name"));

        assert!(!errors.is_empty());
        assert_eq!(
            errors.get("code"),
            Some("Code must be at least 5 characters".to_string())
        );
        assert_eq!(errors.get("name"), None);
    }
}
