//! Field rules for students.

use chrono::{Datelike, NaiveDate};
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::text;

/// Maximum length for a student's full name.
pub const MAX_FULL_NAME_LEN: usize = 200;

/// Maximum length for a student's email address.
pub const MAX_EMAIL_LEN: usize = 100;

/// Earliest year a PostgreSQL `DATE` can store (4713 BC, proleptic).
pub const MIN_DATE_OF_BIRTH_YEAR: i32 = -4712;

/// Validate a full name: non-blank and within length limit.
pub fn validate_full_name(full_name: &str) -> Result<(), CoreError> {
    text::validate_required("fullName", full_name, MAX_FULL_NAME_LEN)
}

/// Validate an email address: present, within length limit and well-formed.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    text::validate_required("email", email, MAX_EMAIL_LEN)?;
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "email '{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Validate a date of birth: within the range a PostgreSQL `DATE` can store.
///
/// The upper bound of that range lies beyond anything `NaiveDate` parses.
pub fn validate_date_of_birth(date_of_birth: NaiveDate) -> Result<(), CoreError> {
    if date_of_birth.year() < MIN_DATE_OF_BIRTH_YEAR {
        return Err(CoreError::Validation(format!(
            "dateOfBirth {date_of_birth} is out of range"
        )));
    }
    Ok(())
}

/// Validate all writable fields of a student.
///
/// Presence of `dateOfBirth` and `classId` is enforced during
/// deserialization; the class reference by the foreign key.
pub fn validate_student(
    full_name: &str,
    email: &str,
    date_of_birth: NaiveDate,
) -> Result<(), CoreError> {
    validate_full_name(full_name)?;
    validate_email(email)?;
    validate_date_of_birth(date_of_birth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dob(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 1, 1).unwrap()
    }

    #[test]
    fn accepts_valid_student() {
        assert!(validate_student("Ann", "a@x.com", dob(2000)).is_ok());
    }

    #[test]
    fn rejects_blank_full_name() {
        let err = validate_student("", "a@x.com", dob(2000)).unwrap_err();
        assert!(err.to_string().contains("fullName is required"));
    }

    #[test]
    fn full_name_boundary() {
        assert!(validate_full_name(&"n".repeat(MAX_FULL_NAME_LEN)).is_ok());
        assert!(validate_full_name(&"n".repeat(MAX_FULL_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["not-an-email", "a@", "@x.com", "a b@x.com"] {
            let err = validate_email(bad).unwrap_err();
            assert!(
                err.to_string().contains("not a valid email address"),
                "expected syntax error for {bad}"
            );
        }
    }

    #[test]
    fn rejects_missing_email() {
        let err = validate_email("").unwrap_err();
        assert!(err.to_string().contains("email is required"));
    }

    #[test]
    fn rejects_overlong_email() {
        // 95 + "@x.com" = 101 chars
        let email = format!("{}@x.com", "a".repeat(95));
        let err = validate_email(&email).unwrap_err();
        assert!(err.to_string().contains("email too long"));
    }

    #[test]
    fn date_of_birth_lower_bound() {
        assert!(validate_date_of_birth(dob(MIN_DATE_OF_BIRTH_YEAR)).is_ok());
        assert!(validate_date_of_birth(dob(0)).is_ok());

        let err = validate_date_of_birth(dob(MIN_DATE_OF_BIRTH_YEAR - 1)).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(validate_student("Ann", "a@x.com", dob(-5000)).is_err());
    }
}
