// src/validation.rs

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

/// `local-part@domain.tld`: no whitespace, exactly one `@`, at least one dot
/// after it with a non-empty top-level domain.
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Characters that count as the "symbol" a password must contain.
const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:'\",.<>/?";

/// A due date stays valid through its entire calendar day: the cutoff is the
/// local start of the following day. Today and any future date pass regardless
/// of current time-of-day; any past date is rejected before the store is
/// called.
pub fn validate_due_date(date: NaiveDate) -> Result<(), Error> {
    validate_due_date_at(date, Local::now().naive_local())
}

fn validate_due_date_at(date: NaiveDate, now: NaiveDateTime) -> Result<(), Error> {
    let Some(next_day) = date.succ_opt() else {
        return Ok(());
    };
    if next_day.and_time(NaiveTime::MIN) <= now {
        return Err(Error::Validation(
            "due date must be today or later".to_string(),
        ));
    }
    Ok(())
}

/// Required-field check shared by the user flows.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

pub fn valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn valid_password(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Per-field result of the registration form checks. The UI runs this on
/// every keystroke and blocks submission until both fields hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationCheck {
    pub email_ok: bool,
    pub password_ok: bool,
}

impl RegistrationCheck {
    pub fn can_submit(&self) -> bool {
        self.email_ok && self.password_ok
    }
}

pub fn check_registration(email: &str, password: &str) -> RegistrationCheck {
    RegistrationCheck {
        email_ok: valid_email(email),
        password_ok: valid_password(password),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn noon(date: NaiveDate) -> NaiveDateTime {
        date.and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn due_date_accepts_today_even_late_in_the_day() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let almost_midnight = today.and_hms_opt(23, 59, 59).unwrap();
        assert!(validate_due_date_at(today, almost_midnight).is_ok());
    }

    #[test]
    fn due_date_rejects_yesterday_even_just_after_midnight() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let just_after_midnight = today.and_hms_opt(0, 0, 1).unwrap();
        let yesterday = today - Duration::days(1);
        assert!(validate_due_date_at(yesterday, just_after_midnight).is_err());
    }

    #[test]
    fn due_date_accepts_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let tomorrow = today + Duration::days(1);
        assert!(validate_due_date_at(tomorrow, noon(today)).is_ok());
    }

    #[test]
    fn due_date_against_the_real_clock() {
        let today = Local::now().date_naive();
        assert!(validate_due_date(today).is_ok());
        assert!(validate_due_date(today + Duration::days(1)).is_ok());
        assert!(validate_due_date(today - Duration::days(1)).is_err());
    }

    #[test]
    fn email_requires_a_dot_after_the_at_sign() {
        assert!(!valid_email("a@b"));
        assert!(valid_email("a@b.com"));
        assert!(!valid_email("a b@c.com"));
        assert!(!valid_email("a@b@c.com"));
        assert!(!valid_email("a@b."));
    }

    #[test]
    fn password_needs_all_four_character_classes_and_length() {
        assert!(!valid_password("abcdefgh"));
        assert!(valid_password("Abcdefg1!"));
        assert!(!valid_password("Ab1!"));
        assert!(!valid_password("ABCDEFG1!"));
        assert!(!valid_password("abcdefg1!"));
        assert!(!valid_password("Abcdefgh!"));
    }

    #[test]
    fn registration_gate_requires_both_fields() {
        assert!(check_registration("a@b.com", "Abcdefg1!").can_submit());
        assert!(!check_registration("a@b", "Abcdefg1!").can_submit());
        assert!(!check_registration("a@b.com", "abcdefgh").can_submit());
    }

    #[test]
    fn required_fields_reject_blank_strings() {
        assert!(require_non_empty("name", "Ana").is_ok());
        assert!(require_non_empty("name", "").is_err());
        assert!(require_non_empty("name", "   ").is_err());
    }
}
