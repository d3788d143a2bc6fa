//! Per-field cleaning helpers shared by the forms.
use super::FormErrors;
use super::widgets::ChoiceScope;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Deserializer};

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_CHOICE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

/// Ids currently offered by each stored-choice select.
#[derive(Debug, Clone, Default)]
pub struct FormChoices {
    pub publishers: Vec<i64>,
    pub categories: Vec<i64>,
    pub journalists: Vec<i64>,
}

impl FormChoices {
    pub fn ids(&self, scope: ChoiceScope) -> &[i64] {
        match scope {
            ChoiceScope::Publishers => &self.publishers,
            ChoiceScope::Categories => &self.categories,
            ChoiceScope::Journalists => &self.journalists,
            ChoiceScope::Roles | ChoiceScope::Statuses => &[],
        }
    }
}

/// Trimmed text, or a "required" error when blank.
pub(crate) fn required_text(errors: &mut FormErrors, field: &str, raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    Some(value.to_string())
}

/// Passwords keep their whitespace.
pub(crate) fn required_secret(errors: &mut FormErrors, field: &str, raw: &str) -> Option<String> {
    if raw.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    Some(raw.to_string())
}

pub(crate) fn check_max_length(
    errors: &mut FormErrors,
    field: &str,
    value: &str,
    max: usize,
) -> bool {
    let count = value.chars().count();
    if count > max {
        errors.add(
            field,
            format!("Ensure this value has at most {max} characters (it has {count})."),
        );
        return false;
    }
    true
}

pub(crate) fn check_min_length(
    errors: &mut FormErrors,
    field: &str,
    value: &str,
    min: usize,
) -> bool {
    let count = value.chars().count();
    if count < min {
        errors.add(
            field,
            format!("Ensure this value has at least {min} characters (it has {count})."),
        );
        return false;
    }
    true
}

/// Blank means "nothing selected". Anything else must be an offered id.
pub(crate) fn optional_choice(
    errors: &mut FormErrors,
    field: &str,
    raw: &str,
    offered: &[i64],
) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(id) if offered.contains(&id) => Some(id),
        _ => {
            errors.add(field, INVALID_CHOICE);
            None
        }
    }
}

/// Record a value-object failure against `field`.
pub(crate) fn domain_field<T>(
    errors: &mut FormErrors,
    field: &str,
    result: DomainResult<T>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.add(field, domain_message(err));
            None
        }
    }
}

fn domain_message(err: DomainError) -> String {
    let message = match err {
        DomainError::Validation(msg)
        | DomainError::Conflict(msg)
        | DomainError::NotFound(msg)
        | DomainError::Persistence(msg) => msg,
    };
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => message,
    }
}

/// HTML checkboxes are absent when unticked and usually "on" when ticked.
pub(crate) fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(
        raw.as_deref().map(str::trim),
        Some("on" | "true" | "1" | "yes" | "True")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_choice_is_not_an_error() {
        let mut errors = FormErrors::new();
        assert_eq!(optional_choice(&mut errors, "publisher", "  ", &[1]), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn unknown_choice_is_rejected() {
        let mut errors = FormErrors::new();
        assert_eq!(optional_choice(&mut errors, "publisher", "7", &[1, 2]), None);
        assert_eq!(optional_choice(&mut errors, "category", "x", &[1]), None);
        assert_eq!(errors.get("publisher"), [INVALID_CHOICE]);
        assert!(errors.has("category"));
    }

    #[test]
    fn domain_messages_read_like_sentences() {
        let mut errors = FormErrors::new();
        let result: DomainResult<()> =
            Err(DomainError::Validation("enter a valid email address".into()));
        domain_field(&mut errors, "email", result);
        assert_eq!(errors.get("email"), ["Enter a valid email address."]);
    }

    #[test]
    fn max_length_reports_the_count() {
        let mut errors = FormErrors::new();
        assert!(!check_max_length(&mut errors, "query", "abcd", 3));
        assert_eq!(
            errors.get("query"),
            ["Ensure this value has at most 3 characters (it has 4)."]
        );
    }
}
