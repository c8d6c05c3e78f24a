use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::consts::{
    ALLOWED_MIME_TYPES, EMAIL_PATTERN, MAX_EMAIL_LENGTH, MAX_FILE_SIZE, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH, MIN_TLD_LENGTH, MOBILE_PATTERN, NAME_PATTERN, PASSWORD_PATTERN,
};
use crate::models::{FieldName, FieldValue, SelectedFile};

// Regexes for the text fields
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NAME_PATTERN).expect("Failed to compile name regex"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("Failed to compile email regex"));

static PASSWORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PASSWORD_PATTERN).expect("Failed to compile password regex"));

static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(MOBILE_PATTERN).expect("Failed to compile mobile regex"));

/// A broken rule. The `Display` output is the exact message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Error)]
pub enum RuleViolation {
    #[error("Please fill this field")]
    Required,

    #[error("Only alphabets are allowed and length should be between 2 to 50")]
    NameFormat,

    #[error("Maximum 60 characters allowed")]
    EmailTooLong,

    #[error("Invalid email format")]
    EmailFormat,

    #[error("Password must be between 8 to 14 characters")]
    PasswordLength,

    #[error("Only A-Z, a-z, 0-9, and $@_%&# are allowed")]
    PasswordCharset,

    #[error("Must be 10 digits and not start with 0")]
    MobileFormat,

    #[error("Please upload a file")]
    FileRequired,

    #[error("Only JPG, JPEG, PNG, AVIF files allowed")]
    FileType,

    #[error("File size must be under 2MB")]
    FileTooLarge,
}

/// A single predicate together with the violation it reports
pub struct Rule<T: ?Sized> {
    pub violation: RuleViolation,
    holds: fn(&T) -> bool,
}

impl<T: ?Sized> Rule<T> {
    pub fn check(&self, value: &T) -> Result<(), RuleViolation> {
        if (self.holds)(value) {
            Ok(())
        } else {
            Err(self.violation)
        }
    }
}

/// The ordered rules of one field
pub enum FieldRules {
    Text(&'static [Rule<str>]),
    File(&'static [Rule<Option<SelectedFile>>]),
}

#[cfg(test)]
impl FieldRules {
    /// Violations in evaluation order
    fn violations(&self) -> Vec<RuleViolation> {
        match self {
            FieldRules::Text(rules) => rules.iter().map(|rule| rule.violation).collect(),
            FieldRules::File(rules) => rules.iter().map(|rule| rule.violation).collect(),
        }
    }
}

static NAME_RULES: [Rule<str>; 2] = [
    Rule { violation: RuleViolation::Required, holds: is_filled },
    Rule { violation: RuleViolation::NameFormat, holds: is_name },
];

static EMAIL_RULES: [Rule<str>; 3] = [
    Rule { violation: RuleViolation::Required, holds: is_filled },
    Rule { violation: RuleViolation::EmailTooLong, holds: is_short_email },
    Rule { violation: RuleViolation::EmailFormat, holds: is_email },
];

static PASSWORD_RULES: [Rule<str>; 3] = [
    Rule { violation: RuleViolation::Required, holds: is_filled },
    Rule { violation: RuleViolation::PasswordLength, holds: has_password_length },
    Rule { violation: RuleViolation::PasswordCharset, holds: has_password_charset },
];

static MOBILE_RULES: [Rule<str>; 2] = [
    Rule { violation: RuleViolation::Required, holds: is_filled },
    Rule { violation: RuleViolation::MobileFormat, holds: is_mobile },
];

static FILE_RULES: [Rule<Option<SelectedFile>>; 3] = [
    Rule { violation: RuleViolation::FileRequired, holds: is_selected },
    Rule { violation: RuleViolation::FileType, holds: has_allowed_type },
    Rule { violation: RuleViolation::FileTooLarge, holds: has_allowed_size },
];

/// Returns the rule table of a field
pub fn rules_for(field: FieldName) -> FieldRules {
    match field {
        FieldName::Name => FieldRules::Text(&NAME_RULES),
        FieldName::Email => FieldRules::Text(&EMAIL_RULES),
        FieldName::Password => FieldRules::Text(&PASSWORD_RULES),
        FieldName::Mobile => FieldRules::Text(&MOBILE_RULES),
        FieldName::File => FieldRules::File(&FILE_RULES),
    }
}

/// Evaluates the rules of `field` in order and reports the first one broken.
///
/// A value of the wrong kind is judged as the empty value of the field.
pub fn evaluate(field: FieldName, value: &FieldValue) -> Result<(), RuleViolation> {
    match (rules_for(field), value) {
        (FieldRules::Text(rules), FieldValue::Text(text)) => first_violation(rules, text.as_str()),
        (FieldRules::Text(rules), FieldValue::File(_)) => first_violation(rules, ""),
        (FieldRules::File(rules), FieldValue::File(file)) => first_violation(rules, file),
        (FieldRules::File(rules), FieldValue::Text(_)) => first_violation(rules, &None),
    }
}

fn first_violation<T: ?Sized>(rules: &[Rule<T>], value: &T) -> Result<(), RuleViolation> {
    rules.iter().try_for_each(|rule| rule.check(value))
}

/// Length as counted by a browser text input (UTF-16 code units)
fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

fn is_filled(value: &str) -> bool {
    !value.is_empty()
}

fn is_name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

fn is_short_email(value: &str) -> bool {
    input_length(value) <= MAX_EMAIL_LENGTH
}

fn is_email(value: &str) -> bool {
    EMAIL_REGEX
        .captures(value)
        .and_then(|caps| caps.name("domain"))
        .is_some_and(|domain| has_top_level_domain(domain.as_str()))
}

/// A dot after the first character of the domain, followed by at least
/// two UTF-16 units. The first such dot leaves the longest suffix.
fn has_top_level_domain(domain: &str) -> bool {
    domain
        .char_indices()
        .skip(1)
        .find(|(_, c)| *c == '.')
        .is_some_and(|(dot, _)| input_length(&domain[dot + 1..]) >= MIN_TLD_LENGTH)
}

fn has_password_length(value: &str) -> bool {
    (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&input_length(value))
}

fn has_password_charset(value: &str) -> bool {
    PASSWORD_REGEX.is_match(value)
}

fn is_mobile(value: &str) -> bool {
    MOBILE_REGEX.is_match(value)
}

fn is_selected(file: &Option<SelectedFile>) -> bool {
    file.is_some()
}

fn has_allowed_type(file: &Option<SelectedFile>) -> bool {
    file.as_ref()
        .is_some_and(|f| ALLOWED_MIME_TYPES.contains(&f.mime_type.as_str()))
}

fn has_allowed_size(file: &Option<SelectedFile>) -> bool {
    file.as_ref().is_some_and(|f| f.size_bytes <= MAX_FILE_SIZE)
}
