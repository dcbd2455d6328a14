//! Validation and filtering rules for form input.
//!
//! Each [`RuleKind`] maps to exactly one character filter and one
//! whole-value predicate. [`filter`] strips disallowed characters as the
//! user types; [`classify`] decides pass/fail at validation time. Both are
//! pure, deterministic, and total over the rule enumeration: no side
//! effects, no failure modes.
//!
//! Patterns use explicit ASCII classes throughout, so "word character"
//! always means `[0-9A-Za-z_]` regardless of host locale.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// The closed set of validation rule kinds.
///
/// String tokens (see [`RuleKind::as_str`]) match the values a host accepts
/// in the rule data attribute: `alpha`, `alpha_num`, `decimal`, `email`,
/// `integer`, `name`, `phone`, `plain_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// ASCII letters only.
    Alpha,
    /// ASCII letters and digits.
    AlphaNum,
    /// Digits with a single decimal point; a fractional part is mandatory.
    Decimal,
    /// `local@domain.tld` shape; the empty string also passes.
    Email,
    /// Digits only.
    Integer,
    /// Letters plus space, period, and dash.
    Name,
    /// US phone number, filtered into `###-###-####`.
    Phone,
    /// Word characters, a fixed punctuation set, and whitespace.
    PlainText,
}

/// A rule token that is not one of the eight known kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown validation rule `{0}`")]
pub struct UnknownRule(pub String);

impl RuleKind {
    /// All rule kinds, in token order.
    pub const ALL: [Self; 8] = [
        Self::Alpha,
        Self::AlphaNum,
        Self::Decimal,
        Self::Email,
        Self::Integer,
        Self::Name,
        Self::Phone,
        Self::PlainText,
    ];

    /// The attribute token for this rule kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::AlphaNum => "alpha_num",
            Self::Decimal => "decimal",
            Self::Email => "email",
            Self::Integer => "integer",
            Self::Name => "name",
            Self::Phone => "phone",
            Self::PlainText => "plain_text",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alpha" => Ok(Self::Alpha),
            "alpha_num" => Ok(Self::AlphaNum),
            "decimal" => Ok(Self::Decimal),
            "email" => Ok(Self::Email),
            "integer" => Ok(Self::Integer),
            "name" => Ok(Self::Name),
            "phone" => Ok(Self::Phone),
            "plain_text" => Ok(Self::PlainText),
            _ => Err(UnknownRule(s.to_string())),
        }
    }
}

static NON_ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new("[^a-zA-Z]").unwrap());
static ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new("^[a-zA-Z]+$").unwrap());

static NON_ALPHA_NUM: Lazy<Regex> = Lazy::new(|| Regex::new("[^a-zA-Z0-9]").unwrap());
static ALPHA_NUM: Lazy<Regex> = Lazy::new(|| Regex::new("^[a-zA-Z0-9]+$").unwrap());

static NON_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new("[^0-9.]").unwrap());
// Anchored at the start only: a fractional part must follow the point, but
// trailing garbage is tolerated. Filtered input never carries any.
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+").unwrap());

static NON_EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9A-Za-z_\-@.+]").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9A-Za-z_\-.+]+@([0-9A-Za-z_\-]+\.)+[0-9A-Za-z_\-]{2,})?$").unwrap()
});

// `[0-9]`, not `\d`: the latter is Unicode-aware here and would keep
// non-ASCII digits, which the phone formatter must never see.
static NON_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new("[^0-9]").unwrap());
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new("^[0-9]+$").unwrap());

static NON_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^-.\sa-zA-Z]").unwrap());
// First character only. A known weak invariant, kept loose for backward
// compatibility with existing markup rather than tightened to a
// full-string match.
static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-.\sa-zA-Z]").unwrap());

static NON_PLAIN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9A-Za-z_\-.!@#$%&*()+?;:,'\s]").unwrap());
// First character only, same caveat as NAME.
static PLAIN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Za-z_\-.!@#$%&*()+?;:,'\s]").unwrap());

const PHONE_DIGITS: usize = 10;

/// Strips characters the rule disallows, returning the surviving value.
///
/// This is the live-filtering transform applied on every keystroke. It is
/// idempotent: filtering an already-filtered value is a no-op.
pub fn filter(value: &str, rule: RuleKind) -> String {
    match rule {
        RuleKind::Alpha => NON_ALPHA.replace_all(value, "").into_owned(),
        RuleKind::AlphaNum => NON_ALPHA_NUM.replace_all(value, "").into_owned(),
        RuleKind::Decimal => filter_decimal(value),
        RuleKind::Email => NON_EMAIL.replace_all(value, "").into_owned(),
        RuleKind::Integer => NON_INTEGER.replace_all(value, "").into_owned(),
        RuleKind::Name => NON_NAME.replace_all(value, "").into_owned(),
        RuleKind::Phone => format_phone(&NON_INTEGER.replace_all(value, "")),
        RuleKind::PlainText => NON_PLAIN_TEXT.replace_all(value, "").into_owned(),
    }
}

/// Whole-value pass/fail predicate applied at validation time.
///
/// Emptiness is not the rule's concern: required-ness is checked by the
/// field evaluator before classification. The one exception is `email`,
/// whose pattern deliberately accepts the empty string.
pub fn classify(value: &str, rule: RuleKind) -> bool {
    match rule {
        RuleKind::Alpha => ALPHA.is_match(value),
        RuleKind::AlphaNum => ALPHA_NUM.is_match(value),
        RuleKind::Decimal => DECIMAL.is_match(value),
        RuleKind::Email => EMAIL.is_match(value),
        RuleKind::Integer => INTEGER.is_match(value),
        RuleKind::Name => NAME.is_match(value),
        RuleKind::Phone => NON_INTEGER.replace_all(value, "").len() == PHONE_DIGITS,
        RuleKind::PlainText => PLAIN_TEXT.is_match(value),
    }
}

/// Keeps digits and the first decimal point; later points are dropped.
fn filter_decimal(value: &str) -> String {
    let stripped = NON_DECIMAL.replace_all(value, "");
    let Some(idx) = stripped.find('.') else {
        return stripped.into_owned();
    };
    let (head, tail) = stripped.split_at(idx);
    let mut out = String::with_capacity(stripped.len());
    out.push_str(head);
    out.push('.');
    out.extend(tail[1..].chars().filter(|&c| c != '.'));
    out
}

/// Progressively formats accumulated digits as `###-###-####`.
///
/// Ten or more digits are truncated to ten and fully formatted; partial
/// input gets dashes as soon as each block of three completes.
fn format_phone(digits: &str) -> String {
    match digits.len() {
        n if n >= PHONE_DIGITS => {
            format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..10])
        }
        n if n > 6 => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        n if n >= 3 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => digits.to_string(),
    }
}
