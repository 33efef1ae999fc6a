use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Literal prefix of every canonical PEN identifier.
pub const PEN_PREFIX: &str = "PEN";

/// Number of digits following the prefix.
pub const PEN_DIGITS: usize = 12;

/// A canonical Pension Entry Number: `PEN` followed by exactly 12 ASCII digits.
///
/// Values only come out of [`extract_pen`] or [`Pen::from_digits`], so the
/// inner string is always in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pen(String);

impl Pen {
    /// Build a PEN from a bare digit string. Returns `None` unless `digits` is
    /// exactly 12 ASCII digits.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if is_pen_digits(digits) {
            Some(Self(format!("{PEN_PREFIX}{digits}")))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 12 digits without the `PEN` prefix.
    pub fn digits(&self) -> &str {
        &self.0[PEN_PREFIX.len()..]
    }
}

impl fmt::Display for Pen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Pen {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Pen {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Pen {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

pub(crate) fn is_pen_digits(text: &str) -> bool {
    text.len() == PEN_DIGITS && text.bytes().all(|b| b.is_ascii_digit())
}

/// One recognition rule for a PEN inside a filename.
///
/// Each rule captures the 12 digits of the identifier; the caller adds the
/// `PEN` prefix.
#[derive(Debug)]
pub struct PenRule {
    name: &'static str,
    regex: Regex,
}

impl PenRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("PEN rule patterns are valid"),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the captured digits if this rule matches `text`.
    pub fn capture<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

// Order matters: the first rule that matches wins.
static RULES: LazyLock<Vec<PenRule>> = LazyLock::new(|| {
    vec![
        PenRule::new("prefixed", r"PEN([0-9]{12})"),
        PenRule::new("underscore-prefixed", r"_PEN([0-9]{12})"),
        PenRule::new("leading-digits", r"^([0-9]{12})"),
    ]
});

/// The ordered recognition rules used by [`extract_pen`].
pub fn rules() -> &'static [PenRule] {
    &RULES
}

/// Extract the canonical PEN identifier embedded in `filename`.
///
/// Rules are tried in order and the first match wins. Bare leading digits get
/// the `PEN` prefix added.
pub fn extract_pen(filename: &str) -> Option<Pen> {
    rules()
        .iter()
        .find_map(|rule| rule.capture(filename))
        .and_then(Pen::from_digits)
}
