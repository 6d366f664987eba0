//! Typed path-parameter parsers.
//!
//! A parser is a full-match pattern plus a conversion from the raw segment
//! to a typed value. The built-in table covers `int`, `slug`, `date`, and
//! `uuid`; anything else is a [`CustomParam`] built from a caller-supplied
//! (pattern, parse fn) pair.

use anyhow::Context;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

#[allow(clippy::expect_used)]
static INT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("int pattern"));
#[allow(clippy::expect_used)]
static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("slug pattern"));
#[allow(clippy::expect_used)]
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern"));
#[allow(clippy::expect_used)]
static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern")
});

/// A typed segment parser usable with [`Router::param`](crate::Router::param).
///
/// The pattern must match the *whole* segment for the combinator's gate to
/// open; `parse` then produces the value handed to the body. Returning
/// `None` from `parse` is a normal no-match: the segment stays unconsumed
/// and sibling combinators get their turn. That covers values the pattern
/// admits but the domain type rejects, like `\d+` overflowing `i64` or
/// `2024-02-31` not being a calendar date.
pub trait ParamKind {
    /// Parsed value type handed to the combinator body.
    type Value;

    /// Full-match pattern gating the combinator.
    fn pattern(&self) -> &Regex;

    /// Convert a pattern-matched segment into a value.
    fn parse(&self, raw: &str) -> Option<Self::Value>;
}

/// `\d+` → `i64`.
#[derive(Debug, Clone, Copy)]
pub struct IntParam;

impl ParamKind for IntParam {
    type Value = i64;

    fn pattern(&self) -> &Regex {
        &INT_PATTERN
    }

    fn parse(&self, raw: &str) -> Option<i64> {
        raw.parse().ok()
    }
}

/// `[a-zA-Z0-9_-]+` → the segment itself.
#[derive(Debug, Clone, Copy)]
pub struct SlugParam;

impl ParamKind for SlugParam {
    type Value = String;

    fn pattern(&self) -> &Regex {
        &SLUG_PATTERN
    }

    fn parse(&self, raw: &str) -> Option<String> {
        Some(raw.to_string())
    }
}

/// `yyyy-MM-dd` → [`chrono::NaiveDate`].
#[derive(Debug, Clone, Copy)]
pub struct DateParam;

impl ParamKind for DateParam {
    type Value = NaiveDate;

    fn pattern(&self) -> &Regex {
        &DATE_PATTERN
    }

    fn parse(&self, raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

/// Canonical 8-4-4-4-12 hex form → [`uuid::Uuid`].
#[derive(Debug, Clone, Copy)]
pub struct UuidParam;

impl ParamKind for UuidParam {
    type Value = Uuid;

    fn pattern(&self) -> &Regex {
        &UUID_PATTERN
    }

    fn parse(&self, raw: &str) -> Option<Uuid> {
        Uuid::parse_str(raw).ok()
    }
}

/// A caller-supplied (pattern, parse fn) pair.
///
/// The pattern is anchored to the full segment at construction time, so
/// `[0-9]{5}` matches exactly a five-digit segment and nothing longer.
///
/// A parse function that panics on a segment its own pattern admitted is a
/// programmer error in the route definition; the panic propagates uncaught.
pub struct CustomParam<T, F: Fn(&str) -> T> {
    pattern: Regex,
    parse: F,
}

impl<T, F: Fn(&str) -> T> CustomParam<T, F> {
    /// Compile `pattern` (anchored to the whole segment) around `parse`.
    pub fn new(pattern: &str, parse: F) -> anyhow::Result<Self> {
        let pattern = Regex::new(&format!("^(?:{pattern})$"))
            .with_context(|| format!("invalid param pattern: {pattern}"))?;
        Ok(Self { pattern, parse })
    }
}

impl<T, F: Fn(&str) -> T> ParamKind for CustomParam<T, F> {
    type Value = T;

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn parse(&self, raw: &str) -> Option<T> {
        Some((self.parse)(raw))
    }
}
