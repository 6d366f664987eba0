//! Resolution outcomes and response classification.
//!
//! A resolved request ends in an [`Outcome`]; classification turns that into
//! the final status/headers/body triple. The variant set is closed - the
//! original open-ended "dispatch on whatever the handler returned" becomes a
//! tagged enum with an explicit match, extensible through the `Other` arm.

use std::fmt;

use tracing::{error, warn};

use crate::response::Response;
use crate::runtime_config::RuntimeConfig;
use crate::static_files::{self, FileHandle};

/// Value a request resolves to, before classification.
pub enum Outcome {
    /// Nothing matched; classified as 404
    NoMatch,
    /// Explicit empty terminal at full path consumption; classified as 204
    Void,
    /// Plain text, served as HTML
    Text(String),
    /// Structured data (sequence, set, or mapping), serialized per the
    /// classifier's format
    Data(serde_json::Value),
    /// An explicit response, passed through unchanged
    Response(Response),
    /// A file resolved by the static gate
    File(FileHandle),
    /// A thunk that must be forced and reclassified
    Deferred(Box<dyn FnOnce() -> Outcome + Send>),
    /// Anything else, captured as its canonical textual form
    Other(String),
}

impl Outcome {
    /// Wrap a lazily-produced outcome.
    pub fn deferred<F>(f: F) -> Self
    where
        F: FnOnce() -> Outcome + Send + 'static,
    {
        Outcome::Deferred(Box::new(f))
    }

    /// Capture an arbitrary displayable value as its textual form.
    pub fn other<T: fmt::Display>(value: T) -> Self {
        Outcome::Other(value.to_string())
    }

    /// True for the no-match sentinel.
    #[inline]
    #[must_use]
    pub fn is_no_match(&self) -> bool {
        matches!(self, Outcome::NoMatch)
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoMatch => write!(f, "NoMatch"),
            Outcome::Void => write!(f, "Void"),
            Outcome::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Outcome::Data(v) => f.debug_tuple("Data").field(v).finish(),
            Outcome::Response(r) => f.debug_tuple("Response").field(r).finish(),
            Outcome::File(h) => f.debug_tuple("File").field(h).finish(),
            Outcome::Deferred(_) => write!(f, "Deferred(..)"),
            Outcome::Other(s) => f.debug_tuple("Other").field(s).finish(),
        }
    }
}

impl From<&str> for Outcome {
    fn from(s: &str) -> Self {
        Outcome::Text(s.to_string())
    }
}

impl From<String> for Outcome {
    fn from(s: String) -> Self {
        Outcome::Text(s)
    }
}

impl From<serde_json::Value> for Outcome {
    fn from(v: serde_json::Value) -> Self {
        Outcome::Data(v)
    }
}

impl From<Response> for Outcome {
    fn from(r: Response) -> Self {
        Outcome::Response(r)
    }
}

impl From<()> for Outcome {
    fn from(_: ()) -> Self {
        Outcome::Void
    }
}

/// Serialization format for `Data` outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `application/json` via serde_json (the default)
    #[default]
    Json,
    /// `application/yaml` via serde_yaml
    Yaml,
}

/// Maps outcomes to wire responses.
///
/// The formatting mode is carried explicitly instead of through ambient
/// scope: build one classifier per scope that needs a particular format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    /// Format used for `Data` outcomes
    pub format: Format,
}

impl Classifier {
    /// A classifier with the default JSON format.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A classifier with an explicit format.
    #[must_use]
    pub fn with_format(format: Format) -> Self {
        Self { format }
    }

    /// A classifier configured from the environment (`ZIPROUTE_FORMAT`).
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_format(RuntimeConfig::from_env().format)
    }

    /// Turn a resolution outcome into the final response.
    ///
    /// Deferred outcomes are forced and reclassified until a concrete
    /// variant is reached.
    #[must_use]
    pub fn classify(&self, outcome: Outcome) -> Response {
        match outcome {
            Outcome::NoMatch => {
                warn!("No handler matched request");
                Response::not_found()
            }
            Outcome::Void => Response::empty(204),
            Outcome::Text(s) => Response::html(200, &s),
            Outcome::Data(v) => self.serialize_data(&v),
            Outcome::Response(r) => r,
            Outcome::File(h) => static_files::serve(&h),
            Outcome::Deferred(f) => self.classify(f()),
            Outcome::Other(s) => Response::html(200, &s),
        }
    }

    fn serialize_data(&self, value: &serde_json::Value) -> Response {
        match self.format {
            Format::Json => Response::json(200, value),
            Format::Yaml => match serde_yaml::to_string(value) {
                Ok(body) => Response::text(200, "application/yaml", &body),
                Err(e) => {
                    error!(error = %e, "YAML serialization failed");
                    Response::text(500, "text/plain", "Internal Server Error")
                }
            },
        }
    }
}
