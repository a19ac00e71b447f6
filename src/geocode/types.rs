//! Core types for the geocoding subsystem.

use thiserror::Error;

/// Administrative category encoded in a context entry `id` (e.g. `place.456`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Place,
    Region,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Place, Category::Region];

    /// Substring of the context `id` that marks this category.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Place => "place",
            Self::Region => "region",
        }
    }

    /// Feature field derived from a matching context entry.
    pub fn field(self) -> &'static str {
        match self {
            Self::Place => "city",
            Self::Region => "state",
        }
    }

    pub fn matches(self, id: &str) -> bool {
        id.contains(self.marker())
    }
}

/// Everything that can go wrong while relaying one search.
///
/// The HTTP layer collapses all variants into a single 500 response, so the
/// messages here are what callers see. None of them embed the outbound URL,
/// which carries the access token.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Malformed feature collection: {0}")]
    Malformed(String),

    #[error("Invalid provider URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Provider task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<ureq::Error> for GeocodeError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, _) => Self::Status(code),
            ureq::Error::Transport(t) => match t.message() {
                Some(msg) => Self::Network(format!("{}: {}", t.kind(), msg)),
                None => Self::Network(t.kind().to_string()),
            },
        }
    }
}
