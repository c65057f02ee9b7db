//! Verification callback links.
//!
//! The verification email points at `fridgef://verified`, optionally with a
//! `next` query parameter naming where to send the user afterwards. The
//! same parser also accepts the bare path form a browser address bar would
//! show (`/verified?next=/recipes`).

use std::fmt;
use std::str::FromStr;

use url::{form_urlencoded, Url};

/// The URI scheme for FridgeF deep links.
const LINK_SCHEME: &str = "fridgef";

/// The screen a verification link addresses.
const VERIFIED_SCREEN: &str = "verified";

/// Errors from parsing a verification callback link.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// The link was empty.
    #[error("Empty verification link")]
    Empty,

    /// The link used a scheme other than `fridgef:`.
    #[error("Unsupported link scheme: {scheme}")]
    WrongScheme { scheme: String },

    /// The link addressed a screen other than the verified screen.
    #[error("Unknown screen in verification link: {screen}")]
    UnknownScreen { screen: String },

    /// The link was neither a URL nor a `/verified` path.
    #[error("Malformed verification link: {input}")]
    Malformed { input: String },
}

/// A parsed verification callback link.
///
/// # Format
///
/// ```text
/// fridgef://verified?next=/recipes
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationLink {
    next: Option<String>,
}

impl VerificationLink {
    /// Parse a verification link from a string.
    ///
    /// Accepts both the full deep-link format (`fridgef://verified?...`)
    /// and the bare path form (`/verified?...`). An empty `next` value is
    /// treated as absent, matching how the web flow handles it.
    pub fn parse(s: &str) -> Result<Self, LinkError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LinkError::Empty);
        }

        if let Ok(url) = Url::parse(s) {
            if url.scheme() != LINK_SCHEME {
                return Err(LinkError::WrongScheme {
                    scheme: url.scheme().to_string(),
                });
            }
            if url.host_str() != Some(VERIFIED_SCREEN) {
                return Err(LinkError::UnknownScreen {
                    screen: url.host_str().unwrap_or_default().to_string(),
                });
            }
            return Ok(Self::from_query(url.query()));
        }

        // Bare path form, as a browser address bar would show it.
        if let Some(rest) = s.strip_prefix("/verified") {
            let query = match rest.strip_prefix('?') {
                Some(q) => Some(q),
                None if rest.is_empty() => None,
                None => return Err(LinkError::Malformed { input: s.to_string() }),
            };
            return Ok(Self::from_query(query));
        }

        Err(LinkError::Malformed { input: s.to_string() })
    }

    /// The redirect target carried by the link, if any.
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    fn from_query(query: Option<&str>) -> Self {
        let next = query.and_then(|q| {
            form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "next")
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
        });
        Self { next }
    }
}

impl fmt::Display for VerificationLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.next {
            Some(next) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("next", next)
                    .finish();
                write!(f, "{}://{}?{}", LINK_SCHEME, VERIFIED_SCREEN, query)
            }
            None => write!(f, "{}://{}", LINK_SCHEME, VERIFIED_SCREEN),
        }
    }
}

impl FromStr for VerificationLink {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, LinkError> {
        Self::parse(s)
    }
}
