//! URL-derived display identity for cited sources.
//!
//! Citation URLs arrive in whatever shape the backend produced:
//! well-formed, scheme-less, wrapped in a vendor redirect, or plain
//! garbage. Everything here resolves to a displayable fallback rather
//! than an error, since a broken source row is worse than an ugly one.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use beacon_core::config::SourcesConfig;

/// Generic icon used when a source URL cannot be parsed at all, and the
/// substitute consumers apply when the primary icon fails to load.
pub const GENERIC_ICON: &str =
    "http://upload.wikimedia.org/wikipedia/commons/c/c5/Favicon-16x16.png";

/// Displayable path summary for one cited source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breadcrumb {
    /// Host plus non-empty path segments, percent-decoded for display.
    /// An unparsable URL collapses to a single opaque segment holding
    /// the raw string.
    Segments(Vec<String>),
    /// Vendor link-wrapping URL. The redirect path is unreadable, so
    /// the site name is recovered from the citation title instead.
    Redirect { label: String, site: String },
}

impl Breadcrumb {
    /// Display parts in order, regardless of variant.
    pub fn parts(&self) -> Vec<&str> {
        match self {
            Breadcrumb::Segments(segments) => segments.iter().map(String::as_str).collect(),
            Breadcrumb::Redirect { label, site } => vec![label.as_str(), site.as_str()],
        }
    }
}

/// Primary icon URL for a source plus the fixed fallback.
///
/// The resolver supplies both values; handling a load failure of the
/// primary by swapping in the fallback is the consumer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRef {
    pub primary: String,
    pub fallback: String,
}

/// Derives breadcrumbs and icon references from arbitrary source URLs.
#[derive(Debug, Clone)]
pub struct SourceIdentityResolver {
    redirect_domains: Vec<String>,
    redirect_label: String,
    icon_size: u32,
}

impl SourceIdentityResolver {
    pub fn new(config: &SourcesConfig) -> Self {
        Self {
            redirect_domains: config.redirect_domains.clone(),
            redirect_label: config.redirect_label.clone(),
            icon_size: config.icon_size,
        }
    }

    /// Derive the breadcrumb path for a source.
    ///
    /// Redirect-wrapped URLs get a `label > site` pair with the site
    /// name taken from the last ` - `-delimited piece of the title.
    /// Everything else is parsed as a URL (retrying with an `https://`
    /// prefix for scheme-less strings) and dissected into host and
    /// path segments. A string that survives neither parse is shown
    /// whole as a single opaque segment.
    pub fn breadcrumb(&self, uri: &str, title: &str) -> Breadcrumb {
        if self.is_redirect(uri) {
            return Breadcrumb::Redirect {
                label: self.redirect_label.clone(),
                site: site_from_title(title),
            };
        }

        let url = match parse_lenient(uri) {
            Some(url) => url,
            None => {
                warn!(uri = %uri, "could not parse source url for breadcrumb");
                return Breadcrumb::Segments(vec![uri.to_string()]);
            }
        };

        let host = url.host_str().unwrap_or_default();
        let host = host.strip_prefix("www.").unwrap_or(host);
        let mut parts = vec![decode_part(host)];
        parts.extend(
            url.path()
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(decode_part),
        );
        Breadcrumb::Segments(parts)
    }

    /// Derive the favicon reference for a source.
    ///
    /// Parse succeeds: the primary points at Google's favicon service
    /// for the URL's host, sized per configuration. Parse fails (or the
    /// URL carries no host): the primary is already the generic icon.
    pub fn icon(&self, uri: &str) -> IconRef {
        let primary = match parse_lenient(uri).as_ref().and_then(Url::host_str) {
            Some(host) => format!(
                "https://www.google.com/s2/favicons?domain={}&sz={}",
                host, self.icon_size
            ),
            None => {
                warn!(uri = %uri, "could not parse source url for icon");
                GENERIC_ICON.to_string()
            }
        };
        IconRef {
            primary,
            fallback: GENERIC_ICON.to_string(),
        }
    }

    fn is_redirect(&self, uri: &str) -> bool {
        // Substring check on the raw string: redirect URLs are matched
        // before any parse attempt, so a malformed wrapper still gets
        // the title-based treatment.
        self.redirect_domains
            .iter()
            .any(|domain| uri.contains(domain.as_str()))
    }
}

impl Default for SourceIdentityResolver {
    fn default() -> Self {
        Self::new(&SourcesConfig::default())
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn parse_lenient(uri: &str) -> Option<Url> {
    Url::parse(uri)
        .or_else(|_| Url::parse(&format!("https://{}", uri)))
        .ok()
}

/// Site name for a redirect-wrapped source: the last ` - `-delimited
/// piece of the title, trimmed, or the whole title when the delimiter
/// is absent.
fn site_from_title(title: &str) -> String {
    match title.rsplit_once(" - ") {
        Some((_, last)) => last.trim().to_string(),
        None => title.to_string(),
    }
}

fn decode_part(part: &str) -> String {
    percent_decode_str(part).decode_utf8_lossy().into_owned()
}

// =============================================================================
// Tests
// =============================================================================
