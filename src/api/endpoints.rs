//! URL construction for the search endpoints.

use crate::model::ApiError;

const AUTOCOMPLETE_PATH: &str = "/classified-list/ai-search/autocomplete";
const SEARCH_PATH: &str = "/classified-list/ai-search/search";

/// Percent-encode a URI component the way browsers' `encodeURIComponent` does.
///
/// `urlencoding` also escapes `!'()*`, which `encodeURIComponent` leaves as is.
fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for (start, ch) in value.char_indices() {
        match ch {
            '!' | '\'' | '(' | ')' | '*' => encoded.push(ch),
            _ => encoded.push_str(&urlencoding::encode(&value[start..start + ch.len_utf8()])),
        }
    }
    encoded
}

/// Base URL plus the fixed filters sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    article_type: String,
    country_code: String,
}

impl Endpoints {
    /// Validate `base_url` (http or https, trailing slashes dropped).
    pub fn new(
        base_url: &str,
        article_type: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
        if !has_scheme {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "expected an http:// or https:// URL".to_string(),
            });
        }
        if trimmed.ends_with("://") {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "missing host".to_string(),
            });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            article_type: article_type.into(),
            country_code: country_code.into(),
        })
    }

    /// Site root, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` URL for suggestions of `query`.
    pub fn autocomplete_url(&self, query: &str) -> String {
        format!(
            "{}{AUTOCOMPLETE_PATH}/{}?articleType={}",
            self.base_url,
            encode_component(query),
            encode_component(&self.article_type),
        )
    }

    /// `GET` URL resolving `query` to a listing path.
    pub fn resolve_url(&self, query: &str) -> String {
        format!(
            "{}{SEARCH_PATH}/{}?articleType={}&countryCode={}",
            self.base_url,
            encode_component(query),
            encode_component(&self.article_type),
            encode_component(&self.country_code),
        )
    }

    /// Absolute URL of a navigation target on the site.
    pub fn listing_url(&self, navigation_target: &str) -> String {
        format!("{}{navigation_target}", self.base_url)
    }
}
