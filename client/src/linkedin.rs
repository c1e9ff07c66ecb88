//! LinkedIn company references.

use once_cell::sync::Lazy;
use regex::Regex;

static COMPANY_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"linkedin\.com/company/([^/?#\s]+)").expect("company URL pattern is valid")
});

/// Slug from a LinkedIn company URL, or `None` if `url` is not one.
pub fn extract_company_slug(url: &str) -> Option<String> {
    COMPANY_URL
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim_end_matches('/').to_string())
}

/// Accept either a company URL or a bare slug.
pub fn company_slug(input: &str) -> String {
    extract_company_slug(input).unwrap_or_else(|| input.trim().trim_matches('/').to_string())
}

/// Convert `my-company-inc` to `My Company Inc`.
pub fn slug_to_name(slug: &str) -> String {
    slug.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
