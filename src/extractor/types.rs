// src/extractor/types.rs
use serde::Serialize;

/// Marker shown for a category with no findings.
pub const NOT_PRESENT: &str = "NOT PRESENT";

/// The four categories of contact artifacts found in one document, each in
/// first-seen order with no duplicates under its category's rule. A digit
/// string appears in at most one of `phone_numbers`/`fax_numbers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub phone_numbers: Vec<String>,
    pub fax_numbers: Vec<String>,
    pub emails: Vec<String>,
    pub social_profiles: Vec<String>,
}

/// Presentation form of a successful extraction: each category is either its
/// entries joined with ", " or the `NOT PRESENT` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReport {
    #[serde(rename = "Phone numbers")]
    pub phone_numbers: String,
    #[serde(rename = "Fax number")]
    pub fax_number: String,
    #[serde(rename = "Email addresses")]
    pub email_addresses: String,
    #[serde(rename = "Social media profiles")]
    pub social_media_profiles: String,
}

impl ExtractionResult {
    pub fn to_report(&self) -> ContactReport {
        ContactReport {
            phone_numbers: format_category(&self.phone_numbers),
            fax_number: format_category(&self.fax_numbers),
            email_addresses: format_category(&self.emails),
            social_media_profiles: format_category(&self.social_profiles),
        }
    }
}

fn format_category(entries: &[String]) -> String {
    if entries.is_empty() {
        NOT_PRESENT.to_string()
    } else {
        entries.join(", ")
    }
}
