// src/extractor/contact_extractor.rs
use crate::extractor::types::ExtractionResult;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// How far back (in characters) to look for fax-indicating vocabulary before
/// a phone-shaped match.
const FAX_CONTEXT_WINDOW: usize = 60;

pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    fax_hint_regex: Regex,
    social_regex: Regex,
}

impl ContactExtractor {
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap(),
            phone_regex: Regex::new(r"(?:\+?\d{1,3}[\s.-])?(?:\(?\d{3}\)?[\s.-])?\d{3}[\s.-]\d{4}")
                .unwrap(),
            fax_hint_regex: Regex::new(r"(?i)\b(?:fax|facsimile)\b").unwrap(),
            social_regex: Regex::new(
                r#"(?i)https?://(?:www\.)?(?:facebook|twitter|linkedin|instagram|youtube|t\.me|telegram|pinterest|threads|mastodon)\.[^\s"'<>]+"#,
            )
            .unwrap(),
        }
    }

    /// Runs every recognition pattern over the document and returns the four
    /// de-duplicated categories in first-seen order. Pure and total: any
    /// input, including the empty string, yields a well-formed result.
    pub fn extract(&self, document: &str) -> ExtractionResult {
        let emails = self.extract_emails(document);
        let (phone_numbers, fax_numbers) = self.extract_phones_and_faxes(document);
        let social_profiles = self.extract_social_profiles(document);

        debug!(
            "Extracted {} phones, {} faxes, {} emails, {} social links",
            phone_numbers.len(),
            fax_numbers.len(),
            emails.len(),
            social_profiles.len()
        );

        ExtractionResult {
            phone_numbers,
            fax_numbers,
            emails,
            social_profiles,
        }
    }

    fn extract_emails(&self, document: &str) -> Vec<String> {
        let mut emails = Vec::new();
        let mut seen = HashSet::new();

        for m in self.email_regex.find_iter(document) {
            // De-dup key is the lowercased form; the output keeps the
            // original casing of the first occurrence.
            let canon = m.as_str().to_lowercase();
            if is_repeating_chars(&canon) || !seen.insert(canon) {
                continue;
            }
            emails.push(m.as_str().to_string());
        }

        emails
    }

    fn extract_phones_and_faxes(&self, document: &str) -> (Vec<String>, Vec<String>) {
        let mut phones = Vec::new();
        let mut faxes = Vec::new();
        let mut seen_digits = HashSet::new();

        for m in self.phone_regex.find_iter(document) {
            let raw = m.as_str().trim();
            let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

            if digits.len() < 10 || is_repeating_chars(&digits) {
                continue;
            }
            // Shared across both categories: the first classification of a
            // digit string wins, later sightings are dropped entirely.
            if !seen_digits.insert(digits) {
                continue;
            }

            let context = context_window(document, m.start()).to_lowercase();
            if self.fax_hint_regex.is_match(&context) {
                faxes.push(raw.to_string());
            } else {
                phones.push(raw.to_string());
            }
        }

        (phones, faxes)
    }

    fn extract_social_profiles(&self, document: &str) -> Vec<String> {
        let mut socials = Vec::new();
        let mut seen = HashSet::new();

        for m in self.social_regex.find_iter(document) {
            let link = m.as_str();
            // Exact-string de-dup here, no canonicalization.
            if is_repeating_chars(link) || !seen.insert(link.to_string()) {
                continue;
            }
            socials.push(link.to_string());
        }

        socials
    }
}

/// The up-to-60-character slice of text immediately preceding a match,
/// clamped to the start of the document.
fn context_window(document: &str, start: usize) -> &str {
    let lo = document[..start]
        .char_indices()
        .rev()
        .nth(FAX_CONTEXT_WINDOW - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &document[lo..start]
}

/// Anti-noise guard: fold to lowercase, drop everything outside ASCII
/// `[0-9a-z]`, and flag strings whose remainder is one character repeated.
/// Catches placeholder artifacts the patterns coincidentally accept.
fn is_repeating_chars(s: &str) -> bool {
    let mut kept = s
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_digit() || c.is_ascii_lowercase());

    match kept.next() {
        Some(first) => kept.all(|c| c == first),
        None => false,
    }
}
