//! Custom element tag validation.

use crate::{Error, Result};

/// Check a tag name against the custom element naming rules.
///
/// Returns a human-readable message for the first rule the tag breaks, or
/// `None` when the tag is usable.
pub fn validate_component_tag(tag: &str) -> Option<String> {
    if tag != tag.trim() {
        return Some("Tag can not contain white spaces".to_string());
    }

    if tag != tag.to_lowercase() {
        return Some("Tag can not contain upper case characters".to_string());
    }

    if tag.is_empty() {
        return Some("Received empty tag value".to_string());
    }

    if tag.contains(' ') {
        return Some(format!("\"{tag}\" tag cannot contain a space"));
    }

    if tag.contains(',') {
        return Some(format!("\"{tag}\" tag cannot be used for multiple tags"));
    }

    let invalid_chars: String = tag
        .chars()
        .filter(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        .collect();
    if !invalid_chars.is_empty() {
        return Some(format!(
            "\"{tag}\" tag contains invalid characters: {invalid_chars}"
        ));
    }

    if !tag.contains('-') {
        return Some(format!(
            "\"{tag}\" tag must contain a dash (-) to work as a valid web component"
        ));
    }

    if tag.contains("--") {
        return Some(format!(
            "\"{tag}\" tag cannot contain multiple dashes (--) next to each other"
        ));
    }

    if tag.starts_with('-') {
        return Some(format!("\"{tag}\" tag cannot start with a dash (-)"));
    }

    if tag.ends_with('-') {
        return Some(format!("\"{tag}\" tag cannot end with a dash (-)"));
    }

    None
}

/// Validate a tag name, turning a rule violation into a diagnostic.
pub fn validate_tag(tag: &str) -> Result<()> {
    match validate_component_tag(tag) {
        Some(message) => Err(Error::invalid_tag(tag, message)),
        None => Ok(()),
    }
}
