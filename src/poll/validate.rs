//! Poll input validation

use std::sync::OnceLock;

use regex::Regex;

use super::model::{MediaType, NewOption, NewPoll};
use crate::{PondusError, Result};

const MAX_QUESTION_LEN: usize = 255;

/// Option that passed validation, not yet assigned an id
#[derive(Debug, Clone, PartialEq)]
pub struct ValidOption {
    pub media_type: MediaType,
    pub media_url: String,
    pub description: String,
}

/// Poll that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPoll {
    pub question: String,
    pub options: [ValidOption; 2],
}

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // scheme://host[/path][?query][#fragment]
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^/?#\s]+(?P<path>[^?#\s]*)(\?[^#\s]*)?(#\S*)?$")
            .expect("static URL pattern")
    })
}

/// Path component of an absolute URL, or `None` if it is not one
pub fn url_path(url: &str) -> Option<&str> {
    url_pattern()
        .captures(url)
        .and_then(|caps| caps.name("path"))
        .map(|m| m.as_str())
}

fn check_extension(media_type: MediaType, path: &str) -> Result<()> {
    let allowed = media_type.allowed_extensions();
    if allowed.is_empty() {
        return Ok(());
    }

    let path = path.to_ascii_lowercase();
    let matches = path
        .rsplit_once('.')
        .map(|(_, ext)| allowed.contains(&ext))
        .unwrap_or(false);

    if matches {
        Ok(())
    } else {
        let label = match media_type {
            MediaType::Image => "Image",
            MediaType::Video => "Video",
            MediaType::Audio => "Audio",
            MediaType::Text => "Text",
        };
        Err(PondusError::Validation(format!(
            "{} URL must end with .{}",
            label,
            allowed.join(", .")
        )))
    }
}

fn validate_option(option: &NewOption, position: usize) -> Result<ValidOption> {
    let media_type: MediaType = option.media_type.trim().parse()?;

    let media_url = match option.media_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => {
            let path = url_path(url)
                .ok_or_else(|| PondusError::Validation(format!("Invalid media URL: {}", url)))?;
            check_extension(media_type, path)?;
            url.to_string()
        }
        _ if media_type != MediaType::Text => {
            return Err(PondusError::Validation(
                "Options must contain media_type and media_url".to_string(),
            ));
        }
        _ => String::new(),
    };

    let description = option
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Option {}", position));

    Ok(ValidOption {
        media_type,
        media_url,
        description,
    })
}

/// Check a poll request and fill in defaults
pub fn validate_poll(input: &NewPoll) -> Result<ValidPoll> {
    let question = input.question.trim();
    if question.is_empty() {
        return Err(PondusError::Validation("Question must not be empty".to_string()));
    }
    if question.chars().count() > MAX_QUESTION_LEN {
        return Err(PondusError::Validation(format!(
            "Question must be at most {} characters",
            MAX_QUESTION_LEN
        )));
    }

    Ok(ValidPoll {
        question: question.to_string(),
        options: [
            validate_option(&input.option1, 1)?,
            validate_option(&input.option2, 2)?,
        ],
    })
}
