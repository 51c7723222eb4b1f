//! Poll catalog data models
//!
//! Polls always carry exactly two options. Votes reference both the poll
//! and the chosen option by id.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::PondusError;

/// Kind of media an option points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Text,
    Image,
    Video,
    Audio,
}

impl MediaType {
    pub const ALL: [MediaType; 4] = [
        MediaType::Text,
        MediaType::Image,
        MediaType::Video,
        MediaType::Audio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Text => "text",
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
        }
    }

    /// File extensions accepted for this media type's URL; empty means any
    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            MediaType::Text => &[],
            MediaType::Image => &["jpg", "jpeg", "png", "gif", "webp"],
            MediaType::Video => &["mp4", "mov", "avi", "webm"],
            MediaType::Audio => &["mp3", "wav", "ogg"],
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = PondusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaType::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                PondusError::Validation(
                    "Invalid media_type. Must be 'text', 'image', 'video', or 'audio'".to_string(),
                )
            })
    }
}

/// One of the two choices in a poll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VotingOption {
    pub id: u64,
    pub media_type: MediaType,
    pub media_url: String,
    pub description: String,
}

/// A two-option poll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: u64,
    pub question: String,
    pub options: [VotingOption; 2],
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub owner: String,
}

impl Poll {
    pub fn option(&self, option_id: u64) -> Option<&VotingOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn is_valid_option(&self, option_id: u64) -> bool {
        self.option(option_id).is_some()
    }
}

/// A recorded vote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub poll_id: u64,
    pub option_id: u64,
    pub voter: String,
    pub cast_at: DateTime<Utc>,
}

/// Unvalidated option input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewOption {
    pub media_type: String,
    pub media_url: Option<String>,
    pub description: Option<String>,
}

/// Unvalidated poll input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPoll {
    pub question: String,
    pub option1: NewOption,
    pub option2: NewOption,
}

/// Listing filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PollFilter {
    #[default]
    All,
    Active,
    Closed,
}

impl PollFilter {
    pub fn matches(&self, poll: &Poll) -> bool {
        match self {
            PollFilter::All => true,
            PollFilter::Active => poll.is_active,
            PollFilter::Closed => !poll.is_active,
        }
    }
}

/// Listing order by creation time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Listing request; pages are 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub filter: PollFilter,
    pub order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            filter: PollFilter::All,
            order: SortOrder::Desc,
        }
    }
}

/// One page of polls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollPage {
    pub polls: Vec<Poll>,
    pub total_pages: usize,
    pub current_page: usize,
}

/// Tally for one option of a closed poll
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionResult {
    pub id: u64,
    pub text: String,
    pub vote_count: usize,
    pub percentage: f64,
}

/// Final tallies of a closed poll
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollResults {
    pub id: u64,
    pub question: String,
    pub results: Vec<OptionResult>,
    pub total_votes: usize,
}
