//! Poll service
//!
//! All catalog operations go through [`PollService`]: creating polls,
//! listing them, recording votes, closing polls and computing results.
//! The service works on an in-memory [`PollCatalog`]; the caller decides
//! when to load and save it.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::model::{
    ListQuery, NewPoll, OptionResult, Poll, PollPage, PollResults, SortOrder, Vote, VotingOption,
};
use super::validate::validate_poll;
use crate::{PondusError, Result};

/// Everything the catalog stores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollCatalog {
    pub next_poll_id: u64,
    pub next_option_id: u64,
    pub polls: Vec<Poll>,
    pub votes: Vec<Vote>,
}

impl Default for PollCatalog {
    fn default() -> Self {
        Self {
            next_poll_id: 1,
            next_option_id: 1,
            polls: Vec::new(),
            votes: Vec::new(),
        }
    }
}

/// Poll operations over a catalog
#[derive(Debug)]
pub struct PollService {
    catalog: PollCatalog,
    per_page: usize,
}

impl PollService {
    pub fn new(catalog: PollCatalog, per_page: usize) -> Self {
        Self {
            catalog,
            per_page: per_page.max(1),
        }
    }

    pub fn catalog(&self) -> &PollCatalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> PollCatalog {
        self.catalog
    }

    /// Validate and store a new poll owned by `owner`
    pub fn create_poll(&mut self, input: &NewPoll, owner: &str) -> Result<Poll> {
        let valid = validate_poll(input)?;

        let poll_id = self.catalog.next_poll_id;
        let first_option = self.catalog.next_option_id;
        let [a, b] = valid.options;

        let poll = Poll {
            id: poll_id,
            question: valid.question,
            options: [
                VotingOption {
                    id: first_option,
                    media_type: a.media_type,
                    media_url: a.media_url,
                    description: a.description,
                },
                VotingOption {
                    id: first_option + 1,
                    media_type: b.media_type,
                    media_url: b.media_url,
                    description: b.description,
                },
            ],
            is_active: true,
            created_at: Utc::now(),
            owner: owner.to_string(),
        };

        self.catalog.next_poll_id += 1;
        self.catalog.next_option_id += 2;
        self.catalog.polls.push(poll.clone());

        info!(poll_id, owner, "poll created");
        Ok(poll)
    }

    pub fn get_poll(&self, poll_id: u64) -> Result<&Poll> {
        self.catalog
            .polls
            .iter()
            .find(|p| p.id == poll_id)
            .ok_or(PondusError::PollNotFound(poll_id))
    }

    fn get_poll_mut(&mut self, poll_id: u64) -> Result<&mut Poll> {
        self.catalog
            .polls
            .iter_mut()
            .find(|p| p.id == poll_id)
            .ok_or(PondusError::PollNotFound(poll_id))
    }

    /// One page of polls. Pages past the end come back empty.
    pub fn list_polls(&self, query: &ListQuery) -> PollPage {
        let mut matching: Vec<&Poll> = self
            .catalog
            .polls
            .iter()
            .filter(|p| query.filter.matches(p))
            .collect();

        // Ids break ties between polls created in the same instant
        matching.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        if query.order == SortOrder::Desc {
            matching.reverse();
        }

        let total_pages = matching.len().div_ceil(self.per_page);
        let page = query.page.max(1);
        let polls = matching
            .into_iter()
            .skip((page - 1) * self.per_page)
            .take(self.per_page)
            .cloned()
            .collect();

        PollPage {
            polls,
            total_pages,
            current_page: page,
        }
    }

    pub fn has_voted(&self, poll_id: u64, voter: &str) -> bool {
        self.catalog
            .votes
            .iter()
            .any(|v| v.poll_id == poll_id && v.voter == voter)
    }

    pub fn votes_for_option(&self, poll_id: u64, option_id: u64) -> usize {
        self.catalog
            .votes
            .iter()
            .filter(|v| v.poll_id == poll_id && v.option_id == option_id)
            .count()
    }

    /// Record one vote. Checks, in order: poll exists, poll active,
    /// voter has not voted, option belongs to the poll.
    pub fn record_vote(&mut self, poll_id: u64, option_id: u64, voter: &str) -> Result<()> {
        let poll = self.get_poll(poll_id)?;

        if !poll.is_active {
            return Err(PondusError::PollInactive(poll_id));
        }

        if self.has_voted(poll_id, voter) {
            warn!(poll_id, voter, "repeat vote rejected");
            return Err(PondusError::AlreadyVoted {
                poll_id,
                voter: voter.to_string(),
            });
        }

        if !poll.is_valid_option(option_id) {
            return Err(PondusError::InvalidOption { poll_id, option_id });
        }

        self.catalog.votes.push(Vote {
            poll_id,
            option_id,
            voter: voter.to_string(),
            cast_at: Utc::now(),
        });

        info!(poll_id, option_id, voter, "vote recorded");
        Ok(())
    }

    /// Close a poll. Only its owner may do this; closing twice is harmless.
    pub fn close_poll(&mut self, poll_id: u64, user: &str) -> Result<()> {
        let poll = self.get_poll_mut(poll_id)?;

        if poll.owner != user {
            return Err(PondusError::NotOwner {
                poll_id,
                user: user.to_string(),
            });
        }

        if !poll.is_active {
            debug!(poll_id, "poll already closed");
        }
        poll.is_active = false;

        info!(poll_id, "poll closed");
        Ok(())
    }

    /// Final tallies; only available once the poll is closed
    pub fn results(&self, poll_id: u64) -> Result<PollResults> {
        let poll = self.get_poll(poll_id)?;

        if poll.is_active {
            return Err(PondusError::PollStillActive(poll_id));
        }

        let counts: Vec<(u64, String, usize)> = poll
            .options
            .iter()
            .map(|o| (o.id, o.description.clone(), self.votes_for_option(poll_id, o.id)))
            .collect();

        let total_votes: usize = counts.iter().map(|(_, _, c)| c).sum();
        let results = counts
            .into_iter()
            .map(|(id, text, vote_count)| OptionResult {
                id,
                text,
                vote_count,
                percentage: if total_votes > 0 {
                    vote_count as f64 / total_votes as f64 * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        Ok(PollResults {
            id: poll.id,
            question: poll.question.clone(),
            results,
            total_votes,
        })
    }
}
