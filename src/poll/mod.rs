//! Poll catalog
//!
//! Two-option polls that can be created, voted on once per user, closed by
//! their owner and tallied. Driven from the `pondus poll` subcommands.

pub mod model;
pub mod service;
pub mod validate;

pub use model::{
    ListQuery, MediaType, NewOption, NewPoll, OptionResult, Poll, PollFilter, PollPage,
    PollResults, SortOrder, Vote, VotingOption,
};
pub use service::{PollCatalog, PollService};
