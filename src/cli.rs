//! Command-line interface
//!
//! `pondus` with no subcommand opens the voting card. `pondus poll ...`
//! works on the local poll catalog and prints JSON.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;

use crate::config::persistence::PollStorage;
use crate::config::AppConfig;
use crate::poll::{ListQuery, NewOption, NewPoll, PollFilter, PollService, SortOrder};
use crate::Result;

#[derive(Debug, Parser)]
#[command(name = "pondus", version, about = "This-or-that voting in the terminal")]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Poll catalog file (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub polls_file: Option<PathBuf>,

    /// Act as this user instead of the configured one
    #[arg(long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the voting card (default)
    Tui,
    /// Work with the poll catalog
    Poll {
        #[command(subcommand)]
        action: PollCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum PollCommand {
    /// Create a two-option poll
    Create(CreateArgs),
    /// List polls, newest first
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
        #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
        order: OrderArg,
    },
    /// Show one poll
    Show { id: u64 },
    /// Vote on a poll
    Vote {
        id: u64,
        /// Option id as shown by `poll show`
        #[arg(long)]
        option: u64,
    },
    /// Results of a closed poll
    Results { id: u64 },
    /// Close a poll you own
    Close { id: u64 },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub question: String,
    #[arg(long = "a-type", default_value = "text")]
    pub a_type: String,
    #[arg(long = "a-url")]
    pub a_url: Option<String>,
    #[arg(long = "a-desc")]
    pub a_desc: Option<String>,
    #[arg(long = "b-type", default_value = "text")]
    pub b_type: String,
    #[arg(long = "b-url")]
    pub b_url: Option<String>,
    #[arg(long = "b-desc")]
    pub b_desc: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<FilterArg> for PollFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => PollFilter::All,
            FilterArg::Active => PollFilter::Active,
            FilterArg::Closed => PollFilter::Closed,
        }
    }
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

impl From<CreateArgs> for NewPoll {
    fn from(args: CreateArgs) -> Self {
        NewPoll {
            question: args.question,
            option1: NewOption {
                media_type: args.a_type,
                media_url: args.a_url,
                description: args.a_desc,
            },
            option2: NewOption {
                media_type: args.b_type,
                media_url: args.b_url,
                description: args.b_desc,
            },
        }
    }
}

impl Cli {
    /// Load the config named on the command line, or the standard one
    pub fn load_config(&self) -> Result<AppConfig> {
        let config = match &self.config {
            Some(path) => AppConfig::load_from(path)?,
            None => AppConfig::load()?,
        };
        Ok(match &self.user {
            Some(user) => config.with_user(user.clone()),
            None => config,
        })
    }

    pub fn poll_storage(&self) -> Result<PollStorage> {
        match &self.polls_file {
            Some(path) => Ok(PollStorage::at(path)),
            None => PollStorage::new(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Run one catalog command and return what should be printed
pub fn run_poll_command(
    action: PollCommand,
    storage: &PollStorage,
    config: &AppConfig,
) -> Result<String> {
    let mut service = PollService::new(storage.load()?, config.polls_per_page);
    let user = config.user.as_str();

    let (output, changed) = match action {
        PollCommand::Create(args) => {
            let poll = service.create_poll(&args.into(), user)?;
            (to_json(&json!({ "message": "Poll created", "poll_id": poll.id }))?, true)
        }
        PollCommand::List {
            page,
            filter,
            order,
        } => {
            let query = ListQuery {
                page,
                filter: filter.into(),
                order: order.into(),
            };
            (to_json(&service.list_polls(&query))?, false)
        }
        PollCommand::Show { id } => (to_json(service.get_poll(id)?)?, false),
        PollCommand::Vote { id, option } => {
            service.record_vote(id, option, user)?;
            (
                to_json(&json!({ "result": true, "poll_id": id, "option_id": option }))?,
                true,
            )
        }
        PollCommand::Results { id } => (to_json(&service.results(id)?)?, false),
        PollCommand::Close { id } => {
            service.close_poll(id, user)?;
            (to_json(&json!({ "message": "Poll closed", "poll_id": id }))?, true)
        }
    };

    if changed {
        storage.save(service.catalog())?;
    }
    Ok(output)
}
