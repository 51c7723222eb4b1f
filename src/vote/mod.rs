//! Vote card core
//!
//! The two-option state machine, the adapters that turn taps and swipes
//! into votes, and the fill animation used once a vote is in. Nothing in
//! here knows about the terminal.

pub mod animation;
pub mod gesture;
pub mod machine;

pub use animation::{FillAnimation, DEFAULT_FILL_DURATION};
pub use gesture::{DragOutcome, DragTracker, GestureMapper, InputEvent, Region, SWIPE_THRESHOLD};
pub use machine::{transition, Phase, Shares, VoteCard, VoteOption, VoteState};
