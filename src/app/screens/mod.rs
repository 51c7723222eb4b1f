//! TUI screen components
//!
//! The vote card for Home, thin placeholders for the other tabs, and the
//! navigation chrome around them.

pub mod nav;
pub mod placeholder;
pub mod vote;

pub use placeholder::PlaceholderScreen;
pub use vote::VoteScreen;
