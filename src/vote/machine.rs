//! Vote state machine
//!
//! A card starts `Unvoted` and accepts exactly one vote, after which the
//! tallies are frozen for the rest of its life. There is no reset; a fresh
//! card is a fresh `VoteCard`.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info};

/// One of the two options on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteOption {
    /// First (top) option
    A,
    /// Second (bottom) option
    B,
}

impl VoteOption {
    pub const ALL: [VoteOption; 2] = [VoteOption::A, VoteOption::B];

}

/// Lifecycle phase of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unvoted,
    Voted,
}

/// Tallies and the voted flag for a single card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteState {
    pub count_a: u64,
    pub count_b: u64,
    pub has_voted: bool,
}

/// Fraction of the total held by each option
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shares {
    pub a: f64,
    pub b: f64,
}

impl Shares {
    pub fn get(&self, option: VoteOption) -> f64 {
        match option {
            VoteOption::A => self.a,
            VoteOption::B => self.b,
        }
    }
}

impl VoteState {
    /// Fresh, unvoted state with the given starting tallies
    pub fn new(count_a: u64, count_b: u64) -> Self {
        Self {
            count_a,
            count_b,
            has_voted: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.has_voted {
            Phase::Voted
        } else {
            Phase::Unvoted
        }
    }

    pub fn count(&self, option: VoteOption) -> u64 {
        match option {
            VoteOption::A => self.count_a,
            VoteOption::B => self.count_b,
        }
    }

    /// Combined tally, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        self.count_a.saturating_add(self.count_b)
    }

    /// Share of each option; both zero when nobody has voted at all
    pub fn shares(&self) -> Shares {
        if self.total() == 0 {
            return Shares { a: 0.0, b: 0.0 };
        }
        let a = self.count_a as f64 / (self.count_a as f64 + self.count_b as f64);
        Shares { a, b: 1.0 - a }
    }

    pub fn share(&self, option: VoteOption) -> f64 {
        self.shares().get(option)
    }
}

/// The only transition: `Unvoted --cast(option)--> Voted`.
///
/// Returns `None` when the guard rejects the vote (the card already voted).
pub fn transition(state: VoteState, option: VoteOption) -> Option<VoteState> {
    if state.has_voted {
        return None;
    }

    let mut next = state;
    match option {
        VoteOption::A => next.count_a = next.count_a.saturating_add(1),
        VoteOption::B => next.count_b = next.count_b.saturating_add(1),
    }
    next.has_voted = true;
    Some(next)
}

/// A mounted voting card that publishes every accepted change.
///
/// Renderers call [`VoteCard::subscribe`] and redraw whenever the receiver
/// reports a change.
#[derive(Debug)]
pub struct VoteCard {
    state: VoteState,
    updates: watch::Sender<VoteState>,
}

impl VoteCard {
    /// Mount a card with the given starting tallies
    pub fn new(count_a: u64, count_b: u64) -> Self {
        let state = VoteState::new(count_a, count_b);
        let (updates, _) = watch::channel(state);
        Self { state, updates }
    }

    pub fn state(&self) -> VoteState {
        self.state
    }

    pub fn has_voted(&self) -> bool {
        self.state.has_voted
    }

    /// Receiver that sees every accepted vote
    pub fn subscribe(&self) -> watch::Receiver<VoteState> {
        self.updates.subscribe()
    }

    /// Apply a vote. Returns `true` if the card moved to `Voted`.
    pub fn cast_vote(&mut self, option: VoteOption) -> bool {
        match transition(self.state, option) {
            Some(next) => {
                self.state = next;
                self.updates.send_replace(next);
                info!(
                    ?option,
                    count_a = next.count_a,
                    count_b = next.count_b,
                    "vote accepted"
                );
                true
            }
            None => {
                debug!(?option, "vote ignored, card already voted");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_increments_only_chosen_option() {
        let start = VoteState::new(10, 20);

        let after_a = transition(start, VoteOption::A).unwrap();
        assert_eq!(after_a, VoteState { count_a: 11, count_b: 20, has_voted: true });

        let after_b = transition(start, VoteOption::B).unwrap();
        assert_eq!(after_b, VoteState { count_a: 10, count_b: 21, has_voted: true });
    }

    #[test]
    fn test_transition_rejects_once_voted() {
        let voted = transition(VoteState::new(10, 20), VoteOption::A).unwrap();
        assert!(transition(voted, VoteOption::A).is_none());
        assert!(transition(voted, VoteOption::B).is_none());
    }

    #[test]
    fn test_counts_frozen_after_first_vote() {
        let mut card = VoteCard::new(10, 20);
        assert!(card.cast_vote(VoteOption::B));
        let frozen = card.state();

        for option in [VoteOption::A, VoteOption::B, VoteOption::A, VoteOption::B] {
            assert!(!card.cast_vote(option));
            assert_eq!(card.state(), frozen);
        }
    }

    #[test]
    fn test_phase() {
        let mut card = VoteCard::new(0, 0);
        assert_eq!(card.state().phase(), Phase::Unvoted);
        card.cast_vote(VoteOption::A);
        assert_eq!(card.state().phase(), Phase::Voted);
    }

    #[test]
    fn test_shares_sum_to_one() {
        for (a, b) in [(10, 20), (11, 20), (10, 21), (1, 0), (0, 7), (3, 3)] {
            let shares = VoteState::new(a, b).shares();
            assert!((shares.a + shares.b - 1.0).abs() < 1e-12, "{a}/{b}");
        }
    }

    #[test]
    fn test_shares_zero_total() {
        let shares = VoteState::new(0, 0).shares();
        assert_eq!(shares, Shares { a: 0.0, b: 0.0 });
    }

    #[test]
    fn test_share_values() {
        let state = VoteState::new(10, 20);
        assert!((state.share(VoteOption::A) - 1.0 / 3.0).abs() < 1e-12);
        assert!((state.share(VoteOption::B) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_subscriber_sees_accepted_vote_only() {
        let mut card = VoteCard::new(10, 20);
        let mut rx = card.subscribe();
        assert!(!rx.has_changed().unwrap());

        card.cast_vote(VoteOption::A);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), VoteState { count_a: 11, count_b: 20, has_voted: true });

        card.cast_vote(VoteOption::B);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_subscriber_wakes_on_vote() {
        let mut card = VoteCard::new(10, 20);
        let mut rx = card.subscribe();

        let waiter = tokio::spawn(async move {
            rx.changed().await.unwrap();
            *rx.borrow()
        });

        card.cast_vote(VoteOption::B);
        let seen = waiter.await.unwrap();
        assert_eq!(seen.count_b, 21);
        assert!(seen.has_voted);
    }

    #[test]
    fn test_huge_tallies_do_not_overflow() {
        let state = VoteState::new(u64::MAX - 1, 5);
        assert_eq!(state.total(), u64::MAX);

        let shares = state.shares();
        assert!(shares.a <= 1.0 && shares.b >= 0.0);
        assert!((shares.a + shares.b - 1.0).abs() < 1e-9);

        let voted = transition(VoteState::new(u64::MAX, 0), VoteOption::A).unwrap();
        assert_eq!(voted.count_a, u64::MAX);
        assert!(voted.has_voted);
    }
}
