//! Benchmark parameter types.

use std::fmt;

/// Parameters for a friendship replay or statistics benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct CircleBenchParams {
    /// Number of users in the universe.
    pub users: usize,
    /// Number of friendships replayed.
    pub friendships: usize,
}

impl fmt::Display for CircleBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.users, self.friendships)
    }
}
