//! Seeded synthetic friendship sources for benchmarks.
//!
//! Friendships are drawn from a mix of uniform pairs and pairs local to a
//! small neighbourhood, so replay produces a realistic spread of circle
//! sizes rather than one giant component immediately.

use circles_core::{Friendship, FriendshipSource};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

/// Width of the id window used for local friendships.
const NEIGHBOURHOOD: usize = 16;

/// Configuration for [`SyntheticFriendships::generate`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of users in the universe.
    pub users: usize,
    /// Number of friendships to generate.
    pub friendships: usize,
    /// Seed for the deterministic generator.
    pub seed: u64,
}

/// Errors raised while generating synthetic friendships.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SyntheticError {
    /// The universe must contain at least one user.
    #[error("synthetic sources need at least one user")]
    ZeroUsers,
}

/// Deterministic in-memory [`FriendshipSource`].
///
/// # Examples
/// ```
/// use circles_benches::source::{SyntheticConfig, SyntheticFriendships};
/// use circles_core::FriendshipSource;
///
/// let source = SyntheticFriendships::generate(&SyntheticConfig {
///     users: 100,
///     friendships: 250,
///     seed: 7,
/// })?;
/// assert_eq!(source.user_count(), 100);
/// assert_eq!(source.friendships().len(), 250);
/// # Ok::<(), circles_benches::source::SyntheticError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticFriendships {
    users: usize,
    friendships: Vec<Friendship>,
}

impl SyntheticFriendships {
    /// Generates `config.friendships` friendships over `config.users` users.
    ///
    /// # Errors
    /// Returns [`SyntheticError::ZeroUsers`] when `config.users == 0`.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.users == 0 {
            return Err(SyntheticError::ZeroUsers);
        }
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let friendships = (0..config.friendships)
            .map(|_| draw_friendship(&mut rng, config.users))
            .collect();
        Ok(Self {
            users: config.users,
            friendships,
        })
    }
}

fn draw_friendship(rng: &mut SmallRng, users: usize) -> Friendship {
    let user1 = rng.gen_range(0..users);
    let user2 = if rng.gen_bool(0.75) {
        let offset = rng.gen_range(0..NEIGHBOURHOOD);
        user1.saturating_add(offset).min(users.saturating_sub(1))
    } else {
        rng.gen_range(0..users)
    };
    Friendship::new(user1, user2)
}

impl FriendshipSource for SyntheticFriendships {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn user_count(&self) -> usize {
        self.users
    }

    fn friendships(&self) -> &[Friendship] {
        &self.friendships
    }
}
