//! Friendship source abstractions for the circles core.

/// An undirected friendship between two user ids.
///
/// # Examples
/// ```
/// use circles_core::Friendship;
///
/// let friendship = Friendship::new(3, 7);
/// assert_eq!(friendship.user1(), 3);
/// assert_eq!(friendship.user2(), 7);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Friendship {
    user1: usize,
    user2: usize,
}

impl Friendship {
    /// Creates a friendship between `user1` and `user2`.
    #[must_use]
    pub const fn new(user1: usize, user2: usize) -> Self {
        Self { user1, user2 }
    }

    /// Returns the first user.
    #[must_use]
    pub const fn user1(&self) -> usize {
        self.user1
    }

    /// Returns the second user.
    #[must_use]
    pub const fn user2(&self) -> usize {
        self.user2
    }
}

impl From<(usize, usize)> for Friendship {
    fn from((user1, user2): (usize, usize)) -> Self {
        Self::new(user1, user2)
    }
}

/// A named universe of users together with the friendships recorded between
/// them, in the order they should be replayed.
///
/// # Examples
/// ```
/// use circles_core::{Friendship, FriendshipSource};
///
/// struct Fixed(Vec<Friendship>);
///
/// impl FriendshipSource for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn user_count(&self) -> usize { 4 }
///     fn friendships(&self) -> &[Friendship] { &self.0 }
/// }
///
/// let source = Fixed(vec![Friendship::new(0, 1)]);
/// assert_eq!(source.friendships().len(), 1);
/// assert!(!source.is_empty());
/// ```
pub trait FriendshipSource {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the number of users in the universe.
    fn user_count(&self) -> usize;

    /// Returns the recorded friendships in replay order.
    fn friendships(&self) -> &[Friendship];

    /// Returns whether the source has no users.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.user_count() == 0
    }
}
