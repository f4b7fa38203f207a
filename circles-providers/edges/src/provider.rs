//! Edge-list backed [`FriendshipSource`].
use std::io::BufRead;

use circles_core::{Friendship, FriendshipSource};
use tracing::debug;

use crate::errors::EdgeListError;
use crate::parse::parse_edge_list;

/// Friendships loaded from an edge list.
#[derive(Clone, Debug)]
pub struct EdgeListProvider {
    name: String,
    user_count: usize,
    friendships: Vec<Friendship>,
}

impl EdgeListProvider {
    /// Creates a provider from friendships already in memory.
    ///
    /// User ids are not checked against `user_count` here; replaying the
    /// provider reports unknown users.
    ///
    /// # Examples
    /// ```
    /// use circles_core::{Friendship, FriendshipSource};
    /// use circles_providers_edges::EdgeListProvider;
    ///
    /// let provider = EdgeListProvider::new("demo", 3, vec![Friendship::new(0, 2)]);
    /// assert_eq!(provider.name(), "demo");
    /// assert_eq!(provider.user_count(), 3);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, user_count: usize, friendships: Vec<Friendship>) -> Self {
        Self {
            name: name.into(),
            user_count,
            friendships,
        }
    }

    /// Reads an edge list: the first record is the user count and every
    /// later record is a pair of user ids. Blank lines and `#` comments are
    /// skipped.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] when the input cannot be read or a record is
    /// malformed.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    ///
    /// use circles_core::FriendshipSource;
    /// use circles_providers_edges::EdgeListProvider;
    ///
    /// let input = Cursor::new("# tiny network\n5\n0 1\n1 2\n");
    /// let provider = EdgeListProvider::try_from_reader("tiny", input)?;
    /// assert_eq!(provider.user_count(), 5);
    /// assert_eq!(provider.friendships().len(), 2);
    /// # Ok::<(), circles_providers_edges::EdgeListError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, EdgeListError> {
        let parsed = parse_edge_list(reader)?;
        let provider = Self::new(name, parsed.user_count, parsed.friendships);
        debug!(
            data_source = provider.name.as_str(),
            users = provider.user_count,
            friendships = provider.friendships.len(),
            "edge list loaded"
        );
        Ok(provider)
    }
}

impl FriendshipSource for EdgeListProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn user_count(&self) -> usize {
        self.user_count
    }

    fn friendships(&self) -> &[Friendship] {
        &self.friendships
    }
}
