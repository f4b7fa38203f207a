//! Replay of a [`FriendshipSource`] into circle statistics.

use tracing::{instrument, warn};

use crate::{
    Result,
    source::FriendshipSource,
    union_find::{CircleSummary, DisjointSetWithSizeStats},
};

/// Outcome of replaying a [`FriendshipSource`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Analysis {
    /// Name reported by the source.
    pub data_source: String,
    /// Number of users in the universe.
    pub users: usize,
    /// Number of friendships replayed.
    pub friendships: usize,
    /// Number of friendships that joined two separate circles.
    pub merges: usize,
    /// Circle statistics after the last friendship.
    pub summary: CircleSummary,
}

/// Builds the circles for `source` and returns their statistics.
///
/// # Errors
/// Returns [`crate::CirclesError::InvalidUniverseSize`] when the source has
/// no users and [`crate::CirclesError::OutOfRange`] when a friendship names a
/// user outside the universe.
///
/// # Examples
/// ```
/// use circles_core::{Friendship, FriendshipSource, analyse};
///
/// struct Fixed(Vec<Friendship>);
///
/// impl FriendshipSource for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn user_count(&self) -> usize { 5 }
///     fn friendships(&self) -> &[Friendship] { &self.0 }
/// }
///
/// let source = Fixed(vec![Friendship::new(0, 1), Friendship::new(1, 2)]);
/// let analysis = analyse(&source)?;
/// assert_eq!(analysis.merges, 2);
/// assert_eq!(analysis.summary.circles, 3);
/// assert_eq!(analysis.summary.largest, 3);
/// # Ok::<(), circles_core::CirclesError>(())
/// ```
#[instrument(
    name = "circles.analyse",
    err,
    skip(source),
    fields(
        data_source = source.name(),
        users = source.user_count(),
        friendships = source.friendships().len(),
    ),
)]
pub fn analyse<S: FriendshipSource>(source: &S) -> Result<Analysis> {
    let mut circles = DisjointSetWithSizeStats::new(source.user_count()).inspect_err(|err| {
        warn!(data_source = source.name(), error = %err, "source has no users");
    })?;

    let friendships = source.friendships();
    let merges = circles
        .record_friendships(friendships.iter().copied())
        .inspect_err(|err| {
            warn!(
                data_source = source.name(),
                error = %err,
                "friendship replay failed"
            );
        })?;

    Ok(Analysis {
        data_source: source.name().to_owned(),
        users: circles.len(),
        friendships: friendships.len(),
        merges,
        summary: circles.summary()?,
    })
}
