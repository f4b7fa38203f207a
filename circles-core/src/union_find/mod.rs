//! Size-tracking union-find over a fixed universe of users.
//!
//! Circles are the trees of a forest stored as flat `parent` and `size`
//! vectors indexed by user id. `find` applies path halving and `union`
//! attaches the smaller tree beneath the larger one, so both run in
//! amortised near-constant time. The circle count and the largest circle
//! size are maintained incrementally; the smallest and average sizes are
//! recomputed from the roots on demand.

use tracing::debug;

use crate::error::{CirclesError, Result};
use crate::source::Friendship;

/// Snapshot of the circle statistics at one observation point.
///
/// # Examples
/// ```
/// use circles_core::DisjointSetWithSizeStats;
///
/// let mut circles = DisjointSetWithSizeStats::new(4)?;
/// circles.record_friendship(0, 1)?;
/// let summary = circles.summary()?;
/// assert_eq!(summary.circles, 3);
/// assert_eq!(summary.largest, 2);
/// assert_eq!(summary.smallest, 1);
/// assert_eq!(summary.average, 1);
/// # Ok::<(), circles_core::CirclesError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CircleSummary {
    /// Number of circles.
    pub circles: usize,
    /// Size of the largest circle.
    pub largest: usize,
    /// Size of the smallest circle.
    pub smallest: usize,
    /// Mean circle size, rounded down.
    pub average: usize,
}

/// Disjoint-set forest that keeps circle size statistics up to date.
///
/// # Examples
/// ```
/// use circles_core::DisjointSetWithSizeStats;
///
/// let mut circles = DisjointSetWithSizeStats::new(4)?;
/// circles.record_friendship(0, 1)?;
/// circles.record_friendship(2, 3)?;
/// circles.record_friendship(1, 2)?;
/// assert_eq!(circles.circle_count(), 1);
/// assert_eq!(circles.largest_circle_size(), 4);
/// assert!(circles.connected(0, 3)?);
/// # Ok::<(), circles_core::CirclesError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetWithSizeStats {
    parent: Vec<usize>,
    // Authoritative at roots only.
    size: Vec<usize>,
    circles: usize,
    largest: usize,
}

impl DisjointSetWithSizeStats {
    /// Creates a structure where each of the `users` users forms its own
    /// circle of size one.
    ///
    /// # Errors
    /// Returns [`CirclesError::InvalidUniverseSize`] when `users == 0`.
    ///
    /// # Examples
    /// ```
    /// use circles_core::{CirclesError, DisjointSetWithSizeStats};
    ///
    /// let circles = DisjointSetWithSizeStats::new(3)?;
    /// assert_eq!(circles.circle_count(), 3);
    /// assert!(matches!(
    ///     DisjointSetWithSizeStats::new(0),
    ///     Err(CirclesError::InvalidUniverseSize { got: 0 })
    /// ));
    /// # Ok::<(), CirclesError>(())
    /// ```
    pub fn new(users: usize) -> Result<Self> {
        if users == 0 {
            return Err(CirclesError::InvalidUniverseSize { got: users });
        }
        debug!(users, "initialised friendship circles");
        Ok(Self {
            parent: (0..users).collect(),
            size: vec![1; users],
            circles: users,
            largest: 1,
        })
    }

    /// Returns the number of users in the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns whether the universe is empty. Never true for a constructed
    /// structure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the root of the circle containing `id`.
    ///
    /// Every node visited on the way up is re-pointed at its grandparent,
    /// which halves the path for later lookups. Circle membership is not
    /// affected.
    ///
    /// # Errors
    /// Returns [`CirclesError::OutOfRange`] when `id >= self.len()`.
    pub fn find(&mut self, id: usize) -> Result<usize> {
        self.check(id)?;
        Ok(self.root_of(id))
    }

    /// Merges the circles containing `p` and `q`.
    ///
    /// Returns `true` when two distinct circles were merged and `false` when
    /// `p` and `q` already shared a circle. The smaller circle is attached
    /// beneath the larger one; on equal sizes `q`'s root goes beneath `p`'s.
    ///
    /// # Errors
    /// Returns [`CirclesError::OutOfRange`] when either id is outside the
    /// universe. Both ids are checked before anything is modified.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        self.check(p)?;
        self.check(q)?;
        Ok(self.merge_checked(p, q))
    }

    /// Records a friendship between `user1` and `user2`.
    ///
    /// Returns `true` when the friendship joined two previously separate
    /// circles.
    ///
    /// # Errors
    /// Returns [`CirclesError::OutOfRange`] when either user is unknown.
    ///
    /// # Examples
    /// ```
    /// use circles_core::DisjointSetWithSizeStats;
    ///
    /// let mut circles = DisjointSetWithSizeStats::new(3)?;
    /// assert!(circles.record_friendship(0, 1)?);
    /// assert!(!circles.record_friendship(1, 0)?);
    /// assert_eq!(circles.circle_count(), 2);
    /// # Ok::<(), circles_core::CirclesError>(())
    /// ```
    pub fn record_friendship(&mut self, user1: usize, user2: usize) -> Result<bool> {
        self.union(user1, user2)
    }

    /// Records each friendship in order and returns how many of them merged
    /// two circles.
    ///
    /// Every id in the batch is checked before the first merge.
    ///
    /// # Errors
    /// Returns [`CirclesError::OutOfRange`] for the first friendship naming
    /// an unknown user. No friendship from a rejected batch is recorded.
    ///
    /// # Examples
    /// ```
    /// use circles_core::{CirclesError, DisjointSetWithSizeStats, Friendship};
    ///
    /// let mut circles = DisjointSetWithSizeStats::new(4)?;
    /// let batch = [Friendship::new(0, 1), Friendship::new(2, 9)];
    /// let rejected = circles.record_friendships(batch);
    /// assert!(matches!(rejected, Err(CirclesError::OutOfRange { id: 9, .. })));
    /// assert_eq!(circles.circle_count(), 4);
    /// # Ok::<(), CirclesError>(())
    /// ```
    pub fn record_friendships<I>(&mut self, friendships: I) -> Result<usize>
    where
        I: IntoIterator<Item = Friendship>,
    {
        let friendships: Vec<Friendship> = friendships.into_iter().collect();
        for friendship in &friendships {
            self.check(friendship.user1())?;
            self.check(friendship.user2())?;
        }

        let mut merges = 0;
        for friendship in friendships {
            if self.merge_checked(friendship.user1(), friendship.user2()) {
                merges += 1;
            }
        }
        Ok(merges)
    }

    /// Returns whether `a` and `b` belong to the same circle.
    ///
    /// # Errors
    /// Returns [`CirclesError::OutOfRange`] when either id is outside the
    /// universe.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.root_of(a) == self.root_of(b))
    }

    /// Returns the size of the circle containing `id`.
    ///
    /// # Errors
    /// Returns [`CirclesError::OutOfRange`] when `id >= self.len()`.
    pub fn circle_size(&mut self, id: usize) -> Result<usize> {
        let root = self.find(id)?;
        Ok(self.size[root])
    }

    /// Returns the current number of circles.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.circles
    }

    /// Returns the largest circle size seen so far.
    #[must_use]
    pub fn largest_circle_size(&self) -> usize {
        self.largest
    }

    /// Returns the mean circle size, rounded down.
    ///
    /// Scans every user, so this is O(n).
    ///
    /// # Errors
    /// Returns [`CirclesError::DivisionUndefined`] when there are no circles.
    pub fn average_circle_size(&self) -> Result<usize> {
        let total: usize = self.root_sizes().sum();
        total
            .checked_div(self.circles)
            .ok_or(CirclesError::DivisionUndefined {
                statistic: "average",
            })
    }

    /// Returns the size of the smallest circle.
    ///
    /// Scans every user, so this is O(n).
    ///
    /// # Errors
    /// Returns [`CirclesError::DivisionUndefined`] when there are no circles.
    pub fn smallest_circle_size(&self) -> Result<usize> {
        self.root_sizes()
            .min()
            .ok_or(CirclesError::DivisionUndefined {
                statistic: "smallest",
            })
    }

    /// Computes all four statistics in a single scan.
    ///
    /// # Errors
    /// Returns [`CirclesError::DivisionUndefined`] when there are no circles.
    pub fn summary(&self) -> Result<CircleSummary> {
        let (total, smallest) = self
            .root_sizes()
            .fold((0_usize, None::<usize>), |(total, smallest), size| {
                let smallest = smallest.map_or(size, |current| current.min(size));
                (total + size, Some(smallest))
            });
        let undefined = CirclesError::DivisionUndefined { statistic: "summary" };
        let smallest = smallest.ok_or_else(|| undefined.clone())?;
        let average = total.checked_div(self.circles).ok_or(undefined)?;
        Ok(CircleSummary {
            circles: self.circles,
            largest: self.largest,
            smallest,
            average,
        })
    }

    fn check(&self, id: usize) -> Result<()> {
        if id < self.parent.len() {
            Ok(())
        } else {
            Err(CirclesError::OutOfRange {
                id,
                universe: self.parent.len(),
            })
        }
    }

    /// Merges the circles of two ids already known to be in range.
    fn merge_checked(&mut self, p: usize, q: usize) -> bool {
        let root_p = self.root_of(p);
        let root_q = self.root_of(q);
        if root_p == root_q {
            return false;
        }

        let (parent, child) =
            choose_parent_child(root_p, root_q, self.size[root_p], self.size[root_q]);
        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.circles -= 1;
        self.largest = self.largest.max(self.size[parent]);
        true
    }

    fn root_of(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            let grandparent = self.parent[self.parent[node]];
            self.parent[node] = grandparent;
            node = grandparent;
        }
        node
    }

    fn root_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.parent
            .iter()
            .zip(&self.size)
            .enumerate()
            .filter_map(|(id, (&parent, &size))| (id == parent).then_some(size))
    }
}

fn choose_parent_child(
    root_p: usize,
    root_q: usize,
    size_p: usize,
    size_q: usize,
) -> (usize, usize) {
    if size_p < size_q {
        (root_q, root_p)
    } else {
        (root_p, root_q)
    }
}

#[cfg(test)]
mod property;
