//! Circles core library.
//!
//! Tracks friendship circles (connected components) over a fixed universe of
//! users while friendships are recorded one at a time, and answers circle
//! statistics queries at any point.
//!
//! # Examples
//! ```
//! use circles_core::DisjointSetWithSizeStats;
//!
//! let mut circles = DisjointSetWithSizeStats::new(5)?;
//! circles.record_friendship(0, 1)?;
//! circles.record_friendship(1, 2)?;
//! assert_eq!(circles.circle_count(), 3);
//! assert_eq!(circles.largest_circle_size(), 3);
//! assert_eq!(circles.smallest_circle_size()?, 1);
//! assert_eq!(circles.average_circle_size()?, 1);
//! # Ok::<(), circles_core::CirclesError>(())
//! ```

mod analysis;
mod error;
mod source;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    analysis::{Analysis, analyse},
    error::{CirclesError, CirclesErrorCode, Result},
    source::{Friendship, FriendshipSource},
    union_find::{CircleSummary, DisjointSetWithSizeStats},
};
