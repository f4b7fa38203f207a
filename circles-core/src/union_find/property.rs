//! Property-based tests for the size-tracking union-find.
//!
//! Each property replays a generated friendship plan and compares the
//! structure against the label-propagation reference in
//! [`crate::test_utils`].

use proptest::prelude::*;
use test_strategy::Arbitrary;

use crate::test_utils::{circle_sizes, reference_labels, suite_proptest_config};

use super::DisjointSetWithSizeStats;

const MAX_USERS: usize = 48;
const MAX_FRIENDSHIPS: usize = 96;

/// Shape of the generated friendship plan.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
enum PlanShape {
    /// Endpoints drawn uniformly.
    #[weight(3)]
    Uniform,
    /// Endpoints drawn from a small pool so repeated friendships are common.
    #[weight(2)]
    Clustered,
    /// Consecutive users befriended in order, forming long chains.
    #[weight(1)]
    Chain,
}

#[derive(Clone, Debug)]
struct FriendshipPlan {
    users: usize,
    pairs: Vec<(usize, usize)>,
}

fn plan_strategy() -> impl Strategy<Value = FriendshipPlan> {
    (any::<PlanShape>(), 1_usize..=MAX_USERS).prop_flat_map(|(shape, users)| {
        let pool = match shape {
            PlanShape::Clustered => users.min(4),
            PlanShape::Uniform | PlanShape::Chain => users,
        };
        let pairs = proptest::collection::vec((0..pool, 0..pool), 0..=MAX_FRIENDSHIPS);
        pairs.prop_map(move |raw| {
            let pairs = match shape {
                PlanShape::Chain => (1..users).map(|id| (id - 1, id)).collect(),
                PlanShape::Uniform | PlanShape::Clustered => raw,
            };
            FriendshipPlan { users, pairs }
        })
    })
}

fn replay(plan: &FriendshipPlan) -> (DisjointSetWithSizeStats, usize) {
    let mut circles = DisjointSetWithSizeStats::new(plan.users).expect("universe must be valid");
    let mut merges = 0;
    for &(left, right) in &plan.pairs {
        if circles.union(left, right).expect("ids must be in range") {
            merges += 1;
        }
    }
    (circles, merges)
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn circle_count_drops_once_per_merge(plan in plan_strategy()) {
        let (circles, merges) = replay(&plan);
        prop_assert_eq!(circles.circle_count(), plan.users - merges);
    }

    #[test]
    fn root_sizes_sum_to_universe(plan in plan_strategy()) {
        let (circles, _) = replay(&plan);
        let total: usize = circles.root_sizes().sum();
        prop_assert_eq!(total, plan.users);
        prop_assert_eq!(circles.root_sizes().count(), circles.circle_count());
    }

    #[test]
    fn statistics_match_reference(plan in plan_strategy()) {
        let (circles, _) = replay(&plan);
        let sizes = circle_sizes(&reference_labels(plan.users, &plan.pairs));
        let summary = circles.summary().expect("at least one circle exists");

        prop_assert_eq!(summary.circles, sizes.len());
        prop_assert_eq!(Some(summary.largest), sizes.last().copied());
        prop_assert_eq!(Some(summary.smallest), sizes.first().copied());
        prop_assert_eq!(summary.average, plan.users / sizes.len());
        prop_assert_eq!(circles.smallest_circle_size(), Ok(summary.smallest));
        prop_assert_eq!(circles.average_circle_size(), Ok(summary.average));
    }

    #[test]
    fn find_is_stable_and_agrees_with_reference(plan in plan_strategy()) {
        let (mut circles, _) = replay(&plan);
        let labels = reference_labels(plan.users, &plan.pairs);
        let roots: Vec<usize> = (0..plan.users)
            .map(|id| circles.find(id).expect("id must be in range"))
            .collect();

        for id in 0..plan.users {
            prop_assert_eq!(circles.find(id), Ok(roots[id]));
        }
        for a in 0..plan.users {
            for b in 0..plan.users {
                prop_assert_eq!(roots[a] == roots[b], labels[a] == labels[b]);
            }
        }
    }

    #[test]
    fn replay_order_does_not_change_statistics(plan in plan_strategy()) {
        let (mut forward, _) = replay(&plan);
        let reversed = FriendshipPlan {
            users: plan.users,
            pairs: plan.pairs.iter().rev().copied().collect(),
        };
        let (mut backward, _) = replay(&reversed);

        prop_assert_eq!(forward.summary(), backward.summary());
        for a in 0..plan.users {
            for b in 0..plan.users {
                prop_assert_eq!(forward.connected(a, b), backward.connected(a, b));
            }
        }
    }
}
