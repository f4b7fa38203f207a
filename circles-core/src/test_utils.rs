//! Shared test utilities for `circles-core`.

use circles_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `CIRCLES_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Labels every user with the smallest id reachable through `pairs`.
///
/// Acts as a slow but obviously correct oracle for circle membership: labels
/// are propagated until a fixed point is reached.
#[must_use]
pub(crate) fn reference_labels(users: usize, pairs: &[(usize, usize)]) -> Vec<usize> {
    let mut labels: Vec<usize> = (0..users).collect();
    let mut changed = true;
    while changed {
        changed = false;
        for &(left, right) in pairs {
            let lowest = labels[left].min(labels[right]);
            for label in [left, right] {
                if labels[label] != lowest {
                    labels[label] = lowest;
                    changed = true;
                }
            }
        }
    }
    labels
}

/// Returns the sorted sizes of the circles described by `labels`.
#[must_use]
pub(crate) fn circle_sizes(labels: &[usize]) -> Vec<usize> {
    let mut counts = vec![0_usize; labels.len()];
    for &label in labels {
        counts[label] += 1;
    }
    let mut sizes: Vec<usize> = counts.into_iter().filter(|&count| count > 0).collect();
    sizes.sort_unstable();
    sizes
}
