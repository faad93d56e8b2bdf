//! Property tests for the publish cascade.

use proptest::prelude::*;

use wiser::domain::entities::{Item, PublishedEnvironments};
use wiser::domain::services::{build_audit_log, compute_deltas};
use wiser::domain::value_objects::{Environment, Environments, ItemKind};

/// A consistent item: versions `1..=count`, each flag held by at most one of them
fn item_strategy() -> impl Strategy<Value = Item> {
    (1u32..=8).prop_flat_map(|count| {
        (Just(count), 0..=count, 0..=count, 0..=count).prop_map(|(count, live, accept, test)| {
            let versions = (1..=count).map(|version| {
                let mut published = Environments::NONE;
                for (env, holder) in [
                    (Environment::Live, live),
                    (Environment::Acceptance, accept),
                    (Environment::Test, test),
                ] {
                    if holder == version {
                        published = published.with(env);
                    }
                }
                (version, published)
            });
            Item::with_versions(ItemKind::Template, 1, versions)
        })
    })
}

fn environment_strategy() -> impl Strategy<Value = Environment> {
    prop::sample::select(Environment::ORDERED.to_vec())
}

fn holders(item: &Item, env: Environment) -> usize {
    item.versions()
        .filter(|(_, published)| published.contains(env))
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after a publish every flag has at most one holder and the
    /// published version holds the target flag.
    #[test]
    fn property_publish_keeps_one_holder_per_flag(
        mut item in item_strategy(),
        pick in any::<prop::sample::Index>(),
        env in environment_strategy(),
    ) {
        let version = pick.index(item.versions().count()) as u32 + 1;
        let before = item.published_environments();

        let deltas = compute_deltas(&before, version, env);
        prop_assert!(item.apply_deltas(&deltas).is_ok());

        for flag in Environment::ORDERED {
            prop_assert!(holders(&item, flag) <= 1);
        }
        prop_assert_eq!(item.version_in(env), Some(version));
    }

    /// PROPERTY: lower tiers move up to the published version only when they
    /// were older; higher tiers never move.
    #[test]
    fn property_cascade_is_monotonic_and_downward_only(
        mut item in item_strategy(),
        pick in any::<prop::sample::Index>(),
        env in environment_strategy(),
    ) {
        let version = pick.index(item.versions().count()) as u32 + 1;
        let before = item.published_environments();

        let deltas = compute_deltas(&before, version, env);
        item.apply_deltas(&deltas).unwrap();
        let after = item.published_environments();

        for other in Environment::ORDERED {
            let old = before.version_for(other);
            let expected = if other == env {
                version
            } else if other.rank() < env.rank() && version > old {
                version
            } else {
                old
            };
            prop_assert_eq!(after.version_for(other), expected, "environment {}", other);
        }
    }

    /// PROPERTY: publishing the same version to the same environment twice
    /// changes nothing the second time.
    #[test]
    fn property_republish_is_idempotent(
        mut item in item_strategy(),
        pick in any::<prop::sample::Index>(),
        env in environment_strategy(),
    ) {
        let version = pick.index(item.versions().count()) as u32 + 1;
        let first = compute_deltas(&item.published_environments(), version, env);
        item.apply_deltas(&first).unwrap();
        let settled = item.clone();

        let second = compute_deltas(&item.published_environments(), version, env);

        prop_assert_eq!(second.effective().count(), 0);
        item.apply_deltas(&second).unwrap();
        prop_assert_eq!(item, settled);
    }

    /// PROPERTY: the audit entry records the before pointers and names the
    /// published version for every environment it moved.
    #[test]
    fn property_audit_entry_matches_snapshots(
        mut item in item_strategy(),
        pick in any::<prop::sample::Index>(),
        env in environment_strategy(),
    ) {
        let version = pick.index(item.versions().count()) as u32 + 1;
        let before = item.published_environments();
        let deltas = compute_deltas(&before, version, env);
        let entry = build_audit_log(1, &before, &deltas);
        item.apply_deltas(&deltas).unwrap();
        let after = item.published_environments();

        for other in Environment::ORDERED {
            prop_assert_eq!(entry.old_version(other), before.version_for(other));
            let moved = before.version_for(other) != after.version_for(other);
            let expected_new = if moved { version } else { 0 };
            prop_assert_eq!(entry.new_version(other), expected_new, "environment {}", other);
        }
    }

    /// PROPERTY: the snapshot does not depend on the order versions are listed in.
    #[test]
    fn property_snapshot_ignores_input_order(item in item_strategy()) {
        let forward: Vec<_> = item.versions().collect();
        let mut backward = forward.clone();
        backward.reverse();

        prop_assert_eq!(
            PublishedEnvironments::from_version_map(forward),
            PublishedEnvironments::from_version_map(backward)
        );
    }

    /// PROPERTY: only the three exact tokens parse; nothing panics.
    #[test]
    fn property_environment_parse_never_panics(name in "(?s).{0,16}") {
        let parsed = Environment::parse(&name);
        prop_assert_eq!(parsed.is_ok(), matches!(name.as_str(), "test" | "accept" | "live"));
    }
}
