//! End-to-end pipeline scenarios for the visitation engine

mod common;

use std::sync::Arc;

use common::*;
use wayfare_core::permission::nodes;
use wayfare_core::{AccessDecision, MemoryPlotStore, Settings, VisitActor, VisitError};
use wayfare_core_types::{AreaId, PlayerId, PlotId};
use wayfare_engine::resolver::StaticResolver;
use wayfare_engine::{IdentityResolver, VisitEngine, VisitOutcome};

fn default_engine(store: MemoryPlotStore, resolver: Arc<dyn IdentityResolver>) -> VisitEngine {
    engine_with(
        store,
        resolver,
        Arc::new(ScriptedGate::confirming()),
        Arc::new(ScriptedWorld::reliable()),
        Settings::default(),
    )
}

#[tokio::test]
async fn test_owner_with_visit_owned_but_not_home_is_allowed() {
    let actor = actor_with(&[nodes::VISIT_OWNED], None);
    let store = store_with_owner(actor.id(), "north", 1);
    let engine = default_engine(store, resolver_knowing("me", actor.id()));

    let outcome = engine.visit(&actor, &["me"]).await;
    assert!(outcome.is_success(), "got {outcome:?}");
}

#[tokio::test]
async fn test_unknown_token_without_page_falls_back_to_alias() {
    let actor = actor_with(&[nodes::VISIT_OTHER], None);
    let owner = PlayerId::random();
    let mut store = store_with_owner(owner, "north", 1);
    let mut plot = owned_plot(owner, "north", 5);
    plot.alias = Some("market".to_string());
    store.insert(plot);

    let engine = default_engine(store, Arc::new(StaticResolver::new()));

    // Alias exists: the fallback lands on it.
    let outcome = engine.visit(&actor, &["market"]).await;
    assert!(outcome.is_success(), "got {outcome:?}");

    // Alias does not exist: terminal no-match.
    let outcome = engine.visit(&actor, &["bazaar"]).await;
    assert_eq!(
        outcome.error(),
        Some(&VisitError::NoMatch {
            token: "bazaar".to_string()
        })
    );
}

#[tokio::test]
async fn test_unknown_token_with_page_is_unknown_player_not_alias() {
    let actor = actor_with(&[nodes::VISIT_OTHER], None);
    let owner = PlayerId::random();
    let mut store = MemoryPlotStore::new();
    let mut plot = owned_plot(owner, "north", 0);
    plot.alias = Some("market".to_string());
    store.insert(plot);

    let engine = default_engine(store, Arc::new(StaticResolver::new()));

    let outcome = engine.visit(&actor, &["market", "1"]).await;
    assert_eq!(
        outcome.error(),
        Some(&VisitError::UnknownPlayer {
            name: "market".to_string()
        })
    );
}

#[tokio::test]
async fn test_numeric_second_argument_selects_page() {
    let actor = actor_with(&[nodes::VISIT_OTHER], None);
    let bob = PlayerId::random();
    let store = store_with_owner(bob, "north", 6);
    let engine = default_engine(store, resolver_knowing("bob", bob));

    // Global insertion order: page 5 is the fifth claimed plot.
    let outcome = engine.visit(&actor, &["bob", "5"]).await;
    match outcome {
        VisitOutcome::Success(plot) => assert_eq!(plot.id, PlotId::new(4, 0)),
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_lookup_timeout_is_terminal_and_requests_no_confirmation() {
    let actor = actor_with(&[nodes::VISIT_OTHER], None);
    let owner = PlayerId::random();
    let mut store = store_with_owner(owner, "north", 1);
    let mut plot = owned_plot(owner, "north", 9);
    plot.alias = Some("slowpoke".to_string());
    store.insert(plot);

    let gate = Arc::new(ScriptedGate::confirming());
    let engine = engine_with(
        store,
        Arc::new(SlowResolver {
            delay: std::time::Duration::from_secs(60),
        }),
        gate.clone(),
        Arc::new(ScriptedWorld::reliable()),
        Settings::default(),
    );

    let outcome = engine.visit(&actor, &["slowpoke"]).await;
    assert_eq!(outcome.error(), Some(&VisitError::LookupTimeout));
    // Timeout must not fall back to the alias or register a confirmation.
    assert_eq!(gate.call_count(), 0);
}

#[tokio::test]
async fn test_untrusted_flag_blocks_visit_other_without_admin_override() {
    let actor = actor_with(&[nodes::VISIT_OTHER], None);
    let owner = PlayerId::random();
    let mut store = MemoryPlotStore::new();
    let mut plot = owned_plot(owner, "north", 0);
    plot.flags.insert(
        wayfare_core::model::UNTRUSTED_VISIT_FLAG.to_string(),
        "false".to_string(),
    );
    store.insert(plot);

    let engine = default_engine(store, resolver_knowing("owner", owner));
    let outcome = engine.visit(&actor, &["owner"]).await;
    assert_eq!(
        outcome.error(),
        Some(&VisitError::PermissionDenied {
            decision: AccessDecision::DeniedUntrusted
        })
    );
}

#[tokio::test]
async fn test_pagination_bounds_always_yield_out_of_range() {
    let actor = actor_with(&[nodes::VISIT_OTHER], None);
    let bob = PlayerId::random();
    let store = store_with_owner(bob, "north", 3);
    let engine = default_engine(store, resolver_knowing("bob", bob));

    for page in ["0", "-1", "4"] {
        let outcome = engine.visit(&actor, &["bob", page]).await;
        assert_eq!(
            outcome.error(),
            Some(&VisitError::OutOfRange { min: 1, max: 3 }),
            "page {page}"
        );
    }
}

#[tokio::test]
async fn test_cancelled_confirmation_never_reaches_the_world() {
    let actor = actor_with(&[nodes::VISIT_OTHER], None);
    let bob = PlayerId::random();
    let store = store_with_owner(bob, "north", 1);
    let world = Arc::new(ScriptedWorld::reliable());
    let engine = engine_with(
        store,
        resolver_knowing("bob", bob),
        Arc::new(ScriptedGate::cancelling()),
        world.clone(),
        Settings::default(),
    );

    let outcome = engine.visit(&actor, &["bob"]).await;
    assert_eq!(outcome.error(), Some(&VisitError::Cancelled));
    assert_eq!(world.call_count(), 0);
}

#[tokio::test]
async fn test_failed_relocation_is_reported_not_revalidated() {
    let actor = actor_with(&[nodes::VISIT_OTHER], None);
    let bob = PlayerId::random();
    let store = store_with_owner(bob, "north", 1);
    let world = Arc::new(ScriptedWorld::broken());
    let engine = engine_with(
        store,
        resolver_knowing("bob", bob),
        Arc::new(ScriptedGate::confirming()),
        world.clone(),
        Settings::default(),
    );

    let outcome = engine.visit(&actor, &["bob"]).await;
    assert_eq!(outcome.error(), Some(&VisitError::TeleportFailed));
    assert_eq!(world.call_count(), 1);
}

#[tokio::test]
async fn test_identity_with_no_plots_is_terminal() {
    let actor = actor_with(&[nodes::VISIT_OTHER], None);
    let bob = PlayerId::random();
    let engine = default_engine(MemoryPlotStore::new(), resolver_knowing("bob", bob));

    let outcome = engine.visit(&actor, &["bob"]).await;
    assert_eq!(outcome.error(), Some(&VisitError::NoPlots));
}

#[tokio::test]
async fn test_direct_coordinate_reference() {
    let actor = actor_with(&[nodes::VISIT_OTHER], None);
    let owner = PlayerId::random();
    let store = store_with_owner(owner, "north", 2);
    let engine = default_engine(store, Arc::new(StaticResolver::new()));

    let outcome = engine.visit(&actor, &["1;0"]).await;
    match outcome {
        VisitOutcome::Success(plot) => assert_eq!(plot.id, PlotId::new(1, 0)),
        other => panic!("expected success, got {other:?}"),
    }

    let outcome = engine.visit(&actor, &["9;9"]).await;
    assert_eq!(
        outcome.error(),
        Some(&VisitError::NoMatch {
            token: "9;9".to_string()
        })
    );
}

#[tokio::test]
async fn test_area_qualifier_restricts_candidates() {
    let actor = actor_with(&[nodes::VISIT_OTHER], None);
    let bob = PlayerId::random();
    let mut store = store_with_owner(bob, "north", 2);
    store.insert(owned_plot(bob, "south", 7));
    let engine = default_engine(store, resolver_knowing("bob", bob));

    // Two plots in north: page 3 is out of range even though bob owns three.
    let outcome = engine.visit(&actor, &["bob", "north", "3"]).await;
    assert_eq!(outcome.error(), Some(&VisitError::OutOfRange { min: 1, max: 2 }));

    let outcome = engine.visit(&actor, &["bob", "south", "1"]).await;
    match outcome {
        VisitOutcome::Success(plot) => assert_eq!(plot.area, AreaId::new("south")),
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn test_merged_ownership_honours_setting() {
    let actor = actor_with(&[nodes::VISIT_OTHER], None);
    let bob = PlayerId::random();
    let mut store = MemoryPlotStore::new();
    let mut plot = owned_plot(PlayerId::random(), "north", 0);
    plot.merged_owners.insert(bob);
    store.insert(plot);

    // Default settings: merge co-ownership is invisible.
    let engine = default_engine(store.clone(), resolver_knowing("bob", bob));
    let outcome = engine.visit(&actor, &["bob"]).await;
    assert_eq!(outcome.error(), Some(&VisitError::NoPlots));

    let mut settings = Settings::default();
    settings.teleport.visit_merged_owners = true;
    let engine = engine_with(
        store,
        resolver_knowing("bob", bob),
        Arc::new(ScriptedGate::confirming()),
        Arc::new(ScriptedWorld::reliable()),
        settings,
    );
    let outcome = engine.visit(&actor, &["bob"]).await;
    assert!(outcome.is_success(), "got {outcome:?}");
}

#[tokio::test]
async fn test_relocation_carries_the_visit_cause_tag() {
    let actor = actor_with(&[nodes::VISIT_OTHER], None);
    let bob = PlayerId::random();
    let store = store_with_owner(bob, "north", 1);
    let world = Arc::new(wayfare_engine::world::RecordingWorld::new());
    let engine = engine_with(
        store,
        resolver_knowing("bob", bob),
        Arc::new(ScriptedGate::confirming()),
        world.clone(),
        Settings::default(),
    );

    let outcome = engine.visit(&actor, &["bob"]).await;
    assert!(outcome.is_success(), "got {outcome:?}");

    let requests = world.requests();
    assert_eq!(requests.len(), 1);
    let (who, _, cause) = &requests[0];
    assert_eq!(*who, actor.id());
    assert_eq!(*cause, wayfare_core_types::TeleportCause::CommandVisit);
    assert!(cause.is_command());
}

#[tokio::test]
async fn test_usage_errors_for_bad_shapes() {
    let actor = actor_with(&[], None);
    let engine = default_engine(MemoryPlotStore::new(), Arc::new(StaticResolver::new()));

    let outcome = engine.visit(&actor, &[]).await;
    assert!(matches!(
        outcome.error(),
        Some(VisitError::Usage { .. })
    ));

    let outcome = engine.visit(&actor, &["a", "b", "c", "d"]).await;
    assert!(matches!(
        outcome.error(),
        Some(VisitError::Usage { .. })
    ));
}
