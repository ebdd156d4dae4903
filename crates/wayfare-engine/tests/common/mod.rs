use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{oneshot, Mutex};

use wayfare_core::{Actor, GrantSet, MemoryPlotStore, Plot, Settings};
use wayfare_core_types::{AreaId, PlayerId, PlotId, TeleportCause};
use wayfare_engine::resolver::{LookupError, StaticResolver};
use wayfare_engine::{Confirmation, ConfirmationGate, IdentityResolver, VisitEngine, WorldService};

/// Build an actor holding the given global permission nodes
#[allow(dead_code)]
pub fn actor_with(nodes: &[&str], area: Option<&str>) -> Actor {
    Actor::new(
        PlayerId::random(),
        GrantSet::from_nodes(nodes.iter().copied()),
        area.map(AreaId::new),
    )
}

/// Create a plot owned by `owner` at (x, 0) in `area`
#[allow(dead_code)]
pub fn owned_plot(owner: PlayerId, area: &str, x: i32) -> Plot {
    let mut plot = Plot::new(PlotId::new(x, 0), AreaId::new(area), 0);
    plot.owner = Some(owner);
    plot
}

/// Resolver that never answers before the deadline
#[allow(dead_code)]
pub struct SlowResolver {
    pub delay: Duration,
}

#[async_trait]
impl IdentityResolver for SlowResolver {
    async fn resolve(&self, _token: &str) -> Result<Option<PlayerId>, LookupError> {
        tokio::time::sleep(self.delay).await;
        Ok(None)
    }
}

/// Gate that returns a fixed answer and counts requests
#[allow(dead_code)]
pub struct ScriptedGate {
    pub answer: Confirmation,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedGate {
    pub fn confirming() -> Self {
        Self {
            answer: Confirmation::Confirmed,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn cancelling() -> Self {
        Self {
            answer: Confirmation::Cancelled,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfirmationGate for ScriptedGate {
    async fn request_confirmation(&self, _actor: PlayerId, _plot: &Plot) -> Confirmation {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// Gate holding a single pending confirmation per process
///
/// Mimics an external UI that only remembers the latest "click to
/// confirm" prompt: a newer request silently replaces the older one, and
/// the replaced waiter observes a cancellation.
#[allow(dead_code)]
#[derive(Default)]
pub struct SingleSlotGate {
    slot: Mutex<Option<oneshot::Sender<Confirmation>>>,
}

#[allow(dead_code)]
impl SingleSlotGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the currently pending request, if any
    pub async fn answer(&self, answer: Confirmation) -> bool {
        match self.slot.lock().await.take() {
            Some(tx) => tx.send(answer).is_ok(),
            None => false,
        }
    }
}

#[async_trait]
impl ConfirmationGate for SingleSlotGate {
    async fn request_confirmation(&self, _actor: PlayerId, _plot: &Plot) -> Confirmation {
        let (tx, rx) = oneshot::channel();
        // Dropping the previous sender cancels the overwritten waiter.
        *self.slot.lock().await = Some(tx);
        rx.await.unwrap_or(Confirmation::Cancelled)
    }
}

/// World that records requests and answers with a fixed result
#[allow(dead_code)]
pub struct ScriptedWorld {
    pub succeed: bool,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedWorld {
    pub fn reliable() -> Self {
        Self {
            succeed: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn broken() -> Self {
        Self {
            succeed: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WorldService for ScriptedWorld {
    async fn relocate(&self, _actor: PlayerId, _plot: &Plot, _cause: TeleportCause) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.succeed
    }
}

/// Assemble an engine around the shared doubles
#[allow(dead_code)]
pub fn engine_with(
    store: MemoryPlotStore,
    resolver: Arc<dyn IdentityResolver>,
    gate: Arc<dyn ConfirmationGate>,
    world: Arc<dyn WorldService>,
    settings: Settings,
) -> VisitEngine {
    VisitEngine::new(Arc::new(store), resolver, gate, world, settings)
}

/// A store with one known player owning `count` plots in `area`
#[allow(dead_code)]
pub fn store_with_owner(owner: PlayerId, area: &str, count: i32) -> MemoryPlotStore {
    let mut store = MemoryPlotStore::new();
    for x in 0..count {
        store.insert(owned_plot(owner, area, x));
    }
    store
}

/// Static resolver knowing a single name
#[allow(dead_code)]
pub fn resolver_knowing(name: &str, id: PlayerId) -> Arc<dyn IdentityResolver> {
    Arc::new(StaticResolver::new().with(name, id))
}
