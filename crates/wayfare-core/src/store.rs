//! Destination store contract and in-memory implementation
//!
//! The engine only ever reads plots through [`PlotStore`]; the store owns
//! its own synchronization. [`MemoryPlotStore`] is the reference
//! implementation used by tests and single-process embedders.

use std::collections::HashMap;

use wayfare_core_types::{AreaId, PlayerId, PlotId};

use crate::model::Plot;

/// Read-only query contract over plot storage
pub trait PlotStore: Send + Sync {
    /// Plots strictly owned by the given identity
    fn plots_owned_by(&self, owner: &PlayerId) -> Vec<Plot>;

    /// Plots owned by the given identity, including merge co-ownership
    fn plots_with_merged_owner(&self, owner: &PlayerId) -> Vec<Plot>;

    /// Plots whose alias equals the token, case-sensitive
    fn plots_with_alias(&self, alias: &str) -> Vec<Plot>;

    /// A single plot by coordinate, optionally scoped to an area
    ///
    /// Without an area scope the first area containing the coordinate wins;
    /// implementations must make that choice deterministic.
    fn plot_at(&self, id: &PlotId, area: Option<&AreaId>) -> Option<Plot>;

    /// Look up an area by name
    fn find_area(&self, name: &str) -> Option<AreaId>;
}

/// In-memory plot store
///
/// HashMap-backed storage keyed by (area, coordinate). Insertion assigns
/// the global `temp_index` used by the temporal sort order.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlotStore {
    plots: HashMap<(AreaId, PlotId), Plot>,
    areas: Vec<AreaId>,
    next_temp: u64,
}

impl MemoryPlotStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an area; plots may only be inserted into known areas
    pub fn add_area(&mut self, area: AreaId) {
        if !self.areas.contains(&area) {
            self.areas.push(area);
        }
    }

    /// Insert a plot, assigning its global insertion index
    ///
    /// The plot's area is registered implicitly if unknown.
    pub fn insert(&mut self, mut plot: Plot) {
        self.add_area(plot.area.clone());
        plot.temp_index = self.next_temp;
        self.next_temp += 1;
        self.plots.insert((plot.area.clone(), plot.id), plot);
    }

    /// Number of stored plots
    pub fn len(&self) -> usize {
        self.plots.len()
    }

    /// True if the store holds no plots
    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    fn collect<F>(&self, mut keep: F) -> Vec<Plot>
    where
        F: FnMut(&Plot) -> bool,
    {
        self.plots.values().filter(|p| keep(p)).cloned().collect()
    }
}

impl PlotStore for MemoryPlotStore {
    fn plots_owned_by(&self, owner: &PlayerId) -> Vec<Plot> {
        self.collect(|p| p.owner.as_ref() == Some(owner))
    }

    fn plots_with_merged_owner(&self, owner: &PlayerId) -> Vec<Plot> {
        self.collect(|p| p.is_owner(owner))
    }

    fn plots_with_alias(&self, alias: &str) -> Vec<Plot> {
        self.collect(|p| p.alias.as_deref() == Some(alias))
    }

    fn plot_at(&self, id: &PlotId, area: Option<&AreaId>) -> Option<Plot> {
        match area {
            Some(area) => self.plots.get(&(area.clone(), *id)).cloned(),
            // Area registration order makes the unscoped lookup deterministic.
            None => self
                .areas
                .iter()
                .find_map(|a| self.plots.get(&(a.clone(), *id)))
                .cloned(),
        }
    }

    fn find_area(&self, name: &str) -> Option<AreaId> {
        self.areas.iter().find(|a| a.as_str() == name).cloned()
    }
}
