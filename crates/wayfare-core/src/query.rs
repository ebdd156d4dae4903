//! Destination query builder and deterministic sorting
//!
//! A [`PlotQuery`] describes one candidate set (by owner, merged owner,
//! alias, or a single direct reference) plus filters and a sorting
//! strategy, and is executed against a [`PlotStore`]. Executing the same
//! query twice against unchanged data yields identical ordering: every
//! sort key falls back to the plot coordinate, which is unique per area,
//! so the order is total.

use wayfare_core_types::{AreaId, PlayerId};

use crate::model::Plot;
use crate::store::PlotStore;

/// How a candidate list is ordered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortingStrategy {
    /// Creation order ascending, plots inside the given area first
    SortByCreation(AreaId),
    /// Global insertion order across all areas
    SortByTemp,
}

#[derive(Debug, Clone)]
enum QuerySource {
    /// Plots strictly owned by the identity
    OwnedBy(PlayerId),
    /// Plots owned by the identity including merge co-ownership
    OwnersInclude(PlayerId),
    /// Plots with an exact alias match
    WithAlias(String),
    /// A single already-resolved plot
    Exact(Box<Plot>),
    /// The empty query
    None,
}

/// Builder for one destination candidate query
#[derive(Debug, Clone)]
pub struct PlotQuery {
    source: QuerySource,
    base_only: bool,
    area_filter: Option<AreaId>,
    sorting: Option<SortingStrategy>,
}

impl PlotQuery {
    /// Create a new empty query
    pub fn new_query() -> Self {
        Self {
            source: QuerySource::None,
            base_only: false,
            area_filter: None,
            sorting: None,
        }
    }

    /// Select plots strictly owned by the identity
    pub fn owned_by(mut self, owner: PlayerId) -> Self {
        self.source = QuerySource::OwnedBy(owner);
        self
    }

    /// Select plots owned by the identity, including merge co-ownership
    pub fn owners_include(mut self, owner: PlayerId) -> Self {
        self.source = QuerySource::OwnersInclude(owner);
        self
    }

    /// Select plots whose alias equals the token, case-sensitive
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.source = QuerySource::WithAlias(alias.into());
        self
    }

    /// Select exactly one already-resolved plot
    pub fn with_plot(mut self, plot: Plot) -> Self {
        self.source = QuerySource::Exact(Box::new(plot));
        self
    }

    /// Restrict to base plots (canonical merge-group representatives)
    pub fn where_base_plot(mut self) -> Self {
        self.base_only = true;
        self
    }

    /// Only consider plots whose area equals the qualifier
    pub fn in_area(mut self, area: AreaId) -> Self {
        self.area_filter = Some(area);
        self
    }

    /// Set the ordering applied by `as_list`
    pub fn with_sorting_strategy(mut self, strategy: SortingStrategy) -> Self {
        self.sorting = Some(strategy);
        self
    }

    /// Execute the query and return the ordered candidate list
    pub fn as_list(&self, store: &dyn PlotStore) -> Vec<Plot> {
        let mut plots = match &self.source {
            QuerySource::OwnedBy(owner) => store.plots_owned_by(owner),
            QuerySource::OwnersInclude(owner) => store.plots_with_merged_owner(owner),
            QuerySource::WithAlias(alias) => store.plots_with_alias(alias),
            QuerySource::Exact(plot) => vec![plot.as_ref().clone()],
            QuerySource::None => Vec::new(),
        };
        if self.base_only {
            plots.retain(|p| p.base);
        }
        if let Some(area) = &self.area_filter {
            plots.retain(|p| p.area == *area);
        }
        match &self.sorting {
            Some(SortingStrategy::SortByCreation(area)) => {
                plots.sort_by(|a, b| {
                    let a_key = (a.area != *area, a.created_at, a.area.clone(), a.id);
                    let b_key = (b.area != *area, b.created_at, b.area.clone(), b.id);
                    a_key.cmp(&b_key)
                });
            }
            Some(SortingStrategy::SortByTemp) => {
                plots.sort_by(|a, b| {
                    (a.temp_index, a.area.clone(), a.id).cmp(&(b.temp_index, b.area.clone(), b.id))
                });
            }
            None => {}
        }
        plots
    }

    /// Check whether the query matches at least one plot
    pub fn any_match(&self, store: &dyn PlotStore) -> bool {
        !self.as_list(store).is_empty()
    }
}

impl Default for PlotQuery {
    fn default() -> Self {
        Self::new_query()
    }
}
