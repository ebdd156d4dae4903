//! Visitation engine
//!
//! Orchestrates one resolution attempt end to end. Stages run in strict
//! sequence (parse, resolve, query, paginate, gate, confirm, execute)
//! and each stage only starts once its predecessor's result is available.
//! The suspension points are the identity lookup (bounded by the
//! configured deadline), the confirmation wait, and the relocation
//! request. Resolutions for different actors share no mutable state.

use std::sync::Arc;

use tokio::time::timeout;
use tracing::debug;

use wayfare_core::{
    evaluate_access, Plot, PlotQuery, PlotStore, Settings, SortingStrategy, VisitActor,
    VisitError,
};
use wayfare_core_types::{AreaId, TeleportCause};

use crate::confirm::{Confirmation, ConfirmationGate};
use crate::outcome::VisitOutcome;
use crate::parse::{parse_visit_args, Target, TargetSpec};
use crate::resolver::IdentityResolver;
use crate::world::WorldService;

/// The visitation resolution engine
///
/// Holds the collaborator ports and configuration; one instance serves
/// any number of concurrent resolutions.
pub struct VisitEngine {
    store: Arc<dyn PlotStore>,
    resolver: Arc<dyn IdentityResolver>,
    confirmation: Arc<dyn ConfirmationGate>,
    world: Arc<dyn WorldService>,
    settings: Settings,
}

impl VisitEngine {
    pub fn new(
        store: Arc<dyn PlotStore>,
        resolver: Arc<dyn IdentityResolver>,
        confirmation: Arc<dyn ConfirmationGate>,
        world: Arc<dyn WorldService>,
        settings: Settings,
    ) -> Self {
        Self {
            store,
            resolver,
            confirmation,
            world,
            settings,
        }
    }

    /// Resolve and execute one visitation request
    ///
    /// Returns exactly one terminal outcome; nothing is retried.
    pub async fn visit<A>(&self, actor: &A, args: &[&str]) -> VisitOutcome
    where
        A: VisitActor + Sync + ?Sized,
    {
        let spec = match parse_visit_args(args, self.store.as_ref()) {
            Ok(spec) => spec,
            Err(err) => return err.into(),
        };
        debug!(?spec, actor = %actor.id(), "visit target parsed");

        match spec.target.clone() {
            Target::Direct(id) => {
                let Some(plot) = self.store.plot_at(&id, spec.area.as_ref()) else {
                    return VisitError::NoMatch {
                        token: id.to_string(),
                    }
                    .into();
                };
                // Direct references never take a page; the single plot is page 1.
                let query = PlotQuery::new_query().with_plot(plot);
                self.run(actor, query, None, Some(1)).await
            }
            Target::Token(token) => self.resolve_token(actor, &token, &spec).await,
        }
    }

    /// Identity path: bounded lookup, then owner query or alias fallback
    async fn resolve_token<A>(&self, actor: &A, token: &str, spec: &TargetSpec) -> VisitOutcome
    where
        A: VisitActor + Sync + ?Sized,
    {
        let lookup = timeout(self.settings.lookup_timeout(), self.resolver.resolve(token)).await;
        let resolved = match lookup {
            Err(_elapsed) => {
                debug!(token, "identity lookup exceeded deadline");
                return VisitError::LookupTimeout.into();
            }
            Ok(Err(err)) => {
                debug!(token, %err, "identity directory failed");
                return VisitError::UnknownPlayer {
                    name: token.to_string(),
                }
                .into();
            }
            Ok(Ok(resolved)) => resolved,
        };

        match resolved {
            Some(identity) => {
                let query = if self.settings.teleport.visit_merged_owners {
                    PlotQuery::new_query().owners_include(identity)
                } else {
                    PlotQuery::new_query().owned_by(identity).where_base_plot()
                };
                self.run(actor, query, spec.area.clone(), spec.page).await
            }
            // Unknown identity: an alias reading only exists when no page
            // was supplied, since alias targets never take a page there.
            None if spec.page.is_none() => {
                let query = PlotQuery::new_query().with_alias(token);
                let sort_area = actor.current_area().cloned();
                match self.run_query_stages(actor, query, sort_area, None, Some(1)) {
                    Ok(plot) => self.confirm_and_execute(actor, plot).await,
                    Err(VisitError::NoPlots) => VisitError::NoMatch {
                        token: token.to_string(),
                    }
                    .into(),
                    Err(err) => err.into(),
                }
            }
            None => VisitError::UnknownPlayer {
                name: token.to_string(),
            }
            .into(),
        }
    }

    /// Query, paginate and gate, then hand over to the confirmation step
    async fn run<A>(
        &self,
        actor: &A,
        query: PlotQuery,
        explicit_area: Option<AreaId>,
        page: Option<i64>,
    ) -> VisitOutcome
    where
        A: VisitActor + Sync + ?Sized,
    {
        match self.run_query_stages(actor, query, explicit_area.clone(), explicit_area, page) {
            Ok(plot) => self.confirm_and_execute(actor, plot).await,
            Err(err) => err.into(),
        }
    }

    /// The synchronous middle of the pipeline: build, sort, paginate, gate
    ///
    /// `restrict_area` narrows the candidate set to one area (explicit
    /// qualifier); `sort_area` only biases the ordering. Candidate order
    /// is fixed once computed; no reordering mid-pipeline.
    fn run_query_stages<A>(
        &self,
        actor: &A,
        query: PlotQuery,
        sort_area: Option<AreaId>,
        restrict_area: Option<AreaId>,
        page: Option<i64>,
    ) -> Result<Plot, VisitError>
    where
        A: VisitActor + Sync + ?Sized,
    {
        let mut query = query;
        if let Some(area) = restrict_area {
            query = query.in_area(area);
        }

        // Merged clusters would double-list otherwise.
        if query.as_list(self.store.as_ref()).len() > 1 {
            query = query.where_base_plot();
        }

        let page = page.unwrap_or(1);

        let mut relative = sort_area;
        if relative.is_none() && self.settings.teleport.per_area_visit {
            relative = actor.current_area().cloned();
        }
        query = match relative {
            Some(area) => query.with_sorting_strategy(SortingStrategy::SortByCreation(area)),
            None => query.with_sorting_strategy(SortingStrategy::SortByTemp),
        };

        let plots = query.as_list(self.store.as_ref());
        if plots.is_empty() {
            return Err(VisitError::NoPlots);
        }
        if page < 1 || page as usize > plots.len() {
            return Err(VisitError::OutOfRange {
                min: 1,
                max: plots.len(),
            });
        }
        let plot = plots[(page - 1) as usize].clone();

        let decision = evaluate_access(actor, &plot);
        if !decision.is_allowed() {
            debug!(actor = %actor.id(), plot = %plot.id, ?decision, "visit gated");
            return Err(VisitError::PermissionDenied { decision });
        }
        Ok(plot)
    }

    /// Confirmation and execution: at most one confirmation per resolution
    ///
    /// A cancelled confirmation never reaches the world service, and the
    /// relocation result is not re-validated against the gate.
    async fn confirm_and_execute<A>(&self, actor: &A, plot: Plot) -> VisitOutcome
    where
        A: VisitActor + Sync + ?Sized,
    {
        match self
            .confirmation
            .request_confirmation(actor.id(), &plot)
            .await
        {
            Confirmation::Cancelled => VisitError::Cancelled.into(),
            Confirmation::Confirmed => {
                let moved = self
                    .world
                    .relocate(actor.id(), &plot, TeleportCause::CommandVisit)
                    .await;
                if moved {
                    debug!(actor = %actor.id(), plot = %plot.id, "visit completed");
                    VisitOutcome::Success(plot)
                } else {
                    VisitError::TeleportFailed.into()
                }
            }
        }
    }
}
