//! Plan handler operations that resolve plans across both storage
//! representations and return display-ready types.

use super::Planner;
use crate::{
    display::PlanSummaries,
    error::{Result, WatchPlanError},
    models::{Plan, Progress},
    params::Id,
    reconcile::{self, legacy_plan, Reconciliation, LEGACY_PLAN_ID},
};

impl Planner {
    /// Resolves the active plan and reports which store it came from.
    ///
    /// Reads never write: a plan synthesized from the legacy slot is not
    /// copied into the plans store.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use watchplan_core::{PlannerBuilder, Reconciliation};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// match planner.reconcile_active().await? {
    ///     Reconciliation::FromPlansStore(plan) => println!("{}", plan.title),
    ///     Reconciliation::FromLegacy(plan) => println!("{} (legacy)", plan.title),
    ///     Reconciliation::None => println!("No active plan"),
    /// }
    /// # Result::<(), watchplan_core::WatchPlanError>::Ok(())
    /// # };
    /// ```
    pub async fn reconcile_active(&self) -> Result<Reconciliation> {
        let (store, legacy) = self.load_sources(reconcile::reconcile_needs_legacy).await?;
        Ok(reconcile::reconcile(&store, legacy.as_ref()))
    }

    /// Returns the active plan, falling back to the legacy slot.
    pub async fn get_active_plan(&self) -> Result<Option<Plan>> {
        Ok(self.reconcile_active().await?.into_plan())
    }

    /// Looks up a plan by ID, including the synthesized legacy plan.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let wants_legacy = params.id == LEGACY_PLAN_ID;
        let id = params.id.clone();
        let (store, legacy) = self
            .load_sources(move |store| wants_legacy && !store.contains(&id))
            .await?;
        if let Some(plan) = store.find(&params.id) {
            return Ok(Some(plan.clone()));
        }
        if params.id == LEGACY_PLAN_ID {
            return Ok(legacy.as_ref().and_then(legacy_plan));
        }
        Ok(None)
    }

    /// Shows the plan with the given ID, or the active plan when no ID is
    /// given.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::NotFound` when an explicit ID does not
    /// resolve.
    pub async fn show_plan(&self, params: Option<&Id>) -> Result<Option<Plan>> {
        match params {
            Some(id) => self
                .get_plan(id)
                .await?
                .map(Some)
                .ok_or_else(|| WatchPlanError::not_found(&id.id)),
            None => self.get_active_plan().await,
        }
    }

    /// Lists all plans with their derived progress.
    pub async fn list_plans_summary(&self) -> Result<PlanSummaries> {
        let (store, legacy) = self.load_sources(reconcile::listing_needs_legacy).await?;
        Ok(PlanSummaries(reconcile::listing(&store, legacy.as_ref())))
    }

    /// Computes progress for the given plan, or the active plan.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::NotFound` when the plan does not resolve.
    pub async fn plan_progress(&self, params: Option<&Id>) -> Result<(Plan, Progress)> {
        let plan = self
            .show_plan(params)
            .await?
            .ok_or_else(|| WatchPlanError::not_found("active"))?;
        let progress = plan.progress();
        Ok((plan, progress))
    }
}
