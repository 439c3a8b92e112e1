//! Storage-level plan operations for the Planner.
//!
//! Each operation opens the database on a blocking thread, so callers only
//! suspend at the storage boundary.

use log::info;
use uuid::Uuid;

use super::Planner;
use crate::{
    error::{Result, WatchPlanError},
    models::{LegacyPlanData, Plan, PlanStore},
    params::{CreatePlan, Id, Reset, SetDayCompletion},
};

impl Planner {
    /// Saves a generated schedule as a new plan.
    ///
    /// The plan gets a fresh random ID. It is not made active; use
    /// [`Planner::set_active_plan`] for that.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        let plan = Plan::from_schedule(
            Uuid::new_v4().to_string(),
            &params.playlist,
            params.daily_minutes.get(),
            params.days.clone(),
        );

        let stored = plan.clone();
        self.with_database(move |db| db.insert_plan(&stored)).await?;

        info!("Created plan {} '{}'", plan.id, plan.title);
        Ok(plan)
    }

    /// Makes the plan with the given ID the active plan.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::NotFound` if no stored plan has this ID. The
    /// synthesized legacy plan cannot be activated.
    pub async fn set_active_plan(&self, params: &Id) -> Result<()> {
        let plan_id = params.id.clone();
        self.with_database(move |db| db.set_active_plan_id(&plan_id))
            .await?;

        info!("Active plan is now {}", params.id);
        Ok(())
    }

    /// Sets one day's completion flag and persists the plan.
    ///
    /// Progress is not stored; it is derived again on every read.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::NotFound` for an unknown plan and
    /// `WatchPlanError::OutOfRange` for an invalid day index.
    pub async fn set_day_completion(&self, params: &SetDayCompletion) -> Result<Plan> {
        let SetDayCompletion {
            plan_id,
            day_index,
            completed,
        } = params.clone();

        self.with_database(move |db| db.update_day_completion(&plan_id, day_index, completed))
            .await
    }

    /// Loads the plans store.
    pub async fn load_plan_store(&self) -> Result<PlanStore> {
        self.with_database(|db| db.load_plan_store()).await
    }

    /// Loads the legacy single-plan slot.
    pub async fn load_legacy(&self) -> Result<Option<LegacyPlanData>> {
        self.with_database(|db| db.load_legacy()).await
    }

    /// Loads the plans store, and the legacy slot only when `needs_legacy`
    /// says the store alone cannot answer.
    ///
    /// A legacy slot that is never needed is never parsed, so it cannot
    /// break reads that the plans store resolves.
    pub(crate) async fn load_sources<F>(
        &self,
        needs_legacy: F,
    ) -> Result<(PlanStore, Option<LegacyPlanData>)>
    where
        F: FnOnce(&PlanStore) -> bool + Send + 'static,
    {
        self.with_database(move |db| {
            let store = db.load_plan_store()?;
            let legacy = if needs_legacy(&store) {
                db.load_legacy()?
            } else {
                None
            };
            Ok((store, legacy))
        })
        .await
    }

    /// Removes every stored plan, the active pointer and the legacy slot.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::InvalidInput` unless the reset is confirmed.
    pub async fn reset(&self, params: &Reset) -> Result<()> {
        if !params.confirmed {
            return Err(WatchPlanError::invalid_input("confirm")
                .with_reason("reset deletes every plan and must be confirmed"));
        }
        self.with_database(|db| db.clear()).await?;
        info!("Storage at {} cleared", self.db_path.display());
        Ok(())
    }
}
