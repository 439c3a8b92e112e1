//! Typed plan operations on top of the key-value storage.
//!
//! Every mutation runs as a read-modify-write inside one transaction, so a
//! failure part way through leaves both keys exactly as they were.

use log::debug;

use super::kv_queries::{read_json, write_json};
use crate::{
    error::{Result, StorageResultExt, WatchPlanError},
    models::{LegacyPlanData, Plan, PlanStore},
    reconcile::{legacy_plan, LEGACY_PLAN_ID},
};

/// Key holding the plans collection and active-plan pointer.
pub const PLANS_KEY: &str = "plansData";

/// Key holding the legacy single-plan slot.
pub const LEGACY_KEY: &str = "planData";

impl super::Database {
    /// Loads the plans store, empty if nothing has been saved yet.
    pub fn load_plan_store(&self) -> Result<PlanStore> {
        Ok(read_json(&self.connection, PLANS_KEY)?.unwrap_or_default())
    }

    /// Loads the legacy slot, if present.
    pub fn load_legacy(&self) -> Result<Option<LegacyPlanData>> {
        read_json(&self.connection, LEGACY_KEY)
    }

    /// Overwrites the legacy slot.
    pub fn save_legacy(&self, legacy: &LegacyPlanData) -> Result<()> {
        write_json(&self.connection, LEGACY_KEY, legacy)
    }

    /// Adds a new plan to the plans store without touching the active
    /// pointer.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::InvalidInput` if a plan with the same ID is
    /// already stored.
    pub fn insert_plan(&mut self, plan: &Plan) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .storage_context("Failed to begin transaction")?;

        let mut store: PlanStore = read_json(&tx, PLANS_KEY)?.unwrap_or_default();
        if store.contains(&plan.id) {
            return Err(WatchPlanError::invalid_input("id")
                .with_reason(format!("a plan with ID {} already exists", plan.id)));
        }
        store.plans.push(plan.clone());
        write_json(&tx, PLANS_KEY, &store)?;

        tx.commit().storage_context("Failed to commit transaction")?;
        debug!("Stored plan {} ({} days)", plan.id, plan.total_days);
        Ok(())
    }

    /// Points the active-plan pointer at `plan_id`.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::NotFound` if no stored plan has this ID.
    pub fn set_active_plan_id(&mut self, plan_id: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .storage_context("Failed to begin transaction")?;

        let mut store: PlanStore = read_json(&tx, PLANS_KEY)?.unwrap_or_default();
        if !store.contains(plan_id) {
            return Err(WatchPlanError::not_found(plan_id));
        }
        store.active_plan_id = Some(plan_id.to_string());
        write_json(&tx, PLANS_KEY, &store)?;

        tx.commit().storage_context("Failed to commit transaction")
    }

    /// Sets the completion flag of one day and persists the owning plan.
    ///
    /// Stored plans are updated in the plans store. The synthesized legacy
    /// plan writes back to the legacy slot.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::NotFound` for an unknown plan and
    /// `WatchPlanError::OutOfRange` for an invalid day index.
    pub fn update_day_completion(
        &mut self,
        plan_id: &str,
        day_index: usize,
        completed: bool,
    ) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .storage_context("Failed to begin transaction")?;

        let mut store: PlanStore = read_json(&tx, PLANS_KEY)?.unwrap_or_default();
        let updated = if let Some(plan) = store.find_mut(plan_id) {
            plan.set_day_completion(day_index, completed)?;
            let updated = plan.clone();
            write_json(&tx, PLANS_KEY, &store)?;
            updated
        } else if plan_id == LEGACY_PLAN_ID {
            let mut legacy: LegacyPlanData = read_json(&tx, LEGACY_KEY)?
                .ok_or_else(|| WatchPlanError::not_found(plan_id))?;
            let mut plan = legacy_plan(&legacy).ok_or_else(|| WatchPlanError::not_found(plan_id))?;
            plan.set_day_completion(day_index, completed)?;
            legacy.plan.clone_from(&plan.plan_data);
            write_json(&tx, LEGACY_KEY, &legacy)?;
            plan
        } else {
            return Err(WatchPlanError::not_found(plan_id));
        };

        tx.commit().storage_context("Failed to commit transaction")?;
        debug!(
            "Day {} of plan {} marked {}",
            day_index + 1,
            plan_id,
            if completed { "completed" } else { "not completed" }
        );
        Ok(updated)
    }
}
