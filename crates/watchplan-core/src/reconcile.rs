//! Resolution of the active plan across the plans store and the legacy slot.
//!
//! Two representations may hold a schedule: the plans collection with its
//! active-plan pointer, and the older single-plan slot. [`reconcile`] decides
//! which one answers for the active plan without touching either.

use log::warn;

use crate::models::{LegacyPlanData, Plan, PlanCursor, PlanStore, PlanSummary};

/// Fixed ID given to a plan synthesized from the legacy slot.
pub const LEGACY_PLAN_ID: &str = "legacy-plan";

/// Title used when the legacy slot carries no playlist title.
pub const LEGACY_FALLBACK_TITLE: &str = "Saved Plan";

/// Where the active plan came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// The active-plan pointer resolved against the plans store
    FromPlansStore(Plan),
    /// Synthesized from the legacy single-plan slot
    FromLegacy(Plan),
    /// Neither source holds a plan
    None,
}

impl Reconciliation {
    /// The resolved plan, if any.
    pub fn plan(&self) -> Option<&Plan> {
        match self {
            Self::FromPlansStore(plan) | Self::FromLegacy(plan) => Some(plan),
            Self::None => None,
        }
    }

    /// Consumes the reconciliation and returns the plan, if any.
    pub fn into_plan(self) -> Option<Plan> {
        match self {
            Self::FromPlansStore(plan) | Self::FromLegacy(plan) => Some(plan),
            Self::None => None,
        }
    }
}

/// Resolves the active plan.
///
/// The active-plan pointer wins when it names a stored plan. Otherwise a
/// non-empty legacy slot is turned into a transient plan with
/// [`LEGACY_PLAN_ID`].
pub fn reconcile(store: &PlanStore, legacy: Option<&LegacyPlanData>) -> Reconciliation {
    if let Some(plan) = store.active_plan() {
        return Reconciliation::FromPlansStore(plan.clone());
    }

    match legacy.and_then(legacy_plan) {
        Some(plan) => {
            warn!(
                "Active plan {:?} not in plans store; falling back to legacy plan data",
                store.active_plan_id
            );
            Reconciliation::FromLegacy(plan)
        }
        None => Reconciliation::None,
    }
}

/// Whether resolving the active plan has to look at the legacy slot.
pub fn reconcile_needs_legacy(store: &PlanStore) -> bool {
    store.active_plan().is_none()
}

/// Whether a listing has to look at the legacy slot.
pub fn listing_needs_legacy(store: &PlanStore) -> bool {
    store.plans.is_empty()
}

/// Builds the transient plan for a legacy slot, or `None` if the slot has no
/// schedule.
pub fn legacy_plan(legacy: &LegacyPlanData) -> Option<Plan> {
    if !legacy.has_schedule() {
        return None;
    }

    let playlist = legacy.playlist_data.as_ref();
    let title = playlist
        .map(|p| p.title.as_str())
        .filter(|title| !title.is_empty())
        .unwrap_or(LEGACY_FALLBACK_TITLE);

    Some(Plan {
        id: LEGACY_PLAN_ID.to_string(),
        title: title.to_string(),
        playlist_url: playlist.and_then(|p| p.id.clone()),
        total_videos: playlist.map_or(0, |p| p.video_count),
        total_days: legacy.plan.len() as u32,
        daily_minutes: legacy.daily_watch_time,
        plan_data: legacy.plan.clone(),
        progress: PlanCursor::default(),
        created_at: None,
    })
}

/// Plans to show in a listing.
///
/// Stored plans are listed as-is. When none are stored, a non-empty legacy
/// slot appears as a single synthesized plan so older data stays visible.
/// The legacy slot is only consulted in that case; see
/// [`listing_needs_legacy`].
pub fn listing(store: &PlanStore, legacy: Option<&LegacyPlanData>) -> Vec<PlanSummary> {
    let active = reconcile(store, legacy);
    let active_id = active.plan().map(|plan| plan.id.as_str());

    if store.plans.is_empty() {
        return legacy
            .and_then(legacy_plan)
            .map(|plan| vec![PlanSummary::from_plan(&plan, active_id)])
            .unwrap_or_default();
    }

    store
        .plans
        .iter()
        .map(|plan| PlanSummary::from_plan(plan, active_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DaySchedule, Playlist, PlannedVideoSlot};

    fn day(number: u32) -> DaySchedule {
        DaySchedule {
            day: number,
            videos: vec![PlannedVideoSlot::whole("Clip", 10)],
            total_time: 10,
            completed: false,
        }
    }

    fn stored_plan(id: &str) -> Plan {
        let playlist = Playlist {
            title: format!("Playlist {id}"),
            video_count: 1,
            ..Default::default()
        };
        Plan::from_schedule(id, &playlist, 30, vec![day(1)])
    }

    fn legacy_slot() -> LegacyPlanData {
        LegacyPlanData {
            playlist_data: Some(Playlist {
                title: "Old Playlist".to_string(),
                video_count: 2,
                ..Default::default()
            }),
            plan: vec![day(1), day(2)],
            daily_watch_time: 45,
        }
    }

    #[test]
    fn test_active_pointer_resolves_from_plans_store() {
        let store = PlanStore {
            active_plan_id: Some("a".to_string()),
            plans: vec![stored_plan("a"), stored_plan("b")],
        };

        let resolved = reconcile(&store, Some(&legacy_slot()));
        assert!(matches!(resolved, Reconciliation::FromPlansStore(ref p) if p.id == "a"));
    }

    #[test]
    fn test_dangling_pointer_falls_back_to_legacy() {
        let store = PlanStore {
            active_plan_id: Some("gone".to_string()),
            plans: vec![stored_plan("a")],
        };

        let resolved = reconcile(&store, Some(&legacy_slot()));
        let Reconciliation::FromLegacy(plan) = resolved else {
            panic!("expected legacy plan, got {resolved:?}");
        };
        assert_eq!(plan.id, LEGACY_PLAN_ID);
        assert_eq!(plan.title, "Old Playlist");
        assert_eq!(plan.total_videos, 2);
        assert_eq!(plan.total_days, 2);
        assert_eq!(plan.daily_minutes, 45);
        assert_eq!(plan.progress, PlanCursor::default());
    }

    #[test]
    fn test_empty_legacy_slot_is_ignored() {
        let legacy = LegacyPlanData {
            plan: Vec::new(),
            ..legacy_slot()
        };
        assert_eq!(
            reconcile(&PlanStore::default(), Some(&legacy)),
            Reconciliation::None
        );
        assert_eq!(reconcile(&PlanStore::default(), None), Reconciliation::None);
    }

    #[test]
    fn test_legacy_title_fallback() {
        let legacy = LegacyPlanData {
            playlist_data: None,
            ..legacy_slot()
        };
        let plan = legacy_plan(&legacy).expect("legacy plan");
        assert_eq!(plan.title, LEGACY_FALLBACK_TITLE);
        assert_eq!(plan.total_videos, 0);
    }

    #[test]
    fn test_listing_shows_legacy_only_when_store_is_empty() {
        let legacy = legacy_slot();

        let only_legacy = listing(&PlanStore::default(), Some(&legacy));
        assert_eq!(only_legacy.len(), 1);
        assert_eq!(only_legacy[0].id, LEGACY_PLAN_ID);
        assert!(only_legacy[0].active);

        let store = PlanStore {
            active_plan_id: Some("b".to_string()),
            plans: vec![stored_plan("a"), stored_plan("b")],
        };
        let stored = listing(&store, Some(&legacy));
        assert_eq!(stored.len(), 2);
        assert!(!stored[0].active);
        assert!(stored[1].active);
    }
}
