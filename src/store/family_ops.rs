use super::{DashboardStore, FetchStatus, RequestToken, Settled};
use crate::error::DashboardResult;
use crate::model::{Activity, ActivityRecord, CompletionState, FamilyMember, Id, MemberRecord};

const MEMBERS_ERROR: &str = "Failed to fetch family members";
const ACTIVITIES_ERROR: &str = "Failed to fetch activities";
const TOGGLE_ERROR: &str = "Failed to update activity";

/// An optimistic toggle awaiting the backend's answer.
#[derive(Debug, Clone)]
pub struct PendingToggle {
    activity_id: Id<Activity>,
    previous: CompletionState,
    optimistic: CompletionState,
}

impl PendingToggle {
    pub fn activity_id(&self) -> &Id<Activity> {
        &self.activity_id
    }

    /// Whether the toggle marked the activity completed (POST `/complete`)
    /// or reopened it (POST `/undo`).
    pub fn completes(&self) -> bool {
        self.optimistic.is_completed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// No activity with that id; nothing was sent.
    NotFound,
    Confirmed { is_completed: bool },
    RolledBack,
}

impl DashboardStore {
    /// Members first: activities are attributed to members already in state.
    pub fn initialize_data(&mut self) {
        self.fetch_family_members();
        self.fetch_activities();
    }

    // ---- members ----

    pub fn fetch_family_members(&mut self) -> Settled {
        let token = self.begin_members_fetch();
        let result = self.family_api.list_members();
        self.apply_members(token, result)
    }

    pub fn begin_members_fetch(&mut self) -> RequestToken {
        self.members_status = FetchStatus::Loading;
        self.member_requests.issue()
    }

    /// Replaces the member list wholesale. On failure the list is emptied.
    pub fn apply_members(
        &mut self,
        token: RequestToken,
        result: DashboardResult<Vec<MemberRecord>>,
    ) -> Settled {
        if self.member_requests.settle(token) == Settled::Superseded {
            log::debug!("Discarding superseded family member response #{}", token.value());
            return Settled::Superseded;
        }

        match result {
            Ok(records) => {
                self.members = records.into_iter().map(FamilyMember::from_record).collect();
                log::info!("Loaded {} family members", self.members.len());
                self.members_status = FetchStatus::Ready;
            }
            Err(e) => {
                log::warn!("Family members unavailable, list will be empty: {}", e);
                self.members.clear();
                self.members_status = FetchStatus::Failed(MEMBERS_ERROR.into());
            }
        }
        Settled::Applied
    }

    // ---- activities ----

    pub fn fetch_activities(&mut self) -> Settled {
        let token = self.begin_activities_fetch();
        let result = self.family_api.list_activities();
        self.apply_activities(token, result)
    }

    pub fn begin_activities_fetch(&mut self) -> RequestToken {
        self.activities_status = FetchStatus::Loading;
        self.activity_requests.issue()
    }

    /// Clears every member's activities, then grafts each record onto the
    /// member it is assigned to. Records for unknown members are dropped.
    /// A failed fetch leaves all lists empty.
    pub fn apply_activities(
        &mut self,
        token: RequestToken,
        result: DashboardResult<Vec<ActivityRecord>>,
    ) -> Settled {
        if self.activity_requests.settle(token) == Settled::Superseded {
            log::debug!("Discarding superseded activities response #{}", token.value());
            return Settled::Superseded;
        }

        for member in &mut self.members {
            member.activities.clear();
        }

        match result {
            Ok(records) => {
                let total = records.len();
                let mut dropped = 0usize;
                for record in records {
                    match self.members.iter_mut().find(|m| m.member_id == record.assigned_to) {
                        Some(member) => member.activities.push(Activity::from_record(record)),
                        None => {
                            log::debug!(
                                "Dropping activity {} assigned to unknown member {}",
                                record.activity_id,
                                record.assigned_to
                            );
                            dropped += 1;
                        }
                    }
                }
                log::info!("Loaded {} activities ({} unassigned)", total - dropped, dropped);
                self.activities_status = FetchStatus::Ready;
            }
            Err(e) => {
                log::warn!("Activities unavailable, lists cleared: {}", e);
                self.activities_status = FetchStatus::Failed(ACTIVITIES_ERROR.into());
            }
        }
        Settled::Applied
    }

    // ---- toggle ----

    /// Flips an activity locally, confirms with the backend, and rolls the
    /// activity back if the backend refuses.
    pub fn toggle_activity(&mut self, activity_id: &Id<Activity>) -> ToggleOutcome {
        let pending = match self.begin_toggle(activity_id) {
            Some(p) => p,
            None => return ToggleOutcome::NotFound,
        };

        let result = if pending.completes() {
            self.family_api.complete_activity(pending.activity_id())
        } else {
            self.family_api.undo_activity(pending.activity_id())
        };
        self.finish_toggle(pending, result)
    }

    /// Applies the optimistic change. `None` if no activity has that id.
    pub fn begin_toggle(&mut self, activity_id: &Id<Activity>) -> Option<PendingToggle> {
        let activity = match self.find_activity_mut(activity_id) {
            Some(a) => a,
            None => {
                log::debug!("Toggle ignored, no activity {}", activity_id);
                return None;
            }
        };

        let previous = activity.completion_state();
        activity.toggle_completion();
        let optimistic = activity.completion_state();

        self.toggle_status = FetchStatus::Loading;
        Some(PendingToggle {
            activity_id: activity_id.clone(),
            previous,
            optimistic,
        })
    }

    /// Confirms or rolls back. Rollback restores the whole pre-toggle state,
    /// but only if the activity still shows the optimistic state; a refetch
    /// in between already brought server truth.
    pub fn finish_toggle(&mut self, pending: PendingToggle, result: DashboardResult<()>) -> ToggleOutcome {
        match result {
            Ok(()) => {
                log::debug!("Activity {} confirmed (completed: {})", pending.activity_id, pending.completes());
                self.toggle_status = FetchStatus::Ready;
                ToggleOutcome::Confirmed {
                    is_completed: pending.completes(),
                }
            }
            Err(e) => {
                log::error!("Error toggling activity {}: {}", pending.activity_id, e);
                if let Some(activity) = self.find_activity_mut(&pending.activity_id) {
                    if activity.completion_state() == pending.optimistic {
                        activity.restore(pending.previous);
                    }
                }
                self.toggle_status = FetchStatus::Failed(TOGGLE_ERROR.into());
                ToggleOutcome::RolledBack
            }
        }
    }
}
