pub mod status;
mod family_ops;
mod weather_ops;

pub use family_ops::{PendingToggle, ToggleOutcome};
pub use status::{FetchStatus, RequestToken, RequestTracker, Settled};

use chrono::{DateTime, Local, TimeZone};

use crate::api::{FamilyApi, WeatherApi};
use crate::model::{Activity, ClockFields, FamilyMember, Id, WeatherSnapshot};
use crate::queries::{member_queries, stats_queries};

pub const DEFAULT_TAB: &str = "Activities";

/// The dashboard's state, kept in sync with the backend and the forecast
/// provider. Each fetch kind is fenced by a [`RequestTracker`]: `begin_*`
/// issues a token and `apply_*` writes the result only if that token is still
/// the newest.
pub struct DashboardStore {
    family_api: Box<dyn FamilyApi>,
    weather_api: Box<dyn WeatherApi>,

    clock: ClockFields,
    active_tab: String,
    members: Vec<FamilyMember>,
    weather: Option<WeatherSnapshot>,

    members_status: FetchStatus,
    activities_status: FetchStatus,
    weather_status: FetchStatus,
    toggle_status: FetchStatus,

    member_requests: RequestTracker,
    activity_requests: RequestTracker,
    weather_requests: RequestTracker,
}

impl DashboardStore {
    pub fn new(family_api: Box<dyn FamilyApi>, weather_api: Box<dyn WeatherApi>) -> Self {
        Self {
            family_api,
            weather_api,
            clock: ClockFields::default(),
            active_tab: DEFAULT_TAB.to_string(),
            members: Vec::new(),
            weather: None,
            members_status: FetchStatus::Idle,
            activities_status: FetchStatus::Idle,
            weather_status: FetchStatus::Idle,
            toggle_status: FetchStatus::Idle,
            member_requests: RequestTracker::default(),
            activity_requests: RequestTracker::default(),
            weather_requests: RequestTracker::default(),
        }
    }

    // ---- clock ----

    pub fn refresh_clock(&mut self) {
        self.refresh_clock_at(&Local::now());
    }

    pub fn refresh_clock_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        self.clock = ClockFields::from_datetime(now);
    }

    pub fn clock(&self) -> &ClockFields {
        &self.clock
    }

    // ---- tab ----

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: &str) {
        self.active_tab = tab.to_string();
    }

    // ---- family ----

    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    pub fn people(&self) -> Vec<&FamilyMember> {
        member_queries::people(&self.members)
    }

    pub fn pets(&self) -> Vec<&FamilyMember> {
        member_queries::pets(&self.members)
    }

    pub fn find_member(&self, member_id: &Id<FamilyMember>) -> Option<&FamilyMember> {
        self.members.iter().find(|m| &m.member_id == member_id)
    }

    /// First match across members in order.
    pub fn find_activity(&self, activity_id: &Id<Activity>) -> Option<&Activity> {
        self.members.iter().find_map(|m| m.find_activity(activity_id))
    }

    fn find_activity_mut(&mut self, activity_id: &Id<Activity>) -> Option<&mut Activity> {
        self.members
            .iter_mut()
            .flat_map(|m| m.activities.iter_mut())
            .find(|a| &a.activity_id == activity_id)
    }

    pub fn completion_stats(&self, member_id: &Id<FamilyMember>) -> stats_queries::CompletionStats {
        stats_queries::completion_stats(&self.members, member_id)
    }

    // ---- weather ----

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    // ---- statuses ----

    pub fn members_status(&self) -> &FetchStatus {
        &self.members_status
    }

    pub fn activities_status(&self) -> &FetchStatus {
        &self.activities_status
    }

    pub fn weather_status(&self) -> &FetchStatus {
        &self.weather_status
    }

    pub fn toggle_status(&self) -> &FetchStatus {
        &self.toggle_status
    }

    /// Messages from failed member and activity fetches, in load order.
    pub fn family_errors(&self) -> Vec<&str> {
        [&self.members_status, &self.activities_status]
            .into_iter()
            .filter_map(FetchStatus::error)
            .collect()
    }

    /// True while any family request is in flight.
    pub fn is_loading(&self) -> bool {
        self.member_requests.is_in_flight() || self.activity_requests.is_in_flight()
    }
}
