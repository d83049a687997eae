use std::time::Duration;

use serde::de::DeserializeOwned;

use super::FamilyApi;
use crate::error::DashboardResult;
use crate::model::{Activity, ActivityRecord, Id, MemberRecord};

pub const MEMBERS_PATH: &str = "family-members";
pub const ACTIVITIES_PATH: &str = "activities";

/// `activities/{id}/complete` when completing, `activities/{id}/undo` otherwise.
pub fn completion_path(activity_id: &Id<Activity>, completes: bool) -> String {
    let action = if completes { "complete" } else { "undo" };
    format!("{}/{}/{}", ACTIVITIES_PATH, activity_id, action)
}

/// Blocking client for the household REST API.
pub struct HttpFamilyApi {
    base_url: String,
    timeout: Duration,
}

impl HttpFamilyApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> DashboardResult<T> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let body = ureq::get(&url)
            .timeout(self.timeout)
            .call()?
            .into_string()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn post_empty(&self, path: &str) -> DashboardResult<()> {
        let url = self.url(path);
        log::debug!("POST {}", url);
        ureq::post(&url)
            .set("Content-Type", "application/json")
            .timeout(self.timeout)
            .send_json(serde_json::json!({}))?;
        Ok(())
    }
}

impl FamilyApi for HttpFamilyApi {
    fn list_members(&self) -> DashboardResult<Vec<MemberRecord>> {
        self.get_json(MEMBERS_PATH)
    }

    fn list_activities(&self) -> DashboardResult<Vec<ActivityRecord>> {
        self.get_json(ACTIVITIES_PATH)
    }

    fn complete_activity(&self, activity_id: &Id<Activity>) -> DashboardResult<()> {
        self.post_empty(&completion_path(activity_id, true))
    }

    fn undo_activity(&self, activity_id: &Id<Activity>) -> DashboardResult<()> {
        self.post_empty(&completion_path(activity_id, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_double_slashes() {
        let api = HttpFamilyApi::new("http://localhost:8000/api/", Duration::from_secs(1));
        assert_eq!(api.base_url(), "http://localhost:8000/api");
        assert_eq!(api.url("family-members"), "http://localhost:8000/api/family-members");
        assert_eq!(api.url("/activities/x1/undo"), "http://localhost:8000/api/activities/x1/undo");
    }

    #[test]
    fn completion_paths_match_backend_routes() {
        let api = HttpFamilyApi::new("http://localhost:8000/api", Duration::from_secs(1));
        let id = Id::<Activity>::new("9f1c-77");
        assert_eq!(
            api.url(&completion_path(&id, true)),
            "http://localhost:8000/api/activities/9f1c-77/complete"
        );
        assert_eq!(
            api.url(&completion_path(&id, false)),
            "http://localhost:8000/api/activities/9f1c-77/undo"
        );
        assert_eq!(api.url(MEMBERS_PATH), "http://localhost:8000/api/family-members");
    }
}
