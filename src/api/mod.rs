pub mod backend_service;
pub mod weather_service;

pub use backend_service::HttpFamilyApi;
pub use weather_service::OpenWeatherClient;

use crate::error::DashboardResult;
use crate::model::{Activity, ActivityRecord, Id, MemberRecord, OneCallResponse};

/// The household backend. The store only talks through this trait.
pub trait FamilyApi {
    fn list_members(&self) -> DashboardResult<Vec<MemberRecord>>;
    fn list_activities(&self) -> DashboardResult<Vec<ActivityRecord>>;
    fn complete_activity(&self, activity_id: &Id<Activity>) -> DashboardResult<()>;
    fn undo_activity(&self, activity_id: &Id<Activity>) -> DashboardResult<()>;
}

/// The third-party forecast provider.
pub trait WeatherApi {
    fn one_call(&self, api_key: &str) -> DashboardResult<OneCallResponse>;
}
