#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use kitchen_dashboard::api::{FamilyApi, WeatherApi};
use kitchen_dashboard::error::{DashboardError, DashboardResult};
use kitchen_dashboard::model::*;
use kitchen_dashboard::store::DashboardStore;
use serde_json::{json, Value};

/// Scripted household backend. Every call is recorded in `calls`.
#[derive(Default)]
pub struct Backend {
    pub members: Vec<MemberRecord>,
    pub activities: Vec<ActivityRecord>,
    pub fail_members: bool,
    pub fail_activities: bool,
    pub fail_posts: bool,
    pub calls: Vec<String>,
}

#[derive(Clone, Default)]
pub struct FakeFamilyApi(pub Rc<RefCell<Backend>>);

fn server_error(path: &str) -> DashboardError {
    DashboardError::Http {
        status: 500,
        url: format!("http://fake/api/{}", path),
    }
}

impl FamilyApi for FakeFamilyApi {
    fn list_members(&self) -> DashboardResult<Vec<MemberRecord>> {
        let mut b = self.0.borrow_mut();
        b.calls.push("GET family-members".into());
        if b.fail_members {
            return Err(server_error("family-members"));
        }
        Ok(b.members.clone())
    }

    fn list_activities(&self) -> DashboardResult<Vec<ActivityRecord>> {
        let mut b = self.0.borrow_mut();
        b.calls.push("GET activities".into());
        if b.fail_activities {
            return Err(DashboardError::Transport("connection refused".into()));
        }
        Ok(b.activities.clone())
    }

    fn complete_activity(&self, activity_id: &Id<Activity>) -> DashboardResult<()> {
        let mut b = self.0.borrow_mut();
        let path = format!("activities/{}/complete", activity_id);
        b.calls.push(format!("POST {}", path));
        if b.fail_posts {
            return Err(server_error(&path));
        }
        Ok(())
    }

    fn undo_activity(&self, activity_id: &Id<Activity>) -> DashboardResult<()> {
        let mut b = self.0.borrow_mut();
        let path = format!("activities/{}/undo", activity_id);
        b.calls.push(format!("POST {}", path));
        if b.fail_posts {
            return Err(server_error(&path));
        }
        Ok(())
    }
}

/// Scripted forecast provider.
#[derive(Default)]
pub struct Forecast {
    pub response: Option<Value>,
    pub fail: bool,
    pub keys_seen: Vec<String>,
}

#[derive(Clone, Default)]
pub struct FakeWeatherApi(pub Rc<RefCell<Forecast>>);

impl WeatherApi for FakeWeatherApi {
    fn one_call(&self, api_key: &str) -> DashboardResult<OneCallResponse> {
        let mut f = self.0.borrow_mut();
        f.keys_seen.push(api_key.to_string());
        if f.fail {
            return Err(DashboardError::Http {
                status: 401,
                url: "https://api.openweathermap.org/data/3.0/onecall".into(),
            });
        }
        let value = f.response.clone().unwrap_or_else(|| json!({}));
        Ok(serde_json::from_value(value)?)
    }
}

pub struct Harness {
    pub store: DashboardStore,
    pub backend: Rc<RefCell<Backend>>,
    pub forecast: Rc<RefCell<Forecast>>,
}

pub fn harness() -> Harness {
    let family = FakeFamilyApi::default();
    let weather = FakeWeatherApi::default();
    let backend = family.0.clone();
    let forecast = weather.0.clone();
    Harness {
        store: DashboardStore::new(Box::new(family), Box::new(weather)),
        backend,
        forecast,
    }
}

pub fn member(id: &str, name: &str, member_type: &str) -> MemberRecord {
    serde_json::from_value(json!({
        "member_id": id,
        "name": name,
        "member_type": member_type,
        "household_id": "default",
        "is_active": true
    }))
    .unwrap()
}

pub fn pet(id: &str, name: &str, pet_type: &str) -> MemberRecord {
    serde_json::from_value(json!({
        "member_id": id,
        "name": name,
        "member_type": "pet",
        "pet_type": pet_type,
        "is_active": true
    }))
    .unwrap()
}

pub fn activity(id: &str, name: &str, assigned_to: &str, is_completed: bool, is_overdue: bool) -> ActivityRecord {
    let status = if is_completed {
        "completed"
    } else if is_overdue {
        "overdue"
    } else {
        "due"
    };
    serde_json::from_value(json!({
        "activity_id": id,
        "name": name,
        "assigned_to": assigned_to,
        "frequency": "daily",
        "status": status,
        "is_overdue": is_overdue,
        "is_completed": is_completed,
        "category": "chore"
    }))
    .unwrap()
}

/// One Call payload with `days` daily entries starting 2025-03-07 17:00 UTC.
pub fn one_call(days: usize, max: f64) -> Value {
    let daily: Vec<Value> = (0..days)
        .map(|i| {
            json!({
                "dt": 1_741_366_800i64 + i as i64 * 86_400,
                "temp": { "max": max, "min": max - 15.0 },
                "weather": [{ "icon": "01d", "description": "clear sky", "main": "Clear" }],
                "humidity": 40,
                "wind_speed": 5.2
            })
        })
        .collect();
    json!({ "timezone": "America/New_York", "daily": daily })
}

/// Alice and her dog Sadie, with activities x1 (open) and x2 (done) for Alice
/// and s1 (overdue) for Sadie. Loaded into the store.
pub fn loaded_household() -> Harness {
    let mut h = harness();
    {
        let mut b = h.backend.borrow_mut();
        b.members = vec![member("a1", "alice", "person"), pet("d1", "Sadie", "dog")];
        b.activities = vec![
            activity("x1", "Take Out Trash", "a1", false, false),
            activity("x2", "Morning Pills", "a1", true, false),
            activity("s1", "Dog Dinner", "d1", false, true),
        ];
    }
    h.store.initialize_data();
    h.backend.borrow_mut().calls.clear();
    h
}
