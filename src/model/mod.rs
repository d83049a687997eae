pub mod ids;
pub mod member;
pub mod activity;
pub mod weather;
pub mod clock;

// Re-exports for convenience
pub use ids::Id;
pub use member::{FamilyMember, MemberRecord, MemberType};
pub use activity::{Activity, ActivityRecord, CompletionState};
pub use weather::{ForecastDay, OneCallResponse, TodayWeather, WeatherSnapshot};
pub use clock::ClockFields;
