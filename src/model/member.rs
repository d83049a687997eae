use serde::{Deserialize, Serialize};

use super::activity::Activity;
use super::ids::Id;

/// Whether a family member is a person or a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberType {
    Person,
    Pet,
}

/// A family member as returned by `GET /family-members`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    pub member_id: Id<FamilyMember>,
    pub name: String,
    pub member_type: MemberType,
    #[serde(default)]
    pub pet_type: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// A person or pet on the dashboard, with the activities assigned to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyMember {
    pub member_id: Id<FamilyMember>,
    pub name: String,
    pub member_type: MemberType,
    pub pet_type: Option<String>,
    pub is_active: bool,
    pub avatar: String,
    pub avatar_class: String,
    pub activities: Vec<Activity>,
}

impl FamilyMember {
    /// Builds the view record from a fetched member. Activities start empty
    /// and are grafted on by the activity fetch.
    pub fn from_record(record: MemberRecord) -> Self {
        let avatar = avatar_letter(&record.name);
        let avatar_class = format!("avatar-{}", record.name.to_lowercase());
        Self {
            member_id: record.member_id,
            pet_type: record.pet_type,
            name: record.name,
            member_type: record.member_type,
            is_active: record.is_active,
            avatar,
            avatar_class,
            activities: Vec::new(),
        }
    }

    pub fn is_pet(&self) -> bool {
        self.member_type == MemberType::Pet
    }

    pub fn find_activity(&self, activity_id: &Id<Activity>) -> Option<&Activity> {
        self.activities.iter().find(|a| &a.activity_id == activity_id)
    }
}

fn avatar_letter(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
