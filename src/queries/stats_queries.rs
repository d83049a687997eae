use crate::model::{FamilyMember, Id, MemberType};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionStats {
    pub completed: usize,
    pub total: usize,
    /// Fraction in `[0, 1]`, 0 when there are no activities.
    pub percentage: f64,
}

impl CompletionStats {
    fn new(completed: usize, total: usize) -> Self {
        let percentage = if total > 0 {
            completed as f64 / total as f64
        } else {
            0.0
        };
        Self { completed, total, percentage }
    }
}

/// Completion over a member's current activities. Unknown members count as empty.
pub fn completion_stats(members: &[FamilyMember], member_id: &Id<FamilyMember>) -> CompletionStats {
    match members.iter().find(|m| &m.member_id == member_id) {
        Some(member) => {
            let completed = member.activities.iter().filter(|a| a.is_completed).count();
            CompletionStats::new(completed, member.activities.len())
        }
        None => CompletionStats::new(0, 0),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FamilySummary {
    pub total_members: usize,
    pub people: usize,
    pub pets: usize,
    pub total_activities: usize,
    pub completed: usize,
    /// Not completed, whether or not overdue.
    pub due: usize,
    /// Overdue and not completed.
    pub overdue: usize,
    pub completion: CompletionStats,
}

pub fn family_summary(members: &[FamilyMember]) -> FamilySummary {
    let activities: Vec<_> = members.iter().flat_map(|m| m.activities.iter()).collect();
    let completed = activities.iter().filter(|a| a.is_completed).count();
    let overdue = activities
        .iter()
        .filter(|a| a.is_overdue && !a.is_completed)
        .count();

    FamilySummary {
        total_members: members.len(),
        people: members.iter().filter(|m| m.member_type == MemberType::Person).count(),
        pets: members.iter().filter(|m| m.member_type == MemberType::Pet).count(),
        total_activities: activities.len(),
        completed,
        due: activities.len() - completed,
        overdue,
        completion: CompletionStats::new(completed, activities.len()),
    }
}
