use crate::model::{Activity, FamilyMember, MemberType};

pub fn people(members: &[FamilyMember]) -> Vec<&FamilyMember> {
    by_type(members, MemberType::Person)
}

pub fn pets(members: &[FamilyMember]) -> Vec<&FamilyMember> {
    by_type(members, MemberType::Pet)
}

fn by_type(members: &[FamilyMember], member_type: MemberType) -> Vec<&FamilyMember> {
    members.iter().filter(|m| m.member_type == member_type).collect()
}

/// Case-insensitive substring match on name.
pub fn find_by_name<'a>(members: &'a [FamilyMember], query: &str) -> Vec<&'a FamilyMember> {
    let lower = query.trim().to_lowercase();
    members
        .iter()
        .filter(|m| m.name.to_lowercase().contains(&lower))
        .collect()
}

/// Activities whose name contains `query`, paired with their owner.
pub fn find_activities_by_name<'a>(
    members: &'a [FamilyMember],
    query: &str,
) -> Vec<(&'a FamilyMember, &'a Activity)> {
    let lower = query.trim().to_lowercase();
    all_activities(members)
        .filter(|(_, a)| a.name.to_lowercase().contains(&lower))
        .collect()
}

/// Overdue activities that are not yet done, in member order.
pub fn overdue_activities(members: &[FamilyMember]) -> Vec<(&FamilyMember, &Activity)> {
    all_activities(members)
        .filter(|(_, a)| a.is_overdue && !a.is_completed)
        .collect()
}

fn all_activities(members: &[FamilyMember]) -> impl Iterator<Item = (&FamilyMember, &Activity)> {
    members
        .iter()
        .flat_map(|m| m.activities.iter().map(move |a| (m, a)))
}
