use std::io::{self, Write};

use crate::model::*;
use crate::queries::member_queries;
use crate::store::{DashboardStore, FetchStatus};

pub struct CLIContext {
    pub store: DashboardStore,
    pub weather_api_key: Option<String>,
}

impl CLIContext {
    pub fn new(store: DashboardStore, weather_api_key: Option<String>) -> Self {
        Self { store, weather_api_key }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Find a member by exact id or name query. Prints why when there is no
    /// single match.
    pub fn find_member(&self, args: &str) -> Option<Id<FamilyMember>> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let members = self.store.members();
        if let Some(m) = members.iter().find(|m| m.member_id.as_str() == query) {
            return Some(m.member_id.clone());
        }

        let matches = member_queries::find_by_name(members, query);
        match matches.len() {
            0 => {
                println!("No family member found matching '{}'", query);
                None
            }
            1 => Some(matches[0].member_id.clone()),
            _ => {
                if let Some(exact) = matches.iter().find(|m| m.name.eq_ignore_ascii_case(query)) {
                    return Some(exact.member_id.clone());
                }
                println!("Multiple matches found:");
                for m in &matches {
                    println!("  {}", m.name);
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    /// Find an activity by exact id or name query.
    pub fn find_activity(&self, args: &str) -> Option<Id<Activity>> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let activity_id = Id::<Activity>::new(query);
        if self.store.find_activity(&activity_id).is_some() {
            return Some(activity_id);
        }

        let matches = member_queries::find_activities_by_name(self.store.members(), query);
        match matches.len() {
            0 => {
                println!("No activity found matching '{}'", query);
                None
            }
            1 => Some(matches[0].1.activity_id.clone()),
            _ => {
                if let Some((_, exact)) = matches.iter().find(|(_, a)| a.name.eq_ignore_ascii_case(query)) {
                    return Some(exact.activity_id.clone());
                }
                println!("Multiple matches found:");
                for (member, activity) in &matches {
                    println!("  {} ({}) [{}]", activity.name, member.name, activity.activity_id);
                }
                println!("Please be more specific, or use the id.");
                None
            }
        }
    }

    pub fn format_percentage(fraction: f64) -> String {
        format!("{:.0}%", fraction * 100.0)
    }

    pub fn checkbox(activity: &Activity) -> &'static str {
        if activity.is_completed {
            "[x]"
        } else if activity.is_overdue {
            "[!]"
        } else {
            "[ ]"
        }
    }

    /// Print why the last family load failed, if it did.
    pub fn print_family_errors(&self) {
        for message in self.store.family_errors() {
            println!("Error: {}", message);
        }
    }

    /// Print a failed status, if any.
    pub fn print_status(&self, status: &FetchStatus) {
        if let Some(message) = status.error() {
            println!("Error: {}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_fraction_as_percent() {
        assert_eq!(CLIContext::format_percentage(0.5), "50%");
        assert_eq!(CLIContext::format_percentage(0.0), "0%");
        assert_eq!(CLIContext::format_percentage(2.0 / 3.0), "67%");
    }
}
