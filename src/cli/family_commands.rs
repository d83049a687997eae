use crate::cli::context::CLIContext;
use crate::model::*;
use crate::queries::*;
use crate::store::ToggleOutcome;

pub fn refresh(ctx: &mut CLIContext) {
    ctx.store.initialize_data();
    ctx.print_family_errors();
    println!(
        "Loaded {} family members.",
        ctx.store.members().len()
    );
}

pub fn list_family(ctx: &CLIContext) {
    print_members(ctx, ctx.store.members().iter().collect(), "Family");
}

pub fn list_people(ctx: &CLIContext) {
    print_members(ctx, ctx.store.people(), "People");
}

pub fn list_pets(ctx: &CLIContext) {
    print_members(ctx, ctx.store.pets(), "Pets");
}

fn print_members(ctx: &CLIContext, members: Vec<&FamilyMember>, title: &str) {
    if members.is_empty() {
        println!("No {} loaded. Try 'refresh'.", title.to_lowercase());
        return;
    }
    println!("{} ({}):", title, members.len());
    for member in members {
        let stats = ctx.store.completion_stats(&member.member_id);
        let kind = match (&member.member_type, &member.pet_type) {
            (MemberType::Pet, Some(pet_type)) => format!(" ({})", pet_type),
            (MemberType::Pet, None) => " (pet)".to_string(),
            _ => String::new(),
        };
        println!(
            "  [{}] {}{}  {}/{} done",
            member.avatar, member.name, kind, stats.completed, stats.total
        );
    }
}

pub fn list_activities(ctx: &CLIContext, args: &str) {
    let members: Vec<&FamilyMember> = if args.is_empty() {
        ctx.store.members().iter().collect()
    } else {
        match ctx.find_member(args).and_then(|id| ctx.store.find_member(&id)) {
            Some(m) => vec![m],
            None => return,
        }
    };

    for member in members {
        println!("{}:", member.name);
        if member.activities.is_empty() {
            println!("  (no activities)");
        }
        for activity in &member.activities {
            println!(
                "  {} {}  ({}, {})",
                CLIContext::checkbox(activity),
                activity.name,
                activity.frequency,
                activity.category
            );
        }
    }
}

pub fn toggle(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: toggle <activity>");
        return;
    }
    let activity_id = match ctx.find_activity(args) {
        Some(id) => id,
        None => return,
    };

    match ctx.store.toggle_activity(&activity_id) {
        ToggleOutcome::Confirmed { is_completed: true } => println!("Marked done."),
        ToggleOutcome::Confirmed { is_completed: false } => println!("Marked not done."),
        ToggleOutcome::RolledBack => ctx.print_status(ctx.store.toggle_status()),
        ToggleOutcome::NotFound => println!("Activity is no longer loaded."),
    }
}

pub fn stats(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        for member in ctx.store.members() {
            print_stats_line(member, ctx.store.completion_stats(&member.member_id));
        }
        return;
    }
    if let Some(member) = ctx.find_member(args).and_then(|id| ctx.store.find_member(&id)) {
        print_stats_line(member, ctx.store.completion_stats(&member.member_id));
    }
}

fn print_stats_line(member: &FamilyMember, stats: stats_queries::CompletionStats) {
    println!(
        "  {:<12} {}/{} ({})",
        member.name,
        stats.completed,
        stats.total,
        CLIContext::format_percentage(stats.percentage)
    );
}

pub fn summary(ctx: &CLIContext) {
    let s = stats_queries::family_summary(ctx.store.members());
    println!();
    println!("Family members: {} ({} people, {} pets)", s.total_members, s.people, s.pets);
    println!("Activities:     {}", s.total_activities);
    println!("  Completed:    {}", s.completed);
    println!("  Due:          {}", s.due);
    println!("  Overdue:      {}", s.overdue);
    println!("Completion:     {}", CLIContext::format_percentage(s.completion.percentage));
    println!();
}

pub fn overdue(ctx: &CLIContext) {
    let overdue = member_queries::overdue_activities(ctx.store.members());
    if overdue.is_empty() {
        println!("Nothing overdue.");
        return;
    }
    println!("Overdue ({}):", overdue.len());
    for (member, activity) in overdue {
        println!("  {} - {}", member.name, activity.name);
    }
}
