pub mod context;
pub mod family_commands;
pub mod weather_commands;

use crate::api::{HttpFamilyApi, OpenWeatherClient};
use crate::config::Config;
use crate::store::DashboardStore;
use context::CLIContext;

/// Build the store from `config`, load everything once, and run the
/// interactive REPL.
pub fn run(config: &Config) {
    let api_base = config.api_base_url();
    log::info!("Using backend at {}", api_base);

    let store = DashboardStore::new(
        Box::new(HttpFamilyApi::new(api_base, config.timeout)),
        Box::new(OpenWeatherClient::new(config.timeout)),
    );
    let mut ctx = CLIContext::new(store, config.weather_api_key.clone());

    println!("Kitchen Dashboard");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    ctx.store.initialize_data();
    ctx.print_family_errors();
    weather_commands::time(&mut ctx);
    family_commands::list_family(&ctx);
    println!();

    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            // Family
            "refresh" | "r" => family_commands::refresh(ctx),
            "family" | "ls" => family_commands::list_family(ctx),
            "people" => family_commands::list_people(ctx),
            "pets" => family_commands::list_pets(ctx),
            "activities" | "a" => family_commands::list_activities(ctx, args),
            "toggle" | "done" | "t" => family_commands::toggle(ctx, args),
            "stats" => family_commands::stats(ctx, args),
            "summary" => family_commands::summary(ctx),
            "overdue" => family_commands::overdue(ctx),

            // Header
            "weather" | "w" => weather_commands::weather(ctx, args),
            "time" => weather_commands::time(ctx),
            "tab" => weather_commands::tab(ctx, args),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into command and the rest of the line.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Family:
    refresh                 Reload family members and activities
    family                  List everyone with completion counts
    people                  List people
    pets                    List pets
    activities [name]       Show activities (everyone, or one member)
    toggle <activity>       Mark an activity done / not done
    stats [name]            Completion statistics
    summary                 Household totals
    overdue                 Overdue activities

  Header:
    weather [refresh]       Today and the next five days
    time                    Current date and time
    tab [name]              Show or switch the active tab

  Other:
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Names are case-insensitive and partial matches work
  - Activities can also be given by id"#);
}
