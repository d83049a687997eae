use crate::cli::context::CLIContext;

pub fn weather(ctx: &mut CLIContext, args: &str) {
    if args == "refresh" || ctx.store.weather().is_none() {
        match ctx.weather_api_key.clone() {
            Some(key) => {
                ctx.store.fetch_weather(&key);
                ctx.print_status(ctx.store.weather_status());
            }
            None => {
                println!("No weather API key. Set OPENWEATHER_API_KEY or pass --weather-key.");
                return;
            }
        }
    }

    let snapshot = match ctx.store.weather() {
        Some(s) => s,
        None => return,
    };

    let today = &snapshot.today;
    println!();
    println!("Today: {}°/{}°  {}", today.temp_max, today.temp_min, today.description);
    println!("  {}", today.summary);
    println!("  Humidity {}%  Wind {} mph", today.humidity, today.wind_speed);
    for day in &snapshot.forecast {
        println!(
            "  {:<10} {}°/{}°  {}",
            day.day_name, day.temp_max, day.temp_min, day.description
        );
    }
    println!();
}

pub fn time(ctx: &mut CLIContext) {
    ctx.store.refresh_clock();
    let clock = ctx.store.clock();
    println!("{}, {} {}, {}  {}", clock.day_name, clock.month, clock.day, clock.year, clock.time);
}

pub fn tab(ctx: &mut CLIContext, args: &str) {
    if !args.is_empty() {
        ctx.store.set_active_tab(args);
    }
    println!("Tab: {}", ctx.store.active_tab());
}
