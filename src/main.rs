use kitchen_dashboard::config::Config;

fn main() {
    dotenvy::dotenv().ok();
    kitchen_dashboard::logging::init("info");

    let mut config = Config::from_env();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api" | "-a" => match args.next() {
                Some(url) => config.api_base = url,
                None => {
                    eprintln!("Error: --api requires a URL argument");
                    std::process::exit(1);
                }
            },
            "--weather-key" | "-k" => match args.next() {
                Some(key) => config.weather_api_key = Some(key),
                None => {
                    eprintln!("Error: --weather-key requires a key argument");
                    std::process::exit(1);
                }
            },
            "--help" | "-h" => {
                println!("Kitchen Dashboard");
                println!();
                println!("Usage: kitchen [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -a, --api <URL>          Backend base URL (default: $KITCHEN_API_BASE_URL or /api)");
                println!("  -k, --weather-key <KEY>  OpenWeather API key (default: $OPENWEATHER_API_KEY)");
                println!("  -h, --help               Show this help");
                println!();
                println!("Relative API paths are resolved against $KITCHEN_API_ORIGIN (default: http://localhost:8000).");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    kitchen_dashboard::cli::run(&config);
}
