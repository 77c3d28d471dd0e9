use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("ponte")
        .about("Auth callback bridge between an identity provider and a native app")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("PONTE_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("provider-url")
                .long("provider-url")
                .help("Identity provider base URL, example: https://<project>.supabase.co")
                .env("PONTE_PROVIDER_URL")
                .required(true),
        )
        .arg(
            Arg::new("provider-api-key")
                .long("provider-api-key")
                .help("Identity provider public (anon) API key")
                .env("PONTE_PROVIDER_API_KEY")
                .required(true),
        )
        .arg(
            Arg::new("app-name")
                .long("app-name")
                .help("Application display name used on the pages")
                .default_value("FanApp")
                .env("PONTE_APP_NAME"),
        )
        .arg(
            Arg::new("app-scheme")
                .long("app-scheme")
                .help("Custom URL scheme that re-opens the native app")
                .default_value("fanapp")
                .env("PONTE_APP_SCHEME"),
        )
        .arg(
            Arg::new("support-email")
                .long("support-email")
                .help("Support contact shown on error pages")
                .default_value("support@fanapp.dev")
                .env("PONTE_SUPPORT_EMAIL"),
        )
        .arg(
            Arg::new("analytics-id")
                .long("analytics-id")
                .help("Analytics measurement id, example: G-XXXXXXX")
                .env("PONTE_ANALYTICS_ID"),
        )
        .arg(
            Arg::new("environment")
                .long("environment")
                .help("Deployment environment")
                .default_value("production")
                .value_parser(["production", "development"])
                .env("PONTE_ENVIRONMENT"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("PONTE_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}
