use chatcode::{ChatCodeResult, ExtraInfo, GaOptions, WidgetConfig, WidgetConfigBuilder};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Validate a chat widget configuration and print it as JSON
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON config document to start from
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Chat key issued after registration
    #[arg(long)]
    key: Option<String>,

    /// Cookie domain, e.g. ".example.com" to span sub-domains
    #[arg(long)]
    cookie_domain: Option<String>,

    #[arg(short, long)]
    language: Option<String>,

    #[arg(long)]
    charset: Option<String>,

    /// Visitor name (requires --email)
    #[arg(long, requires = "email")]
    name: Option<String>,

    /// Visitor email (requires --name)
    #[arg(long, requires = "name")]
    email: Option<String>,

    /// Extra visitor information, repeatable
    #[arg(long, value_name = "ID=LABEL=VALUE", value_parser = parse_extra)]
    extra: Vec<ExtraInfo>,

    /// Hide the "send transcript" button
    #[arg(long)]
    no_email_transcript: bool,

    /// Enable rating with the given type (advanced, simple)
    #[arg(long, value_name = "TYPE")]
    rating: Option<String>,

    /// Ask for a comment along with the rating
    #[arg(long, requires = "rating")]
    rating_comment: bool,

    #[arg(long)]
    align_x: Option<String>,

    #[arg(long)]
    align_y: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    offset_x: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    offset_y: Option<i64>,

    /// Chat box layout (button, widget)
    #[arg(long)]
    widget_style: Option<String>,

    /// Google Analytics property ID
    #[arg(long)]
    ga_key: Option<String>,

    /// Google Analytics tracker options as a JSON object
    #[arg(long, requires = "ga_key", value_parser = parse_ga_options)]
    ga_options: Option<GaOptions>,

    #[arg(long)]
    hide_widget: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_extra(s: &str) -> Result<ExtraInfo, String> {
    let mut parts = s.splitn(3, '=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(id), Some(label), Some(value)) => Ok(ExtraInfo::new(id, label, value)),
        _ => Err(format!("expected ID=LABEL=VALUE, got '{}'", s)),
    }
}

fn parse_ga_options(s: &str) -> Result<GaOptions, String> {
    serde_json::from_str(s).map_err(|e| format!("expected a JSON object: {}", e))
}

fn run(cli: Cli) -> ChatCodeResult<WidgetConfig> {
    let config = match &cli.config {
        Some(path) => WidgetConfig::from_file(path)?,
        None => WidgetConfig::default(),
    };

    info!("config loaded.");

    let mut builder = WidgetConfigBuilder::from_config(config);

    if let Some(key) = cli.key {
        builder.set_key(key);
    }
    if let Some(domain) = cli.cookie_domain {
        builder.set_cookie_domain(domain);
    }
    if let Some(language) = cli.language {
        builder.set_language(language)?;
    }
    if let Some(charset) = cli.charset {
        builder.set_charset(charset);
    }
    if let (Some(name), Some(email)) = (cli.name, cli.email) {
        builder.set_user_basic_information(name, email);
    }
    for extra in cli.extra {
        builder.set_user_extra_information(extra.id, extra.label, extra.value);
    }
    if cli.no_email_transcript {
        builder.disable_send_email_transcript();
    }
    if let Some(rating_type) = cli.rating {
        builder.enable_rating(rating_type, cli.rating_comment)?;
    }

    // unspecified position parts keep their current values
    if cli.align_x.is_some()
        || cli.align_y.is_some()
        || cli.offset_x.is_some()
        || cli.offset_y.is_some()
    {
        let current = builder.config();
        let align_x = cli.align_x.unwrap_or_else(|| current.align_x.into());
        let align_y = cli.align_y.unwrap_or_else(|| current.align_y.into());
        let offset_x = cli.offset_x.unwrap_or(current.offset_x);
        let offset_y = cli.offset_y.unwrap_or(current.offset_y);
        builder.set_box_position(align_x, align_y, offset_x, offset_y)?;
    }

    if let Some(style) = cli.widget_style {
        builder.set_widget_style(style)?;
    }
    if let Some(ga_key) = cli.ga_key {
        builder.set_google_analytics(ga_key, cli.ga_options);
    }
    if cli.hide_widget {
        builder.hide_widget();
    }

    let config = builder.build();
    debug!("config: {:?}", config);
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).and_then(|config| config.to_json()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
