use anyhow::Context;
use clap::Parser;
use pinnacle_core::ephemeris::{slot_transits, NatalChart};
use pinnacle_core::forecast::{error::ForecastError, generate_report};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "pinnacle_cli")]
struct Args {
    /// Forecast date (YYYY-MM-DD, IST). Defaults to today's IST date.
    #[arg(long)]
    date: Option<String>,

    /// Print the report as JSON instead of markdown.
    #[arg(long)]
    json: bool,

    /// Log Sun/Moon transits for each slot. Does not change the report.
    #[arg(long)]
    transits: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = pinnacle_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        // Bad input is the user's to fix; only unexpected failures go to Sentry.
        if let Some(user_err) = err.downcast_ref::<ForecastError>() {
            tracing::warn!(error = %user_err, "forecast request rejected");
            anyhow::bail!(user_err.user_message());
        }
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %err, "forecast run failed");
        return Err(err);
    }

    Ok(())
}

fn run(args: &Args) -> anyhow::Result<()> {
    let date_input = match args.date.as_deref() {
        Some(s) => s.to_string(),
        None => pinnacle_core::time::ist::today_ist(chrono::Utc::now())?
            .format("%Y-%m-%d")
            .to_string(),
    };

    let report = generate_report(&date_input)?;

    if args.transits {
        for t in slot_transits(report.date, &NatalChart::nifty()) {
            tracing::info!(
                slot = t.label,
                at_utc = %t.at_utc,
                sun = t.sun,
                moon = t.moon,
                sun_to_natal_sun = t.sun_to_natal_sun,
                moon_to_natal_moon = t.moon_to_natal_moon,
                moon_to_ascendant = t.moon_to_ascendant,
                "slot transit"
            );
        }
    }

    if args.json {
        let body = serde_json::to_string_pretty(&report).context("serialize report failed")?;
        println!("{body}");
    } else {
        print!("{}", report.to_markdown());
    }

    tracing::info!(date = %report.date, json = args.json, "forecast printed");
    Ok(())
}

fn init_sentry(settings: &pinnacle_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
