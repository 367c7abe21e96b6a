//! Evaluate a preset scenario or a custom shot and print the recommendation.
//!
//! Usage:
//!   caddie scenarios
//!   caddie preset 0
//!   caddie custom --club 7-iron --wind 15 --direction 90 --temp 45
//!
//! The API base and key come from `--api-base` / `--api-key` or the
//! `CADDIE_API_BASE` / `CADDIE_API_KEY` environment variables.

use std::io;
use std::process;
use std::time::Duration;

use caddie::format::input;
use caddie::{
    CLUBS, CaddieError, ClientConfig, CustomShot, SCENARIOS, ScenarioView, Selection, Session,
    TrajectoryClient,
};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Caddie(#[from] CaddieError),

    #[error("failed to encode view as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "caddie")]
#[command(about = "Club recommendations for real-world weather conditions")]
struct Cli {
    /// Trajectory API base URL
    #[arg(long, env = "CADDIE_API_BASE", default_value = caddie::client::DEFAULT_API_BASE)]
    api_base: String,

    /// API key sent as X-API-Key
    #[arg(long, env = "CADDIE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the view as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the preset scenarios
    Scenarios,
    /// List clubs and their standard carry
    Clubs,
    /// Evaluate a preset scenario by id
    Preset { id: usize },
    /// Evaluate a custom shot
    Custom(CustomArgs),
}

#[derive(Args, Debug)]
struct CustomArgs {
    /// Club key, e.g. 7-iron, pw, driver
    #[arg(long, default_value = "7-iron")]
    club: String,
    /// Target carry in yards (defaults to the club's standard carry)
    #[arg(long)]
    carry: Option<f64>,
    /// Wind speed (mph)
    #[arg(long, default_value_t = 0.0)]
    wind: f64,
    /// Wind direction (deg, 0 = headwind, 90 = left-to-right)
    #[arg(long, default_value_t = 0.0)]
    direction: f64,
    /// Temperature (°F)
    #[arg(long, default_value_t = 70.0)]
    temp: f64,
    /// Altitude (ft)
    #[arg(long, default_value_t = 0.0)]
    altitude: f64,
    /// Relative humidity (%)
    #[arg(long, default_value_t = 50.0)]
    humidity: f64,
}

impl CustomArgs {
    fn into_shot(self) -> Result<CustomShot, CaddieError> {
        let base = CustomShot::for_club(&self.club)?;
        Ok(CustomShot {
            target_carry_yards: self.carry.unwrap_or(base.target_carry_yards),
            wind_speed_mph: self.wind,
            wind_direction_deg: self.direction,
            temperature_f: self.temp,
            altitude_ft: self.altitude,
            humidity_pct: self.humidity,
            ..base
        })
    }
}

// ---------------------------------------------------------------------------
// Pretty-printers
// ---------------------------------------------------------------------------

fn print_scenarios() {
    for s in &SCENARIOS {
        println!("  [{}] {}", s.id, s.title);
    }
}

fn print_clubs() {
    for c in &CLUBS {
        println!(
            "  {:<7} {:<7} carry={:>3}yd  ball={}mph launch={}° spin={}rpm",
            c.key, c.name, c.carry_yards, c.ball_speed_mph, c.launch_angle_deg, c.spin_rate_rpm,
        );
    }
}

fn print_custom_inputs(shot: &CustomShot) {
    println!(
        "  Inputs: {} wind {}° | {} | {} | {}",
        input::wind_speed(shot.wind_speed_mph),
        shot.wind_direction_deg,
        input::temperature(shot.temperature_f),
        input::altitude(shot.altitude_ft),
        input::humidity(shot.humidity_pct),
    );
}

fn print_view(v: &ScenarioView) {
    println!("=== {} ===", v.title);
    println!("{}", v.description);
    println!();
    println!(
        "  Conditions: {} | {} | {} | {}",
        v.conditions.temperature, v.conditions.wind, v.conditions.altitude, v.conditions.humidity,
    );
    println!();

    let (base, adj, d) = (&v.standard.stats, &v.adjusted.stats, &v.deltas);
    println!("  {:<14} {:>10} {:>10} {:>8}", "", "Standard", "Adjusted", "Change");
    println!("  {:<14} {:>10} {:>10} {:>8}", "Carry (yd)", base.carry, adj.carry, d.carry.text);
    println!("  {:<14} {:>10} {:>10} {:>8}", "Total (yd)", base.total, adj.total, d.total.text);
    println!("  {:<14} {:>10} {:>10} {:>8}", "Apex (yd)", base.apex, adj.apex, d.apex.text);
    println!("  {:<14} {:>10} {:>10} {:>8}", "Drift (yd)", base.drift, adj.drift, d.drift.text);
    println!(
        "  {:<14} {:>10} {:>10} {:>8}",
        "Flight (s)", base.flight_time, adj.flight_time, d.flight_time.text
    );
    println!(
        "  {:<14} {:>10} {:>10} {:>8}",
        "Landing", base.landing_angle, adj.landing_angle, d.landing_angle.text
    );
    println!();

    println!("  Impact:");
    for (name, bar) in [
        ("Wind", &v.impact.wind),
        ("Temperature", &v.impact.temperature),
        ("Altitude", &v.impact.altitude),
        ("Humidity", &v.impact.humidity),
    ] {
        // 20 columns for a full bar.
        let cells = (bar.width_pct / 5.0).round() as usize;
        println!("    {name:<12} {:<20} {}", "#".repeat(cells), bar.label);
    }
    if let Some(yards) = v.plays_like_yards {
        println!("  Plays like: {yards} yds");
    }
    if let Some(push) = &v.wind_push {
        println!("  Wind push:  {}", push.text);
    }
    if let Some(peak) = v.flight_path.iter().max_by(|a, b| a.y.total_cmp(&b.y)) {
        println!(
            "  Flight path: {} points, peak {:.1} yd at {:.1} yd downrange",
            v.flight_path.len(),
            peak.y,
            peak.x,
        );
    }
    println!();

    println!("  Standard club:    {}", v.standard.club);
    println!("  Recommended club: {}", v.adjusted.club);
    println!();
    println!("  {}", v.explanation);
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "caddie=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let selection = match cli.command {
        Command::Scenarios => {
            print_scenarios();
            return Ok(());
        }
        Command::Clubs => {
            print_clubs();
            return Ok(());
        }
        Command::Preset { id } => Selection::preset(id)?,
        Command::Custom(args) => Selection::Custom(args.into_shot()?),
    };

    let client = TrajectoryClient::new(ClientConfig {
        api_base: cli.api_base,
        api_key: cli.api_key,
        timeout: cli.timeout.map(Duration::from_secs),
    })?;

    let mut session = Session::new();
    let Some(evaluation) = session.evaluate(&client, selection).await? else {
        return Ok(());
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&evaluation.view)?);
        return Ok(());
    }

    if let Selection::Custom(shot) = &evaluation.selection {
        print_custom_inputs(shot);
    }
    print_view(&evaluation.view);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_failure_is_an_error() {
        let err: CliError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, CliError::Json(_)));
        assert!(err.to_string().starts_with("failed to encode view as JSON"));
    }

    #[test]
    fn library_errors_pass_through_unchanged() {
        let err: CliError = Selection::preset(99).unwrap_err().into();
        assert_eq!(err.to_string(), "unknown scenario id 99");
    }

    #[test]
    fn custom_args_override_club_defaults() {
        let cli = Cli::try_parse_from([
            "caddie", "custom", "--club", "pw", "--wind", "15", "--direction", "45",
        ])
        .unwrap();
        let Command::Custom(args) = cli.command else {
            panic!("expected custom command");
        };
        let shot = args.into_shot().unwrap();
        assert_eq!(shot.club, "pw");
        assert_eq!(shot.target_carry_yards, 125.0);
        assert_eq!(shot.wind_speed_mph, 15.0);
        assert_eq!(shot.wind_direction_deg, 45.0);
        assert_eq!(shot.temperature_f, 70.0);
    }
}
