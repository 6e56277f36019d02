//! BandMaster CLI — swing-band analysis over a CSV of daily bars.
//!
//! Reads a CSV with `date,open,high,low,close,volume` columns, runs the
//! full analysis pipeline, and prints either a human-readable report or
//! JSON. Pass `--cost` and `--shares` together to get position-aware
//! decisions, and `--inflow` to supply a main-fund net inflow figure.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use bandmaster_core::analysis::analyze;
use bandmaster_core::domain::{FundFlowSnapshot, PositionContext, PriceBar};

#[derive(Parser)]
#[command(
    name = "bandmaster",
    about = "BandMaster — swing-band signal scoring and trading decisions"
)]
struct Cli {
    /// CSV file of daily bars (date,open,high,low,close,volume).
    bars: PathBuf,

    /// Average cost basis of an existing holding (requires --shares).
    #[arg(long)]
    cost: Option<f64>,

    /// Share count of an existing holding (requires --cost).
    #[arg(long)]
    shares: Option<f64>,

    /// Main-fund net inflow for the latest session, signed.
    #[arg(long)]
    inflow: Option<f64>,

    /// Emit the full analysis as JSON instead of a report.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let bars = read_bars(&cli.bars)?;
    if bars.is_empty() {
        bail!("no bars in {} — data unavailable, try again", cli.bars.display());
    }

    let position = match (cli.shares, cli.cost) {
        (Some(shares), Some(cost)) => Some(
            PositionContext::new(shares, cost).context("invalid position arguments")?,
        ),
        (None, None) => None,
        _ => bail!("--cost and --shares must be given together"),
    };

    let fund_flow = cli.inflow.map(|main_net_inflow| FundFlowSnapshot {
        main_net_inflow,
        available: true,
        ..Default::default()
    });

    let analysis = analyze(&bars, fund_flow.as_ref(), position.as_ref())
        .context("analysis failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_report(&analysis);
    }

    Ok(())
}

fn read_bars(path: &PathBuf) -> Result<Vec<PriceBar>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    let mut bars = Vec::new();
    for record in reader.deserialize() {
        let bar: PriceBar = record.context("malformed bar row")?;
        bars.push(bar);
    }
    Ok(bars)
}

fn print_report(analysis: &bandmaster_core::Analysis) {
    let band = &analysis.band;
    let signals = &analysis.signals;
    let decision = &analysis.decision;
    let stops = &analysis.stops;

    println!("BandMaster analysis — {} @ {:.2}", analysis.latest_date, analysis.latest_close);
    println!();
    println!(
        "Band: {:?} ({}), position {:.1}% [{:.2} .. {:.2}]",
        band.band_type, band.period_range, band.position_percent, band.low_20, band.high_20
    );
    println!("  {}", band.position_description);
    println!("  Guidance: {}", band.guidance);
    println!();
    println!(
        "Signals: {}/{} ({:.0}%)",
        signals.signal_count, signals.total_signals, signals.overall_score
    );
    for (name, signal) in [
        ("trend direction", &signals.trend_direction),
        ("momentum strength", &signals.momentum_strength),
        ("volume cooperation", &signals.volume_cooperation),
        ("fund verification", &signals.fund_verification),
        ("pattern confirmation", &signals.pattern_confirmation),
        ("market environment", &signals.market_environment),
    ] {
        let mark = if signal.status { "+" } else { "-" };
        println!("  [{mark}] {name}: {}", signal.description);
    }
    println!();
    println!(
        "Decision: {:?} (confidence {}){}",
        decision.action,
        decision.confidence,
        if decision.urgent { " — URGENT" } else { "" }
    );
    println!(
        "  ratio {:.2}, target {:.2}, stop {:.2}, horizon {}",
        decision.position_ratio, decision.target_price, decision.stop_loss, decision.holding_period
    );
    if analysis.allocation.total() > 0.0 {
        let a = &analysis.allocation;
        println!(
            "  staged entry: base {:.2}, breakout {:.2}, pullback {:.2}, flexible {:.2}",
            a.base, a.breakout_add, a.pullback_add, a.flexible
        );
    }
    println!();
    println!(
        "Stops: targets {:.2} / {:.2} / {:.2}, trailing {:.2}, emergency {:.2} (ATR {:.3}), time stop {} days",
        stops.first_target,
        stops.second_target,
        stops.third_target,
        stops.trailing_stop,
        stops.emergency_stop,
        stops.atr_used,
        stops.time_stop_days
    );
}
