use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use plantain_cli::config::PlannerConfig;
use plantain_cli::forms::{
    BusinessCaseForm, FlowchartForm, InvestmentForm, LayoutForm, MarketForm, ProgressForm,
    ProjectionForm, QualityForm, RiskForm, SupplierForm,
};
use plantain_cli::report::{ModulesReport, OutputFormat, render};
use plantain_cli::{commands, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Business planner for a plantain flour production venture.
///
/// Each subcommand is one planning module. Numeric options accept text;
/// blank, invalid or zero values fall back to the module's defaults.
#[derive(Debug, Parser)]
#[command(name = "plantain-planner", version)]
struct Cli {
    /// TOML file overriding calculator constants.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `plantain_core=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Suppress log output on the console.
    #[arg(long, global = true)]
    quiet: bool,

    /// Report format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the planning modules.
    Modules,
    /// Capital allocation, investment requirements and staffing.
    Investment(InvestmentForm),
    /// Yield-based business case with break-even and revenue targets.
    BusinessCase(BusinessCaseForm),
    /// Operating revenue and cost projection.
    Projection(ProjectionForm),
    /// Factory layout, equipment and area allocation.
    Layout(LayoutForm),
    /// Procurement strategy and supplier profile.
    Suppliers(SupplierForm),
    /// Quarterly performance against targets.
    Progress(ProgressForm),
    /// Risk scores and mitigation strategies.
    Risk(RiskForm),
    /// Quality standard requirements and testing protocols.
    Quality(QualityForm),
    /// Market segments, shares, demand forecast and competitors.
    Market(MarketForm),
    /// Process chain walkthrough and analysis levels.
    Flowchart(FlowchartForm),
}

// ─── logging ─────────────────────────────────────────────────────────────────

/// Applies the logging flags on top of the default subscriber.
///
/// * `--log-level` replaces the filter (otherwise `RUST_LOG` or `info`).
/// * `--quiet` silences the console; a log file still receives records.
fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    logging::init_default_logging();

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if cli.quiet {
        logging::set_console_enabled(false)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = PlannerConfig::load(cli.config.as_deref())?;
    let format = cli.format;
    debug!(command = ?cli.command, "running");

    match &cli.command {
        Command::Modules => render(&ModulesReport::new(), format),
        Command::Investment(form) => render(&commands::investment(form, &config)?, format),
        Command::BusinessCase(form) => render(&commands::business_case(form, &config)?, format),
        Command::Projection(form) => render(&commands::projection(form, &config)?, format),
        Command::Layout(form) => render(&commands::layout(form)?, format),
        Command::Suppliers(form) => render(&commands::suppliers(form)?, format),
        Command::Progress(form) => render(&commands::progress(form)?, format),
        Command::Risk(form) => render(&commands::risk(form), format),
        Command::Quality(form) => render(&commands::quality(form), format),
        Command::Market(form) => render(&commands::market(form), format),
        Command::Flowchart(form) => render(&commands::flowchart(form)?, format),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let output = run(&cli)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
