//! bboxconv: bounding-box conversion between Pascal-VOC, COCO and YOLO.
//!
//! The library is pure and stateless: every conversion validates its input,
//! derives the target coordinates and returns a fresh `[f64; 4]`. A thin CLI
//! built on top of it lives in this module.
//!
//! # Modules
//!
//! - [`bbox`]: Box formats, the six pairwise conversions and the dispatcher
//! - [`report`]: Text/JSON reports printed by the CLI
//! - [`error`]: Error types for bboxconv operations

pub mod bbox;
pub mod error;
pub mod report;

use std::io::Write;

use clap::{Parser, Subcommand, ValueEnum};

pub use error::{BboxconvError, ConvertError, ErrorKind};

use bbox::ConversionRequest;
use report::{ConversionReport, RouteListing};

/// The bboxconv CLI application.
#[derive(Parser)]
#[command(name = "bboxconv")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Convert one bounding box between formats.
    Convert(ConvertArgs),
    /// List the supported conversions.
    Routes(RoutesArgs),
}

/// Report format for command output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Arguments for the convert subcommand.
#[derive(clap::Args)]
struct ConvertArgs {
    /// Source format ('pascal', 'coco' or 'yolo').
    from: String,

    /// Target format ('pascal', 'coco' or 'yolo').
    to: String,

    /// The four coordinates in the source format's field order.
    #[arg(num_args = 1.., allow_negative_numbers = true, required = true)]
    coords: Vec<String>,

    /// Image size as WxH (required for conversions to or from yolo).
    #[arg(long)]
    size: Option<String>,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text, env = "BBOXCONV_OUTPUT")]
    output: ReportFormat,
}

/// Arguments for the routes subcommand.
#[derive(clap::Args)]
struct RoutesArgs {
    /// Output format for the listing.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text, env = "BBOXCONV_OUTPUT")]
    output: ReportFormat,
}

/// Run the bboxconv CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), BboxconvError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert(args)) => run_convert(args),
        Some(Commands::Routes(args)) => run_routes(args),
        None => {
            println!("bboxconv {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Bounding-box conversion between pascal, coco and yolo.");
            println!();
            println!("Run 'bboxconv --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the convert subcommand.
fn run_convert(args: ConvertArgs) -> Result<(), BboxconvError> {
    let request =
        ConversionRequest::parse(&args.from, &args.to, &args.coords, args.size.as_deref())?;
    log::debug!("parsed request: {:?}", request);
    log::debug!("resolved route: {:?}", request.route());

    let output = request.run()?;
    log::debug!("{} -> {}: {:?}", request.from, request.to, output);

    let report = ConversionReport {
        from: request.from,
        to: request.to,
        input: request.coords,
        size: request.size,
        output,
    };
    emit(&report, args.output)
}

/// Execute the routes subcommand.
fn run_routes(args: RoutesArgs) -> Result<(), BboxconvError> {
    emit(&RouteListing::new(), args.output)
}

fn emit<R>(report: &R, format: ReportFormat) -> Result<(), BboxconvError>
where
    R: std::fmt::Display + serde::Serialize,
{
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        ReportFormat::Text => write!(out, "{}", report)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut out, report).map_err(BboxconvError::JsonWrite)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
