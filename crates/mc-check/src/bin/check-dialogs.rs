//! Find inconsistencies between script sources and msg dialogs.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use mc_check::dialogs::check_dialogs;

/// Find inconsistencies between ssl and msg
#[derive(Parser, Debug)]
#[command(name = "check-dialogs")]
#[command(author, version, about = "Find inconsistencies between ssl and msg", long_about = None)]
struct Args {
    /// Path to msg dialog directory
    dialog_dir: PathBuf,

    /// Path to scripts directory
    scripts_dir: PathBuf,

    /// Print the report as JSON instead of plain lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let report = check_dialogs(&args.dialog_dir, &args.scripts_dir)?;
    if args.json {
        println!("{}", report.to_json());
    } else {
        report.print();
    }
    Ok(report.exit_code())
}
