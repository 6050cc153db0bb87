//! Check if there are enough LVARs allowed in scripts.lst.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use mc_check::lvars::check_lvars;

/// Check if there are enough LVARs allowed in scripts.lst
#[derive(Parser, Debug)]
#[command(name = "check-lvars")]
#[command(author, version, about = "Check if there are enough LVARs allowed in scripts.lst", long_about = None)]
struct Args {
    /// Scripts directory path
    scripts_dir: PathBuf,

    /// scripts.lst path
    scripts_lst: PathBuf,

    /// Print the report as JSON instead of plain lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let report = check_lvars(&args.scripts_dir, &args.scripts_lst)?;
    if args.json {
        println!("{}", report.to_json());
    } else {
        report.print();
    }
    Ok(report.exit_code())
}
