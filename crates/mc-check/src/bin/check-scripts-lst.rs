//! Find discrepancies between scripts.lst and scripts.h.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use mc_check::scripts_lst::check_scripts_lst;

/// Find discrepancies in scripts.lst and scripts.h
#[derive(Parser, Debug)]
#[command(name = "check-scripts-lst")]
#[command(author, version, about = "Find discrepancies in scripts.lst and scripts.h", long_about = None)]
struct Args {
    /// scripts.h path
    scripts_h: PathBuf,

    /// scripts.lst path
    scripts_lst: PathBuf,

    /// Print the report as JSON instead of plain lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let report = check_scripts_lst(&args.scripts_h, &args.scripts_lst)?;
    if args.json {
        println!("{}", report.to_json());
    } else {
        report.print();
    }
    Ok(report.exit_code())
}
