//! Find discrepancies in worldmap.txt.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mc_check::worldmap::{check_worldmap, parse_allowed_sets};

/// Find discrepancies in worldmap.txt
#[derive(Parser, Debug)]
#[command(name = "check-worldmap")]
#[command(author, version, about = "Find discrepancies in worldmap.txt", long_about = None)]
struct Args {
    /// worldmap.txt path
    worldmap: PathBuf,

    /// Allow a set of scripts to be present in an encounter together,
    /// like so: '-s 100,101 -s 200,201,202'
    #[arg(short = 's', value_name = "SCRIPTS")]
    script_sets: Vec<String>,

    /// Print the report as JSON instead of plain lines
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let allowed = match parse_allowed_sets(&args.script_sets) {
        Ok(allowed) => allowed,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    };

    match check_worldmap(&args.worldmap, &allowed) {
        Ok(report) => {
            if args.json {
                println!("{}", report.to_json());
            } else {
                report.print();
            }
            report.exit_code()
        }
        // Fatal precondition: report it the way the checker output reads,
        // on stdout, and fail.
        Err(e) => {
            println!("{e}");
            ExitCode::from(1)
        }
    }
}
