use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use sdif::compiler::config::TEAM_INFO_FILE;
use sdif::{compile_to_text, output_path, scan_file, SdifError, SwimDate, TeamInfo};

#[derive(Parser)]
#[command(name = "sdif")]
#[command(about = "Build, scan, or print SDIF (.sd3) swim-meet files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a `.sd3` meet-results file from exported results rows
    Build {
        /// Individual results rows (JSON array of row objects)
        individual: PathBuf,

        /// Relay results rows (JSON array of row objects)
        #[arg(short, long)]
        relay: Option<PathBuf>,

        /// Output `.sd3` file (defaults to the input's base name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Team info file (defaults to `swim_team_info.json` if present)
        #[arg(short, long)]
        team_info: Option<PathBuf>,
    },

    /// Scan a `.sd3` file and report a record-type code frequency table
    Parse {
        /// Input `.sd3` file
        input: PathBuf,
    },

    /// Print a `.sd3` file line by line
    Print {
        /// Input `.sd3` file
        input: PathBuf,
    },
}

fn main() -> Result<(), SdifError> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Build {
            individual,
            relay,
            output,
            team_info,
        } => {
            println!(
                "Building .sd3 file from:\n\tIndividual results: {}\n\tRelay results: {}",
                individual.display(),
                relay
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(none)".to_string()),
            );
            let config_path = team_info
                .clone()
                .unwrap_or_else(|| Path::new(TEAM_INFO_FILE).to_path_buf());
            let config = TeamInfo::load(&config_path)?;

            let out_path = output.clone().unwrap_or_else(|| output_path(individual));
            let meet_name = out_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("results")
                .to_string();

            let individual_json = fs::read_to_string(individual)?;
            let relay_json = relay.as_ref().map(fs::read_to_string).transpose()?;

            // Encode fully in memory first so a failure writes no file
            let text = compile_to_text(
                &meet_name,
                &individual_json,
                relay_json.as_deref(),
                &config,
                SwimDate::today(),
            )?;
            fs::write(&out_path, text)?;
            println!("Built SDIF file: {}", out_path.display());
            Ok(())
        }

        Commands::Parse { input } => {
            println!("Scanning {}...", input.display());
            let summary = scan_file(input)?;
            for (code, count) in &summary.counts {
                println!("{}  {:>6}", code, count);
            }
            if summary.skipped > 0 {
                println!("(skipped {} unparseable lines)", summary.skipped);
            }
            Ok(())
        }

        Commands::Print { input } => {
            let text = fs::read_to_string(input)?;
            for line in text.lines() {
                println!("{}", line);
            }
            Ok(())
        }
    }
}
