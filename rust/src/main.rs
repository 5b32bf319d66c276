use std::fs;
use std::path::PathBuf;
use std::process;

use anthill::{render, SolverConfig};
use clap::Parser;

/// Move every ant from the start room to the end room in as few turns as possible.
#[derive(Parser, Debug)]
#[command(name = "anthill", version)]
struct Cli {
    /// Colony description file
    file: PathBuf,

    /// Log solver progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Do not echo the input before the schedule
    #[arg(long)]
    no_echo: bool,
}

impl Cli {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            echo_input: !self.no_echo,
            ..SolverConfig::with_verbosity(self.verbose)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config();

    let text = match fs::read_to_string(&cli.file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("ERROR: {}: {}", cli.file.display(), e);
            process::exit(1);
        }
    };

    let report = render(&text, &config);
    print!("{}", report.output);
    if report.exit_code != 0 {
        process::exit(report.exit_code);
    }
}
