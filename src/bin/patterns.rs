use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use pattern_vignettes::{logging, DemoConfig, Pattern};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Run the design pattern vignettes.
#[derive(Parser, Debug)]
#[command(name = "patterns", version, about)]
struct Cli {
    /// TOML file overriding the vignette inputs.
    #[arg(short, long, env = "PATTERNS_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one vignette.
    Run {
        #[arg(value_enum)]
        pattern: Pattern,
    },
    /// Run every vignette in order.
    All,
    /// List the available vignettes.
    List,
}

fn header(out: &mut dyn Write, pattern: Pattern) -> io::Result<()> {
    let title = format!("=== {} ===", pattern.title());
    writeln!(out, "{}", title.bold().cyan())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = DemoConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Run { pattern } => {
            header(&mut out, pattern)?;
            pattern
                .run(&config, &mut out)
                .with_context(|| format!("running {pattern}"))?;
        }
        Command::All => {
            for pattern in Pattern::ALL {
                header(&mut out, pattern)?;
                pattern
                    .run(&config, &mut out)
                    .with_context(|| format!("running {pattern}"))?;
                writeln!(out)?;
            }
        }
        Command::List => {
            for pattern in Pattern::ALL {
                let name = pattern
                    .to_possible_value()
                    .map(|value| value.get_name().to_string())
                    .unwrap_or_default();
                writeln!(out, "{} {}", format!("{name:<18}").green(), pattern.summary())?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
