mod args;
mod check;
mod debug;
mod emit;
mod error;
mod init;

use std::io::Write;

use clap::Parser;
use proc_exit::prelude::*;

use crate::error::*;

/// Site configuration for a learning-notes documentation site
#[derive(Clone, Debug, clap::Parser)]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Check(check::CheckArgs),
    Emit(emit::EmitArgs),
    Init(init::InitArgs),
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self) -> Result<()> {
        match self {
            Self::Check(cmd) => cmd.run(),
            Self::Emit(cmd) => cmd.run(),
            Self::Init(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    init_logging(cli.verbose.log_level_filter());

    cli.command
        .run()
        .map_err(|e| format!("{e:#}"))
        .with_code(proc_exit::Code::FAILURE)?;

    Ok(())
}

fn init_logging(level: log::LevelFilter) {
    let write_style = match colorchoice::ColorChoice::global() {
        colorchoice::ColorChoice::Auto => env_logger::WriteStyle::Auto,
        colorchoice::ColorChoice::AlwaysAnsi | colorchoice::ColorChoice::Always => {
            env_logger::WriteStyle::Always
        }
        colorchoice::ColorChoice::Never => env_logger::WriteStyle::Never,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.write_style(write_style);
    builder.format(|f, record| {
        let style = level_style(record.level());
        let level = record.level().as_str().to_lowercase();
        writeln!(f, "{style}[{level}]{style:#} {}", record.args())
    });
    builder.init();
}

fn level_style(level: log::Level) -> anstyle::Style {
    let color = match level {
        log::Level::Error => anstyle::AnsiColor::Red,
        log::Level::Warn => anstyle::AnsiColor::Yellow,
        log::Level::Info => anstyle::AnsiColor::Green,
        log::Level::Debug => anstyle::AnsiColor::Blue,
        log::Level::Trace => anstyle::AnsiColor::Cyan,
    };
    anstyle::Style::new().fg_color(Some(color.into()))
}
