use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use tl_desk::cli::commands::{providers, session, translate};
use tl_desk::cli::{Args, Command};
use tl_desk::config::{ConfigError, ResolveOptions};
use tl_desk::output::{self, OutputConfig};
use tl_desk::translation::print_languages;
use tl_desk::ui::Style;

fn main() -> ExitCode {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        verbose: args.verbose,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", Style::error("Error:"));
            let code = if err.downcast_ref::<ConfigError>().is_some() {
                exitcode::CONFIG
            } else {
                exitcode::SOFTWARE
            };
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(args: Args) -> Result<()> {
    let resolve = ResolveOptions {
        from: args.from,
        to: args.to,
        provider: args.provider,
        model: args.model,
    };

    match args.command {
        Some(Command::Languages) => {
            print_languages();
            Ok(())
        }
        Some(Command::Providers { provider }) => providers::print_providers(provider.as_deref()),
        Some(Command::Session) => session::run_session(&resolve, &runtime()?),
        None if args.file.is_none() && io::stdin().is_terminal() => {
            session::run_session(&resolve, &runtime()?)
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                resolve,
            };
            translate::run_translate(&options, &runtime()?)
        }
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")
}
