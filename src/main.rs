use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use combo_filter::args::Args;
use combo_filter::config::{Config, OutputTarget};
use combo_filter::{logging, output, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    if args.list_filters {
        let mut stdout = std::io::stdout().lock();
        presentation::print_filter_catalogue(&mut stdout)?;
        stdout.flush()?;
        return Ok(());
    }

    let config = Config::from_args(args).context("could not resolve settings")?;
    let target = match &config.target {
        OutputTarget::File(path) => path.display().to_string(),
        OutputTarget::Stdout => "stdout".to_string(),
    };
    let writer = output::OutputWriter::create(&config.target)
        .with_context(|| format!("failed to open {target} for writing"))?;

    let result = combo_filter_engine::run(&config.run).context("enumeration refused")?;
    output::emit(&result, &config, writer).with_context(|| format!("failed to write {target}"))?;

    if config.summary {
        presentation::print_summary(&result.stats, &config, &mut std::io::stderr().lock())?;
    }
    Ok(())
}
