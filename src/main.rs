use std::process;

use clap::Parser;
use tracing::debug;

use dynomigrate::args::CliArgs;
use dynomigrate::banner::print_banner;
use dynomigrate::config::Config;
use dynomigrate::errors::FatalError;
use dynomigrate::logging;
use dynomigrate::reconciler;
use dynomigrate::store::{DynamoStore, TableStore};

fn main() {
    print_banner();

    let args = CliArgs::parse();

    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        tracing::error!("{}", err);
        process::exit(err.exit_code());
    }
}

fn run(args: CliArgs) -> Result<(), FatalError> {
    let config = Config::from_args(args)?;
    logging::init(&config)?;

    debug!("Starting program.");

    let store = DynamoStore::connect(config.endpoint_url.clone())?;
    if !store.check_access() {
        return Err(FatalError::Connectivity);
    }

    reconciler::run(&store, &config)?;

    debug!("Program finished.");
    Ok(())
}
