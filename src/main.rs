//! apigen's main application entry point.
//! Parses arguments, sets up logging and runs the generator, turning any
//! failure into a diagnostic and a nonzero exit status.

use apigen::{
    cli::{get_args, Args},
    config::load_config,
    error::{default_error_handler, Result},
    generator::Generator,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the configuration (file or defaults)
/// 2. Applies the input override
/// 3. Runs every generation task
fn run(args: Args) -> Result<()> {
    let mut config = load_config(&args.root, args.config.as_deref())?;
    if let Some(input) = args.input {
        config.input = input;
    }

    let generator = Generator::new(&args.root, config);
    for output in generator.run()? {
        println!("Generated: '{}'", output.display());
    }

    println!("Generation completed successfully in {}.", args.root.display());
    Ok(())
}
