use skynet::{
    lang::bootstrap::run_bootstrap,
    runtime::{
        built_ins::{base_words::register_base_words, io_words::register_io_words},
        config::InterpreterConfig,
        error,
        interpreter::{CodeManagement, skynet_interpreter::SkynetInterpreter},
        output::StdoutSink,
    },
};
use std::{
    env::{args, var},
    fs::read_to_string,
    io::stdin,
    process::{ExitCode, Termination},
};

/// Install the log subscriber.  Logging stays off unless `SKYNET_LOG` holds a filter, so nothing
/// but program output reaches the terminal by default.  Log lines go to stderr.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if let Ok(filter) = var("SKYNET_LOG") {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::new(filter))
            .init();
    }
}

fn run() -> error::Result<()> {
    let config = InterpreterConfig::from_env();
    let mut interpreter = SkynetInterpreter::new(config, Box::new(StdoutSink));

    // Register the words implemented in Rust, then extend the language with the bootstrap program.
    register_base_words(&mut interpreter);
    register_io_words(&mut interpreter);

    run_bootstrap(&mut interpreter)?;

    // With a script argument run that file, otherwise run standard input as it arrives.
    let args: Vec<String> = args().collect();

    if args.len() >= 2 {
        let source = read_to_string(&args[1])?;
        interpreter.process_source(&args[1], &source)
    } else {
        interpreter.process_reader("<stdin>", stdin().lock())
    }
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => error.report(),
    }
}
