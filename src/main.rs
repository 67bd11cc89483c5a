use anyhow::Result;
use clap::Parser;
use wheeldex::cli::{log_level, Cli, Commands};
use wheeldex::commands::{handle_show, init_config, ShowConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Show {
            path,
            format,
            report,
            output,
            plain,
        } => {
            let config = wheeldex::config::load_config();
            handle_show(ShowConfig::resolve(
                path, format, report, output, plain, &config,
            ))
        }
        Commands::Init { force } => init_config(force),
    }
}

// Side effect function for logger setup (I/O at edges)
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
