use clap::Parser;
use snap_carousel::cli::Cli;
use snap_carousel::logging::init_tracing;
use snap_carousel::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    init_tracing(cli.log_file.as_deref())?;
    runtime::run(&config, cli.selection)?;
    Ok(())
}
