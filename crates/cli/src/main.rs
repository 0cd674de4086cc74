use clap::Parser;

use storefront_cli::{Cli, Command, StorefrontConfig, commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, ignored) = StorefrontConfig::from_env();
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    storefront_observability::init(config.log_format);

    for setting in &ignored {
        tracing::warn!("{setting}; using default");
    }

    let output = match &cli.command {
        Command::List(args) => commands::list(args, &config)?,
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
