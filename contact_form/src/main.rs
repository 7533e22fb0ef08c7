use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use contact_form::commands::{interactive::interactive, render::render, submit::SubmitCommand};
use contact_form_utils::contact_form_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = contact_form_config::load(&cli.config).context("Failed to load config")?;

    match cli.command {
        Command::Render => render(&config, std::io::stdout().lock())?,
        Command::Submit(command) => command.invoke(&config, std::io::stdout().lock())?,
        Command::Interactive { errors_only } => interactive(&config, errors_only)?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = contact_form_version())]
struct Cli {
    /// Additional config files, applied after the default config and the
    /// files listed in `CONTACT_FORM_CONFIG`
    #[arg(short, long, global = true)]
    config: Vec<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the empty contact form
    #[command(aliases(["r"]))]
    Render,
    /// Fill in and submit the contact form, then print the resulting page
    #[command(aliases(["s"]))]
    Submit(SubmitCommand),
    /// Read form events from stdin and print the page after each one
    ///
    /// Events: `set <field> <value>`, `submit`, `reset`, `show`, `quit`
    #[command(aliases(["i"]))]
    Interactive {
        /// Print only the current error messages instead of the whole page
        #[arg(short, long)]
        errors_only: bool,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }
}
