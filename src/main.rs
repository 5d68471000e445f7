use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cmdmenu::app::{App, OutputFormat};
use cmdmenu::command::usage_lines;
use cmdmenu::config::Config;
use cmdmenu::error::{AppError, AppResult};
use cmdmenu::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "cmdmenu", version, about = "Command menu navigation top bar")]
struct Cli {
    /// Config file; defaults to $CMDMENU_CONFIG_PATH or the XDG location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Force the legacy (pre-v2) top bar.
    #[arg(long, global = true)]
    legacy: bool,
    /// Current route path, e.g. /objects/companies.
    #[arg(long, global = true)]
    location: Option<String>,
    #[arg(long, global = true)]
    mobile: bool,
    /// Object metadata item in context; enables record selection chips.
    #[arg(long = "object-type", global = true)]
    object_type: Option<String>,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Replay a command script (stdin when omitted or `-`).
    Run {
        script: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Drive the top bar from the keyboard.
    Interactive,
    /// List script commands.
    Commands,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = load_config(&cli)?;
    init_tracing(&config.log.filter);

    let mut app = App::new_with_config(config);
    app.selected_object_type = cli.object_type.clone();

    match cli.command {
        CliCommand::Run { script, json } => {
            let text = read_script(script)?;
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            app.run_script(&text, format, &mut io::stdout().lock())
        }
        CliCommand::Interactive => app.run_interactive(),
        CliCommand::Commands => {
            for line in usage_lines() {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> AppResult<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::invalid_argument(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Config::load_from_path(path)?
        }
        None => Config::load()?,
    };
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if cli.legacy {
        config.features.command_menu_v2 = false;
    }
    if let Some(location) = &cli.location {
        config.top_bar.location = location.clone();
    }
    if cli.mobile {
        config.top_bar.is_mobile = true;
    }
}

fn read_script(path: Option<PathBuf>) -> AppResult<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(&path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read script: {}", path.display()))
        }),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| AppError::io_with_context(source, "failed to read stdin"))?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, CliCommand, apply_overrides};
    use cmdmenu::config::Config;

    #[test]
    fn cli_parses_run_with_global_flags() {
        let cli = Cli::try_parse_from([
            "cmdmenu",
            "run",
            "demo.cmds",
            "--json",
            "--legacy",
            "--location",
            "/objects/companies",
        ])
        .expect("args should parse");

        assert!(matches!(cli.command, CliCommand::Run { json: true, .. }));

        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert!(!config.features.command_menu_v2);
        assert_eq!(config.top_bar.location, "/objects/companies");
        assert!(!config.top_bar.is_mobile);
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["cmdmenu"]).is_err());
    }
}
