//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Effective config as TOML, the format the file is written in.
fn format_config_toml(cfg: &Config) -> Result<String, CliError> {
    toml::to_string_pretty(cfg)
        .map(|s| s.trim_end().to_owned())
        .map_err(|e| CliError::Render(e.to_string()))
}

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::effective_path(global);

    match args.command {
        ConfigCommand::Path => {
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config(&path)?;
            let out = match global.output.unwrap_or(OutputFormat::Table) {
                OutputFormat::Table | OutputFormat::Plain => format_config_toml(&cfg)?,
                OutputFormat::Json => output::render_json_pretty(&cfg)?,
                OutputFormat::JsonCompact => output::render_json_compact(&cfg)?,
                OutputFormat::Yaml => output::render_yaml(&cfg)?,
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
