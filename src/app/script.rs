use std::io::Write;

use crate::command::{Command, CommandOutcome, parse_command_text};
use crate::error::{AppError, AppResult};

use super::core::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl App {
    /// Runs one command per line. Blank lines and `#` comments are skipped;
    /// `show` writes the current top bar to `out`. Stops at the first error.
    pub fn run_script(
        &mut self,
        script: &str,
        format: OutputFormat,
        out: &mut impl Write,
    ) -> AppResult<()> {
        for (index, line) in script.lines().enumerate() {
            let line_no = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let cmd = parse_command_text(line).map_err(|err| AppError::script(line_no, err))?;
            let show = matches!(cmd, Command::Show);
            let result = self
                .execute(cmd)
                .map_err(|err| AppError::script(line_no, err))?;

            if show {
                self.write_top_bar(format, out)?;
            }
            if result.outcome == CommandOutcome::QuitRequested {
                break;
            }
        }
        Ok(())
    }

    pub fn write_top_bar(&self, format: OutputFormat, out: &mut impl Write) -> AppResult<()> {
        let model = self.top_bar();
        match format {
            OutputFormat::Text => writeln!(out, "{model}")?,
            OutputFormat::Json => {
                let json = serde_json::to_string(&model)
                    .map_err(|source| AppError::json_with_context(source, "top bar"))?;
                writeln!(out, "{json}")?;
            }
        }
        Ok(())
    }
}
