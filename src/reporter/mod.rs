mod json;
mod text;

use pslint_common::Problem;

#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn report(&self, problems: &[Problem]) {
        match self.format {
            OutputFormat::Text => text::report(problems),
            OutputFormat::Json => json::report(problems),
        }
    }
}
