pub mod json;
pub mod table;

use crate::cli::OutputFlags;
use crate::config::{OutputFormat, SettingsResolved};

pub fn select_format(flags: &OutputFlags, settings: &SettingsResolved) -> OutputFormat {
    if flags.json {
        return OutputFormat::Json;
    }
    if flags.pretty {
        return OutputFormat::Pretty;
    }
    settings.output.default_format
}
