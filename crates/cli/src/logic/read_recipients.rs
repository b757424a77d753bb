use crate::prelude::*;
use std::io::Read;
use std::path::Path;

const STDIN_PATH: &str = "-";

/// Reads the recipient text from `path`, or from stdin for `-`.
pub fn read_recipients_text(path: &Path) -> Result<String, CliError> {
    let source_name = path.display().to_string();
    let read_error = |e: std::io::Error| CliError::ReadRecipients {
        source_name: source_name.clone(),
        underlying: e.to_string(),
    };

    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(read_error)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(read_error)
    }
}
