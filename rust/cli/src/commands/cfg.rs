//! `cfg`: shows the resolved configuration.
//!
//! ```json
//! {
//!   "assets_dir": { "value": "assets", "source": "default" },
//!   "layout": { "value": "eight", "source": "env" },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "assets_dir": {
            "value": config.assets_dir,
            "source": sources.assets_dir,
        },
        "layout": {
            "value": config.layout,
            "source": sources.layout,
        },
        "font_size": {
            "value": config.font_size,
            "source": sources.font_size,
        },
        "jpeg_quality": {
            "value": config.jpeg_quality,
            "source": sources.jpeg_quality,
        },
        "outbox_dir": {
            "value": config.outbox_dir,
            "source": sources.outbox_dir,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
