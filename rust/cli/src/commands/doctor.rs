//! Environment diagnostics.
//!
//! Loads every asset the renderer needs from the configured directory and
//! probes the outbox directory for write access. The report is JSON; any
//! failed check makes the command fail.

use crate::config;
use crate::error::CliError;
use crate::ui;
use pokerview_bot::outbox::OUTBOX_LOG;
use pokerview_engine::AssetError;
use pokerview_engine::assets::{AssetProvider, FsAssets};
use pokerview_engine::cards::full_deck;
use std::io::Write;
use std::path::Path;

/// Represents a single diagnostic check result.
struct DoctorCheck {
    name: &'static str,
    ok: bool,
    detail: String,
    error: Option<String>,
}

impl DoctorCheck {
    fn ok(name: &'static str, detail: impl Into<String>) -> Self {
        DoctorCheck {
            name,
            ok: true,
            detail: detail.into(),
            error: None,
        }
    }

    fn fail(name: &'static str, detail: impl Into<String>, error: impl Into<String>) -> Self {
        DoctorCheck {
            name,
            ok: false,
            detail: detail.into(),
            error: Some(error.into()),
        }
    }

    fn to_value(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(
            "status".into(),
            serde_json::Value::String(if self.ok { "ok" } else { "fail" }.into()),
        );
        map.insert(
            "detail".into(),
            serde_json::Value::String(self.detail.clone()),
        );
        if let Some(err) = &self.error {
            map.insert("error".into(), serde_json::Value::String(err.clone()));
        }
        serde_json::Value::Object(map)
    }
}

fn check_asset<T>(name: &'static str, result: Result<T, AssetError>) -> DoctorCheck {
    match result {
        Ok(_) => DoctorCheck::ok(name, "loaded"),
        Err(e) => DoctorCheck::fail(name, e.kind().to_string(), e.to_string()),
    }
}

fn check_assets_dir(path: &Path) -> DoctorCheck {
    if path.is_dir() {
        DoctorCheck::ok("assets_dir", format!("{} exists", path.display()))
    } else {
        DoctorCheck::fail(
            "assets_dir",
            format!("Assets directory probe at {}", path.display()),
            format!("Assets directory {} does not exist", path.display()),
        )
    }
}

/// Card faces are only needed once cards are revealed on the desk.
fn check_card_faces(assets: &FsAssets) -> DoctorCheck {
    let deck = full_deck();
    let missing: Vec<String> = deck
        .iter()
        .filter(|card| assets.card_face(**card).is_err())
        .map(|card| card.asset_stem())
        .collect();
    if missing.is_empty() {
        DoctorCheck::ok("card_faces", format!("all {} card faces loaded", deck.len()))
    } else {
        DoctorCheck::fail(
            "card_faces",
            format!("{} of {} card faces loaded", deck.len() - missing.len(), deck.len()),
            format!("Missing or unreadable card faces: {}", missing.join(" ")),
        )
    }
}

fn check_outbox_dir(path: &Path) -> DoctorCheck {
    if let Err(e) = std::fs::create_dir_all(path) {
        return DoctorCheck::fail(
            "outbox_dir",
            format!("Outbox directory creation attempt at {}", path.display()),
            format!("Failed to create outbox directory: {}", e),
        );
    }
    let probe = path.join("pokerview-doctor-write.tmp");
    let result = std::fs::write(&probe, b"ok");
    let _ = std::fs::remove_file(&probe);
    match result {
        Ok(()) => DoctorCheck::ok(
            "outbox_dir",
            format!(
                "Outbox directory '{}' is writable ({} goes here)",
                path.display(),
                OUTBOX_LOG
            ),
        ),
        Err(e) => DoctorCheck::fail(
            "outbox_dir",
            format!("Outbox directory write attempt in {}", path.display()),
            format!("Outbox directory check failed: {}", e),
        ),
    }
}

/// Runs every check and prints `{"checks": {...}}`.
///
/// Returns `Err(CliError::Config)` when any check fails, after the full
/// report has been written.
pub fn handle_doctor_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let config = match config::load_with_sources() {
        Ok(resolved) => resolved.config,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };
    let assets = FsAssets::new(config.assets_dir.clone());

    let checks = vec![
        check_assets_dir(&config.assets_dir),
        check_asset("table_background", assets.table_background()),
        check_asset("blank_card", assets.blank_card()),
        check_asset("anonymous_avatar", assets.anonymous_avatar()),
        check_asset("font", assets.font(config.font_size)),
        check_card_faces(&assets),
        check_outbox_dir(&config.outbox_dir),
    ];

    let mut report = serde_json::Map::new();
    let mut ok_all = true;
    for check in checks {
        if !check.ok {
            ok_all = false;
            if let Some(msg) = &check.error {
                ui::write_error(err, msg)?;
            }
        }
        report.insert(check.name.to_string(), check.to_value());
    }

    let output = serde_json::json!({
        "checks": serde_json::Value::Object(report)
    });
    let json_output = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize doctor report: {}", e)))?;
    writeln!(out, "{}", json_output)?;

    if ok_all {
        Ok(())
    } else {
        Err(CliError::Config(
            "Environment diagnostics failed".to_string(),
        ))
    }
}
