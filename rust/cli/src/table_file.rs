//! Table description files.
//!
//! A description lists the players to draw:
//!
//! ```toml
//! [[players]]
//! name = "alice"
//! money = 1000
//! seat = 0
//! avatar = "avatars/alice.png"
//! current_turn = true
//! ```
//!
//! The same shape is accepted as JSON. Files ending in `.toml` are read as
//! TOML, everything else as JSON. Relative avatar paths are resolved against
//! the description's own directory.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use pokerview_engine::assets::{AVATAR_SIZE, AssetProvider, resize_square};
use pokerview_engine::layout::SeatLayout;
use pokerview_engine::table::{PlayerRenderInfo, TableRenderInfo};
use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;
use crate::io_utils::read_text;
use crate::ui;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableDescription {
    pub players: Vec<PlayerEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    pub money: u64,
    pub seat: usize,
    #[serde(default)]
    pub avatar: Option<PathBuf>,
    #[serde(default)]
    pub current_turn: bool,
}

pub fn parse_description(content: &str, path: &Path) -> Result<TableDescription, CliError> {
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let parsed = if is_toml {
        toml::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    };
    parsed.map_err(|e| {
        CliError::InvalidInput(format!("Invalid table description {}: {}", path.display(), e))
    })
}

pub fn load_description(path: &Path) -> Result<TableDescription, CliError> {
    let content = read_text(path).map_err(CliError::InvalidInput)?;
    parse_description(&content, path)
}

/// Loads avatars and builds the render snapshot.
///
/// Players without an avatar get the anonymous one. Every avatar is scaled
/// to the standard square size.
pub fn build_table(
    description: &TableDescription,
    layout: &'static SeatLayout,
    assets: &dyn AssetProvider,
    base_dir: &Path,
    err: &mut dyn Write,
) -> Result<TableRenderInfo, CliError> {
    let mut anonymous: Option<RgbaImage> = None;
    let mut seen = HashSet::new();
    let mut players = Vec::with_capacity(description.players.len());

    for entry in &description.players {
        if !seen.insert(entry.seat) {
            ui::display_warning(
                err,
                &format!("seat {} is used by more than one player", entry.seat),
            )?;
        }
        let avatar = match &entry.avatar {
            Some(path) => load_avatar(&base_dir.join(path))?,
            None => match &anonymous {
                Some(image) => image.clone(),
                None => {
                    let image = assets.anonymous_avatar()?;
                    anonymous = Some(image.clone());
                    image
                }
            },
        };
        debug!(name = %entry.name, seat = entry.seat, "player loaded");
        players.push(
            PlayerRenderInfo::new(
                resize_square(&avatar, AVATAR_SIZE),
                entry.name.clone(),
                entry.money,
                entry.seat,
            )
            .with_current_turn(entry.current_turn),
        );
    }

    Ok(TableRenderInfo::new(layout, players)?)
}

fn load_avatar(path: &Path) -> Result<RgbaImage, CliError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| {
            CliError::InvalidInput(format!("Failed to load avatar {}: {}", path.display(), e))
        })
}

/// Directory that relative avatar paths in `path` are resolved against.
pub fn base_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
