//! `layout`: dumps the coordinates of a seat layout.

use std::io::Write;

use pokerview_engine::layout::{LayoutKind, SeatLayout};
use serde_json::json;

use crate::config::{self, Overrides};
use crate::error::CliError;

pub fn handle_layout_command(
    layout: Option<LayoutKind>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let kind = config::resolve(Overrides {
        layout,
        ..Overrides::default()
    })?
    .config
    .layout;
    let report = describe(kind.layout())?;
    let json_str = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

fn describe(layout: &SeatLayout) -> Result<serde_json::Value, CliError> {
    let seats = (0..layout.seat_count())
        .map(|seat| {
            Ok(json!({
                "seat": seat,
                "avatar": layout.avatar_anchor(seat)?,
                "cards": layout.card_anchors(seat)?,
            }))
        })
        .collect::<Result<Vec<_>, CliError>>()?;

    Ok(json!({
        "name": layout.name,
        "seats": seats,
        "community": layout.community_anchors(),
        "community_card": layout.community_card,
        "hole_card": layout.hole_card,
        "card_spacing": layout.card_spacing,
    }))
}
