//! `desk`: community cards only, as PNG.

use std::io::Write;
use std::path::PathBuf;

use pokerview_engine::cards::parse_cards;
use tracing::info;

use super::{assets_for, compositor_for};
use crate::config::{self, Overrides};
use crate::error::CliError;
use crate::io_utils::write_image;

pub fn handle_desk_command(
    cards: &str,
    output: PathBuf,
    overrides: Overrides,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let config = config::resolve(overrides)?.config;
    let cards = parse_cards(cards)?;

    let png = compositor_for(&config).render_desk(
        &assets_for(&config),
        config.layout.layout(),
        &cards,
    )?;
    write_image(&output, &png)?;

    info!(output = %output.display(), revealed = cards.len(), "desk rendered");
    writeln!(
        out,
        "Rendered desk with {} revealed cards to {}",
        cards.len(),
        output.display()
    )?;
    Ok(())
}
