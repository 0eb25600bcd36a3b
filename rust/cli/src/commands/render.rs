//! `render`: table description in, JPEG out.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use super::{assets_for, compositor_for};
use crate::config::{self, Overrides};
use crate::error::CliError;
use crate::io_utils::write_image;
use crate::table_file::{base_dir, build_table, load_description};

pub fn handle_render_command(
    table: PathBuf,
    output: PathBuf,
    overrides: Overrides,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = config::resolve(overrides)?.config;
    let assets = assets_for(&config);

    let description = load_description(&table)?;
    let info = build_table(
        &description,
        config.layout.layout(),
        &assets,
        &base_dir(&table),
        err,
    )?;
    let jpeg = compositor_for(&config).render_table(&assets, &info)?;
    write_image(&output, &jpeg)?;

    info!(
        output = %output.display(),
        players = info.players().len(),
        bytes = jpeg.len(),
        "table rendered"
    );
    writeln!(
        out,
        "Rendered {} players on the {} layout to {}",
        info.players().len(),
        config.layout,
        output.display()
    )?;
    Ok(())
}
