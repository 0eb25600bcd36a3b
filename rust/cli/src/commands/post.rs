//! `post`: renders a table and delivers it through the file outbox.

use std::io::Write;
use std::path::PathBuf;

use pokerview_bot::{ChatId, OutboxMessenger, PokerBotViewer};

use super::{assets_for, compositor_for};
use crate::config::{self, Overrides};
use crate::error::CliError;
use crate::table_file::{base_dir, build_table, load_description};

pub fn handle_post_command(
    chat: ChatId,
    table: PathBuf,
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

    let outbox = OutboxMessenger::new(&config.outbox_dir).map_err(pokerview_bot::BotError::from)?;
    let viewer = PokerBotViewer::new(
        &outbox,
        assets,
        compositor_for(&config),
        config.layout.layout(),
    );
    let message_id = viewer.show_table_with_players(chat, &info)?;

    writeln!(
        out,
        "Posted table to chat {} as message {} ({})",
        chat,
        message_id,
        outbox.log_path().display()
    )?;
    Ok(())
}
