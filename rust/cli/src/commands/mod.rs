//! Command handler modules for the pokerview CLI.
//!
//! Each command lives in its own file and exposes one
//! `handle_COMMAND_command(..., out, err) -> Result<(), CliError>` function.
//! Output streams are passed in so tests can capture them.

mod cfg;
mod desk;
mod doctor;
mod layout;
mod post;
mod render;

pub use cfg::handle_cfg_command;
pub use desk::handle_desk_command;
pub use doctor::handle_doctor_command;
pub use layout::handle_layout_command;
pub use post::handle_post_command;
pub use render::handle_render_command;

use pokerview_engine::assets::{CachedAssets, FsAssets};
use pokerview_engine::compositor::{Compositor, RenderStyle};

use crate::config::Config;

/// Disk assets rooted at the configured directory, loaded at most once.
fn assets_for(config: &Config) -> CachedAssets<FsAssets> {
    CachedAssets::new(FsAssets::new(config.assets_dir.clone()))
}

fn compositor_for(config: &Config) -> Compositor {
    Compositor::new(RenderStyle {
        font_size: config.font_size,
        jpeg_quality: config.jpeg_quality,
        ..RenderStyle::default()
    })
}
