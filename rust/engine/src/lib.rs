//! # pokerview-engine: Poker Table Rendering Core
//!
//! Composes a picture of a poker table (background, player avatars, names,
//! chip counts, a frame around the player to act and face-down cards) from
//! already-resolved player data, and encodes it for delivery.
//!
//! ## Core Modules
//!
//! - [`layout`] - Fixed seat and community card coordinates for 6 and 8 seats
//! - [`table`] - Per-render snapshot of the players to draw
//! - [`assets`] - Asset lookup contract plus disk, memory and caching providers
//! - [`compositor`] - Table composition and JPEG rendering
//! - [`desk`] - Community-cards-only rendering as PNG
//! - [`encode`] - Image serialisation
//! - [`cards`] - Card values for the desk path
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pokerview_engine::assets::{resize_square, AssetProvider, FsAssets, AVATAR_SIZE};
//! use pokerview_engine::compositor::Compositor;
//! use pokerview_engine::layout::LayoutKind;
//! use pokerview_engine::table::{PlayerRenderInfo, TableRenderInfo};
//!
//! let assets = FsAssets::new("assets");
//! let avatar = resize_square(&assets.anonymous_avatar().unwrap(), AVATAR_SIZE);
//! let players = vec![PlayerRenderInfo::new(avatar, "alice", 1000, 0).with_current_turn(true)];
//! let table = TableRenderInfo::new(LayoutKind::Eight.layout(), players).unwrap();
//!
//! let jpeg = Compositor::default().render_table(&assets, &table).unwrap();
//! assert!(!jpeg.is_empty());
//! ```

pub mod assets;
pub mod cards;
pub mod compositor;
pub mod desk;
pub mod encode;
pub mod errors;
pub mod layout;
pub mod table;

pub use errors::{AssetError, CardParseError, LayoutError, RenderError};
