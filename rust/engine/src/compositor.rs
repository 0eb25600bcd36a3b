//! Table compositor.
//!
//! Builds the table picture in a fixed order: background, community card
//! placeholders, then per player the avatar, name, money, turn frame and two
//! face-down hole cards. Player order never matters because every element is
//! positioned by seat.

use image::imageops;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assets::{resize, AssetProvider, SizedFont};
use crate::encode::encode_jpeg;
use crate::errors::RenderError;
use crate::layout::Point;
use crate::table::TableRenderInfo;

/// Colours, offsets and sizes used while drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Fill of the margins above and below the table.
    pub background_color: [u8; 4],
    pub text_color: [u8; 4],
    pub frame_color: [u8; 4],
    /// How far the turn frame sits outside the avatar on every side.
    pub frame_stroke: u32,
    /// Thickness of the turn frame, drawn inward from its outer edge.
    pub frame_width: u32,
    pub font_size: f32,
    /// Name position relative to the avatar anchor, below the tallest avatar.
    pub name_offset: Point,
    /// Money position relative to the avatar anchor, below the tallest avatar.
    pub money_offset: Point,
    pub money_stroke: u32,
    pub desk_color: [u8; 4],
    pub desk_margin: u32,
    pub jpeg_quality: u8,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background_color: [255, 255, 255, 255],
            text_color: [0, 0, 0, 255],
            frame_color: [255, 0, 0, 255],
            frame_stroke: 5,
            frame_width: 5,
            font_size: 24.0,
            name_offset: Point::new(-80, 10),
            money_offset: Point::new(10, 40),
            money_stroke: 1,
            desk_color: [53, 101, 77, 255],
            desk_margin: 20,
            jpeg_quality: 85,
        }
    }
}

/// A composed table, before encoding.
#[derive(Debug, Clone)]
pub struct TableCanvas {
    pub image: RgbaImage,
    /// Outer rectangle of every turn frame that was drawn.
    pub highlight_frames: Vec<Rect>,
}

#[derive(Debug, Clone, Default)]
pub struct Compositor {
    style: RenderStyle,
}

impl Compositor {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Composes the table with every player on it.
    ///
    /// The canvas is as wide as the background and taller by twice the
    /// tallest avatar, with the background centred vertically. All assets are
    /// fetched before anything is drawn.
    pub fn compose_table(
        &self,
        assets: &dyn AssetProvider,
        table: &TableRenderInfo,
    ) -> Result<TableCanvas, RenderError> {
        let (_, avatar_height) = table.max_avatar_size()?;
        let background = assets.table_background()?;
        let blank = assets.blank_card()?;
        let font = assets.font(self.style.font_size)?;

        let layout = table.layout();
        let community_card = resize(
            &blank,
            layout.community_card.width,
            layout.community_card.height,
        );
        let hole_card = resize(&blank, layout.hole_card.width, layout.hole_card.height);

        let (width, table_height) = background.dimensions();
        let height = table_height + avatar_height * 2;
        let mut image = RgbaImage::from_pixel(width, height, Rgba(self.style.background_color));
        paste(&mut image, &background, Point::new(0, avatar_height as i32));

        for anchor in table.community_card_anchors() {
            paste(&mut image, &community_card, anchor);
        }

        let text_color = Rgba(self.style.text_color);
        let text_row = avatar_height as i32;
        let mut highlight_frames = Vec::new();
        for player in table.players() {
            let anchor = player.avatar_anchor(layout)?;
            paste(&mut image, &player.avatar, anchor);

            let name_at =
                anchor.offset(self.style.name_offset.x, text_row + self.style.name_offset.y);
            font.draw(&mut image, name_at, text_color, &player.name);

            let money_at =
                anchor.offset(self.style.money_offset.x, text_row + self.style.money_offset.y);
            self.draw_stroked(&mut image, &font, money_at, &player.money_label());

            if player.is_current_turn {
                highlight_frames.push(self.draw_frame(
                    &mut image,
                    anchor,
                    player.avatar.dimensions(),
                ));
            }

            for card_at in player.card_anchors(layout)? {
                paste(&mut image, &hole_card, card_at);
            }
        }

        debug!(
            layout = layout.name,
            players = table.players().len(),
            width,
            height,
            frames = highlight_frames.len(),
            "composed table"
        );
        Ok(TableCanvas {
            image,
            highlight_frames,
        })
    }

    /// Composes the table and encodes it as JPEG.
    pub fn render_table(
        &self,
        assets: &dyn AssetProvider,
        table: &TableRenderInfo,
    ) -> Result<Vec<u8>, RenderError> {
        let canvas = self.compose_table(assets, table)?;
        encode_jpeg(&canvas.image, self.style.jpeg_quality)
    }

    /// Text with an outline of the same colour, for legibility on the felt.
    fn draw_stroked(&self, image: &mut RgbaImage, font: &SizedFont, at: Point, text: &str) {
        let color = Rgba(self.style.text_color);
        let stroke = self.style.money_stroke as i32;
        for dy in -stroke..=stroke {
            for dx in -stroke..=stroke {
                font.draw(image, at.offset(dx, dy), color, text);
            }
        }
    }

    fn draw_frame(&self, image: &mut RgbaImage, anchor: Point, (w, h): (u32, u32)) -> Rect {
        let stroke = self.style.frame_stroke;
        let outer = Rect::at(anchor.x - stroke as i32, anchor.y - stroke as i32)
            .of_size(w + stroke * 2, h + stroke * 2);
        let color = Rgba(self.style.frame_color);
        for i in 0..self.style.frame_width {
            if outer.width() <= i * 2 || outer.height() <= i * 2 {
                break;
            }
            let ring = Rect::at(outer.left() + i as i32, outer.top() + i as i32)
                .of_size(outer.width() - i * 2, outer.height() - i * 2);
            draw_hollow_rect_mut(image, ring, color);
        }
        outer
    }
}

/// Alpha-composites `top` onto `canvas`, clipping anything off the edges.
pub(crate) fn paste(canvas: &mut RgbaImage, top: &RgbaImage, at: Point) {
    imageops::overlay(canvas, top, i64::from(at.x), i64::from(at.y));
}
