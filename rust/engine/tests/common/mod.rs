#![allow(dead_code)]

use std::sync::Arc;

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use pokerview_engine::assets::{MemoryAssets, Typeface};
use pokerview_engine::layout::Point;

pub const FELT: Rgba<u8> = Rgba([0, 100, 0, 255]);
pub const CARD_BACK: Rgba<u8> = Rgba([0, 0, 200, 255]);
pub const AVATAR: Rgba<u8> = Rgba([230, 200, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

pub const TABLE_WIDTH: u32 = 1920;
pub const TABLE_HEIGHT: u32 = 1200;

/// Paints every string as a solid block, 8px per character and `size` tall.
#[derive(Debug, Default)]
pub struct BlockTypeface;

impl Typeface for BlockTypeface {
    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        origin: Point,
        size: f32,
        color: Rgba<u8>,
        text: &str,
    ) {
        let (w, h) = self.text_size(size, text);
        if w == 0 || h == 0 {
            return;
        }
        draw_filled_rect_mut(canvas, Rect::at(origin.x, origin.y).of_size(w, h), color);
    }

    fn text_size(&self, size: f32, text: &str) -> (u32, u32) {
        (text.chars().count() as u32 * 8, size.round() as u32)
    }
}

pub fn solid(w: u32, h: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(w, h, color)
}

pub fn avatar(w: u32, h: u32) -> RgbaImage {
    solid(w, h, AVATAR)
}

pub fn fixture_assets() -> MemoryAssets {
    MemoryAssets::new(
        solid(TABLE_WIDTH, TABLE_HEIGHT, FELT),
        solid(40, 52, CARD_BACK),
        Arc::new(BlockTypeface),
    )
}

pub fn close(a: &Rgba<u8>, b: &Rgba<u8>) -> bool {
    a.0.iter()
        .zip(b.0.iter())
        .all(|(x, y)| (*x as i16 - *y as i16).abs() <= 2)
}

pub fn count_pixels(image: &RgbaImage, color: Rgba<u8>) -> usize {
    image.pixels().filter(|p| **p == color).count()
}
