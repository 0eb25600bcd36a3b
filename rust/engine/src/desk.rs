//! Community-cards-only rendering, posted as the hand progresses.

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::assets::{resize, AssetProvider};
use crate::cards::Card;
use crate::compositor::{paste, Compositor};
use crate::encode::encode_png;
use crate::errors::RenderError;
use crate::layout::{Point, SeatLayout, COMMUNITY_SLOTS};

impl Compositor {
    /// Draws the five community slots on a small felt canvas.
    ///
    /// Slot `i` shows the face of `cards[i]` when that card has been revealed
    /// and the blank card otherwise. Slots keep the relative spacing of the
    /// layout's community anchors.
    pub fn compose_desk(
        &self,
        assets: &dyn AssetProvider,
        layout: &SeatLayout,
        cards: &[Card],
    ) -> Result<RgbaImage, RenderError> {
        if cards.len() > COMMUNITY_SLOTS {
            return Err(RenderError::TooManyCommunityCards { count: cards.len() });
        }
        let size = layout.community_card;
        let blank = resize(&assets.blank_card()?, size.width, size.height);
        let faces = cards
            .iter()
            .map(|card| {
                assets
                    .card_face(*card)
                    .map(|face| resize(&face, size.width, size.height))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let anchors = layout.community_anchors();
        let min_x = anchors.iter().map(|p| p.x).min().unwrap_or(0);
        let max_x = anchors.iter().map(|p| p.x).max().unwrap_or(0);
        let min_y = anchors.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = anchors.iter().map(|p| p.y).max().unwrap_or(0);

        let margin = self.style().desk_margin;
        let width = (max_x - min_x) as u32 + size.width + margin * 2;
        let height = (max_y - min_y) as u32 + size.height + margin * 2;
        let mut image = RgbaImage::from_pixel(width, height, Rgba(self.style().desk_color));

        for (slot, anchor) in anchors.iter().enumerate() {
            let at = Point::new(
                anchor.x - min_x + margin as i32,
                anchor.y - min_y + margin as i32,
            );
            paste(&mut image, faces.get(slot).unwrap_or(&blank), at);
        }

        debug!(revealed = cards.len(), width, height, "composed desk");
        Ok(image)
    }

    /// Composes the desk and encodes it as PNG.
    pub fn render_desk(
        &self,
        assets: &dyn AssetProvider,
        layout: &SeatLayout,
        cards: &[Card],
    ) -> Result<Vec<u8>, RenderError> {
        let image = self.compose_desk(assets, layout, cards)?;
        encode_png(&image)
    }
}
