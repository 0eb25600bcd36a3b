use std::path::PathBuf;

use thiserror::Error;

use crate::assets::AssetKind;

/// Seat or community-slot lookup outside the active layout.
///
/// These indicate a caller defect rather than a runtime condition.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LayoutError {
    #[error("Seat {seat} is out of range for a {seats}-seat layout")]
    SeatOutOfRange { seat: usize, seats: usize },
    #[error("Community card slot {slot} is out of range (0..5)")]
    SlotOutOfRange { slot: usize },
}

/// Failure to obtain a required asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("{kind} not found at {}", path.display())]
    NotFound { kind: AssetKind, path: PathBuf },
    #[error("Failed to decode {kind} at {}: {source}", path.display())]
    Decode {
        kind: AssetKind,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Invalid font file at {}", path.display())]
    InvalidFont { path: PathBuf },
}

impl AssetError {
    pub fn kind(&self) -> AssetKind {
        match self {
            AssetError::NotFound { kind, .. } | AssetError::Decode { kind, .. } => *kind,
            AssetError::InvalidFont { .. } => AssetKind::Font,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AssetError::NotFound { .. })
    }
}

/// Errors surfaced by a render call. Nothing is retried.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("Cannot size the canvas for a table with no players")]
    EmptyTable,
    #[error("At most 5 community cards can be shown, got {count}")]
    TooManyCommunityCards { count: usize },
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Invalid card: {token:?}")]
pub struct CardParseError {
    pub token: String,
}
