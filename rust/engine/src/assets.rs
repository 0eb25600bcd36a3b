//! Asset lookup for the compositor.
//!
//! The compositor never touches the file system itself; it asks an
//! [`AssetProvider`] for the table background, the blank card, card faces and
//! the label font. Every lookup either yields the asset or a typed
//! [`AssetError`], and a failed lookup aborts the render.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use ab_glyph::{FontArc, PxScale};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::cards::Card;
use crate::errors::AssetError;
use crate::layout::Point;

/// Side length avatars are normalised to before rendering.
pub const AVATAR_SIZE: u32 = 80;

pub const TABLE_BACKGROUND_FILE: &str = "poker_table.jpeg";
pub const BLANK_CARD_FILE: &str = "unknown_card.png";
pub const ANONYMOUS_AVATAR_FILE: &str = "anonymous.png";
pub const FONT_FILE: &str = "FreeMonoBold.ttf";
pub const CARD_FACES_DIR: &str = "cards";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AssetKind {
    TableBackground,
    BlankCard,
    AnonymousAvatar,
    CardFace(Card),
    Font,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::TableBackground => f.write_str("Poker table image"),
            AssetKind::BlankCard => f.write_str("Blank card image"),
            AssetKind::AnonymousAvatar => f.write_str("Anonymous avatar image"),
            AssetKind::CardFace(card) => write!(f, "Card image {}", card),
            AssetKind::Font => f.write_str("Font"),
        }
    }
}

/// Something that can put text on a canvas.
pub trait Typeface: Send + Sync {
    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        origin: Point,
        size: f32,
        color: Rgba<u8>,
        text: &str,
    );

    fn text_size(&self, size: f32, text: &str) -> (u32, u32);
}

impl Typeface for FontArc {
    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        origin: Point,
        size: f32,
        color: Rgba<u8>,
        text: &str,
    ) {
        draw_text_mut(canvas, color, origin.x, origin.y, PxScale::from(size), self, text);
    }

    fn text_size(&self, size: f32, text: &str) -> (u32, u32) {
        text_size(PxScale::from(size), self, text)
    }
}

/// A typeface bound to a pixel size.
#[derive(Clone)]
pub struct SizedFont {
    face: Arc<dyn Typeface>,
    size: f32,
}

impl fmt::Debug for SizedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizedFont").field("size", &self.size).finish()
    }
}

impl SizedFont {
    pub fn new(face: Arc<dyn Typeface>, size: f32) -> Self {
        Self { face, size }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn draw(&self, canvas: &mut RgbaImage, origin: Point, color: Rgba<u8>, text: &str) {
        self.face.draw_text(canvas, origin, self.size, color, text);
    }

    pub fn measure(&self, text: &str) -> (u32, u32) {
        self.face.text_size(self.size, text)
    }
}

pub trait AssetProvider {
    fn table_background(&self) -> Result<RgbaImage, AssetError>;

    /// Face-down card used for every placeholder.
    fn blank_card(&self) -> Result<RgbaImage, AssetError>;

    fn anonymous_avatar(&self) -> Result<RgbaImage, AssetError>;

    fn card_face(&self, card: Card) -> Result<RgbaImage, AssetError>;

    fn font(&self, size: f32) -> Result<SizedFont, AssetError>;
}

impl<P: AssetProvider + ?Sized> AssetProvider for &P {
    fn table_background(&self) -> Result<RgbaImage, AssetError> {
        (**self).table_background()
    }
    fn blank_card(&self) -> Result<RgbaImage, AssetError> {
        (**self).blank_card()
    }
    fn anonymous_avatar(&self) -> Result<RgbaImage, AssetError> {
        (**self).anonymous_avatar()
    }
    fn card_face(&self, card: Card) -> Result<RgbaImage, AssetError> {
        (**self).card_face(card)
    }
    fn font(&self, size: f32) -> Result<SizedFont, AssetError> {
        (**self).font(size)
    }
}

/// Loads assets from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the file for `kind` is expected to live.
    pub fn path_for(&self, kind: AssetKind) -> PathBuf {
        match kind {
            AssetKind::TableBackground => self.root.join(TABLE_BACKGROUND_FILE),
            AssetKind::BlankCard => self.root.join(BLANK_CARD_FILE),
            AssetKind::AnonymousAvatar => self.root.join(ANONYMOUS_AVATAR_FILE),
            AssetKind::CardFace(card) => self
                .root
                .join(CARD_FACES_DIR)
                .join(format!("{}.png", card.asset_stem())),
            AssetKind::Font => self.root.join(FONT_FILE),
        }
    }

    fn load_image(&self, kind: AssetKind) -> Result<RgbaImage, AssetError> {
        let path = self.path_for(kind);
        if !path.is_file() {
            return Err(AssetError::NotFound { kind, path });
        }
        match image::open(&path) {
            Ok(img) => Ok(img.into_rgba8()),
            Err(source) => Err(AssetError::Decode { kind, path, source }),
        }
    }
}

impl AssetProvider for FsAssets {
    fn table_background(&self) -> Result<RgbaImage, AssetError> {
        self.load_image(AssetKind::TableBackground)
    }

    fn blank_card(&self) -> Result<RgbaImage, AssetError> {
        self.load_image(AssetKind::BlankCard)
    }

    fn anonymous_avatar(&self) -> Result<RgbaImage, AssetError> {
        self.load_image(AssetKind::AnonymousAvatar)
    }

    fn card_face(&self, card: Card) -> Result<RgbaImage, AssetError> {
        self.load_image(AssetKind::CardFace(card))
    }

    fn font(&self, size: f32) -> Result<SizedFont, AssetError> {
        let path = self.path_for(AssetKind::Font);
        let bytes = fs::read(&path).map_err(|_| AssetError::NotFound {
            kind: AssetKind::Font,
            path: path.clone(),
        })?;
        let font = FontArc::try_from_vec(bytes).map_err(|_| AssetError::InvalidFont { path })?;
        Ok(SizedFont::new(Arc::new(font), size))
    }
}

/// Assets already held in memory, e.g. bundled into the binary.
#[derive(Clone)]
pub struct MemoryAssets {
    background: Option<RgbaImage>,
    blank_card: Option<RgbaImage>,
    anonymous_avatar: Option<RgbaImage>,
    card_faces: HashMap<Card, RgbaImage>,
    face: Option<Arc<dyn Typeface>>,
}

impl MemoryAssets {
    pub fn new(background: RgbaImage, blank_card: RgbaImage, face: Arc<dyn Typeface>) -> Self {
        Self {
            background: Some(background),
            blank_card: Some(blank_card),
            anonymous_avatar: None,
            card_faces: HashMap::new(),
            face: Some(face),
        }
    }

    /// A provider with nothing in it; every lookup fails with `NotFound`.
    pub fn empty() -> Self {
        Self {
            background: None,
            blank_card: None,
            anonymous_avatar: None,
            card_faces: HashMap::new(),
            face: None,
        }
    }

    pub fn with_background(mut self, image: RgbaImage) -> Self {
        self.background = Some(image);
        self
    }

    pub fn with_blank_card(mut self, image: RgbaImage) -> Self {
        self.blank_card = Some(image);
        self
    }

    pub fn without_background(mut self) -> Self {
        self.background = None;
        self
    }

    pub fn with_anonymous_avatar(mut self, image: RgbaImage) -> Self {
        self.anonymous_avatar = Some(image);
        self
    }

    pub fn with_card_face(mut self, card: Card, image: RgbaImage) -> Self {
        self.card_faces.insert(card, image);
        self
    }

    fn missing(kind: AssetKind) -> AssetError {
        AssetError::NotFound {
            kind,
            path: PathBuf::from("<memory>"),
        }
    }
}

impl fmt::Debug for MemoryAssets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryAssets")
            .field("background", &self.background.as_ref().map(|i| i.dimensions()))
            .field("blank_card", &self.blank_card.as_ref().map(|i| i.dimensions()))
            .field("card_faces", &self.card_faces.len())
            .field("has_font", &self.face.is_some())
            .finish()
    }
}

impl AssetProvider for MemoryAssets {
    fn table_background(&self) -> Result<RgbaImage, AssetError> {
        self.background
            .clone()
            .ok_or_else(|| Self::missing(AssetKind::TableBackground))
    }

    fn blank_card(&self) -> Result<RgbaImage, AssetError> {
        self.blank_card
            .clone()
            .ok_or_else(|| Self::missing(AssetKind::BlankCard))
    }

    fn anonymous_avatar(&self) -> Result<RgbaImage, AssetError> {
        self.anonymous_avatar
            .clone()
            .ok_or_else(|| Self::missing(AssetKind::AnonymousAvatar))
    }

    fn card_face(&self, card: Card) -> Result<RgbaImage, AssetError> {
        self.card_faces
            .get(&card)
            .cloned()
            .ok_or_else(|| Self::missing(AssetKind::CardFace(card)))
    }

    fn font(&self, size: f32) -> Result<SizedFont, AssetError> {
        self.face
            .clone()
            .map(|face| SizedFont::new(face, size))
            .ok_or_else(|| Self::missing(AssetKind::Font))
    }
}

/// Memoises successful lookups of an inner provider.
///
/// Assets are read-only, so one cache can serve every render in the process.
/// Failed lookups are not remembered and will hit the inner provider again.
pub struct CachedAssets<P> {
    inner: P,
    background: OnceLock<RgbaImage>,
    blank_card: OnceLock<RgbaImage>,
    anonymous_avatar: OnceLock<RgbaImage>,
    face: OnceLock<Arc<dyn Typeface>>,
    card_faces: Mutex<HashMap<Card, RgbaImage>>,
}

impl<P: AssetProvider> CachedAssets<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            background: OnceLock::new(),
            blank_card: OnceLock::new(),
            anonymous_avatar: OnceLock::new(),
            face: OnceLock::new(),
            card_faces: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

fn cached<T: Clone>(
    cell: &OnceLock<T>,
    load: impl FnOnce() -> Result<T, AssetError>,
) -> Result<T, AssetError> {
    if let Some(hit) = cell.get() {
        return Ok(hit.clone());
    }
    let value = load()?;
    Ok(cell.get_or_init(|| value).clone())
}

impl<P: AssetProvider> AssetProvider for CachedAssets<P> {
    fn table_background(&self) -> Result<RgbaImage, AssetError> {
        cached(&self.background, || self.inner.table_background())
    }

    fn blank_card(&self) -> Result<RgbaImage, AssetError> {
        cached(&self.blank_card, || self.inner.blank_card())
    }

    fn anonymous_avatar(&self) -> Result<RgbaImage, AssetError> {
        cached(&self.anonymous_avatar, || self.inner.anonymous_avatar())
    }

    fn card_face(&self, card: Card) -> Result<RgbaImage, AssetError> {
        if let Ok(faces) = self.card_faces.lock() {
            if let Some(hit) = faces.get(&card) {
                return Ok(hit.clone());
            }
        }
        let image = self.inner.card_face(card)?;
        if let Ok(mut faces) = self.card_faces.lock() {
            faces.insert(card, image.clone());
        }
        Ok(image)
    }

    fn font(&self, size: f32) -> Result<SizedFont, AssetError> {
        let face = cached(&self.face, || self.inner.font(size).map(|f| f.face))?;
        Ok(SizedFont::new(face, size))
    }
}

/// Scales `image` to exactly `width` x `height`.
pub fn resize(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    imageops::resize(image, width, height, FilterType::Lanczos3)
}

/// Scales `image` to a `size` x `size` square, ignoring aspect ratio.
pub fn resize_square(image: &RgbaImage, size: u32) -> RgbaImage {
    resize(image, size, size)
}
