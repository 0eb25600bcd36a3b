#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use pokerview_engine::assets::{
    ANONYMOUS_AVATAR_FILE, BLANK_CARD_FILE, CARD_FACES_DIR, FONT_FILE, TABLE_BACKGROUND_FILE,
};
use pokerview_engine::cards::{Card, full_deck};
use tempfile::TempDir;

pub const ENV_KEYS: &[&str] = &[
    "POKERVIEW_CONFIG",
    "POKERVIEW_ASSETS_DIR",
    "POKERVIEW_LAYOUT",
    "POKERVIEW_FONT_SIZE",
    "POKERVIEW_JPEG_QUALITY",
    "POKERVIEW_OUTBOX_DIR",
];

/// Sets the given variables and clears every other `POKERVIEW_*` key for
/// the guard's lifetime. Tests using it must be `#[serial]`.
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in ENV_KEYS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
        for (key, value) in pairs {
            unsafe {
                std::env::set_var(key, value);
            }
        }
        EnvGuard { restores }
    }

    pub fn clean() -> Self {
        Self::apply(&[])
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

pub struct CliOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliOutput {
    let mut argv = vec!["pokerview"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = pokerview_cli::run(argv, &mut out, &mut err);
    CliOutput {
        code,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}

pub fn font_fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../engine/tests/fixtures/DejaVuSansMono-Bold.ttf")
}

pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    /// Background, blank card, anonymous avatar and font; no card faces.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir_all(&assets).unwrap();

        DynamicImage::ImageRgb8(RgbImage::from_pixel(1920, 1200, Rgb([0, 100, 0])))
            .save(assets.join(TABLE_BACKGROUND_FILE))
            .unwrap();
        RgbaImage::from_pixel(40, 52, Rgba([0, 0, 200, 255]))
            .save(assets.join(BLANK_CARD_FILE))
            .unwrap();
        RgbaImage::from_pixel(120, 120, Rgba([200, 200, 200, 255]))
            .save(assets.join(ANONYMOUS_AVATAR_FILE))
            .unwrap();
        fs::copy(font_fixture(), assets.join(FONT_FILE)).unwrap();

        Fixture { dir }
    }

    pub fn with_card_faces(self, cards: &[Card]) -> Self {
        let faces = self.assets_dir().join(CARD_FACES_DIR);
        fs::create_dir_all(&faces).unwrap();
        for card in cards {
            RgbaImage::from_pixel(20, 26, Rgba([255, 255, 255, 255]))
                .save(faces.join(format!("{}.png", card.asset_stem())))
                .unwrap();
        }
        self
    }

    pub fn with_full_deck(self) -> Self {
        self.with_card_faces(&full_deck())
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.dir.path().join("assets")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn arg(path: &Path) -> &str {
        path.to_str().unwrap()
    }
}

pub const TWO_PLAYERS_JSON: &str = r#"{
  "players": [
    {"name": "alice", "money": 1000, "seat": 0, "current_turn": true},
    {"name": "bob", "money": 750, "seat": 5}
  ]
}"#;
