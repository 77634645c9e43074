//! Sprite and background loading
//!
//! Images are decoded once at startup with the `image` crate, then uploaded
//! as macroquad textures. Decoding is split from uploading so it can run
//! without a GL context.
//!
//! The images are read relative to the working directory:
//!
//! ```text
//! assets/images/bee.png
//! assets/images/hornet.png
//! assets/images/forest.jpg
//! ```
//!
//! Older layouts kept them in a flat `image/` directory; move them under
//! `assets/images/` or build `AssetPaths::in_dir` with another root.

use std::path::{Path, PathBuf};
use image::RgbaImage;
use macroquad::texture::{FilterMode, Texture2D};
use thiserror::Error;
use crate::game::{EntityKind, SpriteSizes};

/// Directory the game looks in for its images
pub const ASSET_DIR: &str = "assets/images";

/// Startup asset failure. Any of these ends the process.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{} is {width}x{height}, textures are limited to {max}x{max}", .path.display())]
    TooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        max: u32,
    },
}

/// Where the three images live.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPaths {
    pub bee: PathBuf,
    pub hornet: PathBuf,
    pub forest: PathBuf,
}

impl AssetPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            bee: dir.join("bee.png"),
            hornet: dir.join("hornet.png"),
            forest: dir.join("forest.jpg"),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::in_dir(ASSET_DIR)
    }
}

/// Read and decode one image to RGBA8.
pub fn decode_image(path: &Path) -> Result<RgbaImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = image.to_rgba8();

    let max = u16::MAX as u32;
    if rgba.width() > max || rgba.height() > max {
        return Err(AssetError::TooLarge {
            path: path.to_path_buf(),
            width: rgba.width(),
            height: rgba.height(),
            max,
        });
    }
    Ok(rgba)
}

/// All three images decoded, not yet on the GPU.
pub struct DecodedAssets {
    pub bee: RgbaImage,
    pub hornet: RgbaImage,
    pub forest: RgbaImage,
}

impl DecodedAssets {
    pub fn decode(paths: &AssetPaths) -> Result<Self, AssetError> {
        Ok(Self {
            bee: decode_image(&paths.bee)?,
            hornet: decode_image(&paths.hornet)?,
            forest: decode_image(&paths.forest)?,
        })
    }

    pub fn sprite_sizes(&self) -> SpriteSizes {
        SpriteSizes::new(self.bee.dimensions(), self.hornet.dimensions())
    }
}

/// Uploaded textures, owned by the presenter.
pub struct Assets {
    pub bee: Texture2D,
    pub hornet: Texture2D,
    pub forest: Texture2D,
    sprite_sizes: SpriteSizes,
}

impl Assets {
    /// Decode and upload. Needs a live macroquad context.
    pub fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        let decoded = DecodedAssets::decode(paths)?;
        Ok(Self::upload(&decoded))
    }

    pub fn upload(decoded: &DecodedAssets) -> Self {
        Self {
            bee: upload_texture(&decoded.bee),
            hornet: upload_texture(&decoded.hornet),
            forest: upload_texture(&decoded.forest),
            sprite_sizes: decoded.sprite_sizes(),
        }
    }

    pub fn sprite_sizes(&self) -> SpriteSizes {
        self.sprite_sizes
    }

    pub fn sprite(&self, kind: EntityKind) -> &Texture2D {
        match kind {
            EntityKind::Bee => &self.bee,
            EntityKind::Hornet => &self.hornet,
        }
    }
}

fn upload_texture(image: &RgbaImage) -> Texture2D {
    // Dimensions were checked against u16 in decode_image
    let texture = Texture2D::from_rgba8(image.width() as u16, image.height() as u16, image.as_raw());
    texture.set_filter(FilterMode::Linear);
    texture
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};

    fn write_png(path: &Path, w: u32, h: u32) {
        let img = RgbaImage::from_pixel(w, h, Rgba([255, 200, 0, 255]));
        img.save_with_format(path, ImageFormat::Png).unwrap();
    }

    fn write_jpeg(path: &Path, w: u32, h: u32) {
        let img = image::RgbImage::from_pixel(w, h, image::Rgb([20, 90, 30]));
        img.save_with_format(path, ImageFormat::Jpeg).unwrap();
    }

    #[test]
    fn test_decode_all_and_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AssetPaths::in_dir(dir.path());
        write_png(&paths.bee, 64, 48);
        write_png(&paths.hornet, 90, 70);
        write_jpeg(&paths.forest, 32, 24);

        let decoded = DecodedAssets::decode(&paths).unwrap();
        assert_eq!(decoded.forest.dimensions(), (32, 24));
        let sizes = decoded.sprite_sizes();
        assert_eq!(sizes.bee, (64, 48));
        assert_eq!(sizes.hitbox(EntityKind::Hornet), (45, 35));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AssetPaths::in_dir(dir.path());
        let err = DecodedAssets::decode(&paths).err().unwrap();
        match &err {
            AssetError::Io { path, .. } => assert_eq!(path, &paths.bee),
            other => panic!("expected Io, got {:?}", other),
        }
        assert!(err.to_string().contains("bee.png"));
    }

    #[test]
    fn test_garbage_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AssetPaths::in_dir(dir.path());
        write_png(&paths.bee, 8, 8);
        std::fs::write(&paths.hornet, b"definitely not a png").unwrap();
        write_jpeg(&paths.forest, 8, 8);

        let err = DecodedAssets::decode(&paths).err().unwrap();
        assert!(matches!(err, AssetError::Decode { ref path, .. } if path == &paths.hornet));
        assert!(err.to_string().starts_with("failed to decode"));
    }

    #[test]
    fn test_default_paths() {
        let paths = AssetPaths::default();
        assert_eq!(paths.bee, Path::new("assets/images/bee.png"));
        assert_eq!(paths.hornet, Path::new("assets/images/hornet.png"));
        assert_eq!(paths.forest, Path::new("assets/images/forest.jpg"));
    }
}
