use std::path::{Path, PathBuf};

use egui::{Color32, ColorImage};
use image::imageops::FilterType;
use thiserror::Error;

use crate::config::{ITEM_RADIUS, ITEM_RED};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image '{}' not found", .0.display())]
    Missing(PathBuf),
    #[error("failed to decode '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Main item artwork. `loaded` is false when the placeholder stands in for it.
pub struct ItemImage {
    pub image: ColorImage,
    pub loaded: bool,
}

/// Decodes `path` and optionally scales it to exactly `size`.
pub fn load_image(path: &Path, size: Option<[u32; 2]>) -> Result<ColorImage, AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing(path.to_path_buf()));
    }
    let mut img = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some([w, h]) = size {
        img = img.resize_exact(w, h, FilterType::Triangle);
    }
    let rgba = img.to_rgba8();
    let dims = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(dims, rgba.as_raw()))
}

/// Never fails: a missing or unreadable file falls back to a red disc.
pub fn load_item_image(path: &Path) -> ItemImage {
    let side = (ITEM_RADIUS * 2.0) as u32;
    match load_image(path, Some([side, side])) {
        Ok(image) => {
            tracing::info!("Loaded image: {}", path.display());
            ItemImage {
                image,
                loaded: true,
            }
        }
        Err(err) => {
            tracing::warn!("{err}. Using placeholder circle.");
            ItemImage {
                image: placeholder_circle(side as usize, ITEM_RED),
                loaded: false,
            }
        }
    }
}

/// Menu backdrop; `None` means the menu paints a flat fill instead.
pub fn load_background(path: &Path, size: [u32; 2]) -> Option<ColorImage> {
    load_image(path, Some(size))
        .map_err(|err| tracing::warn!("{err}. Using flat background."))
        .ok()
}

pub fn placeholder_circle(side: usize, color: Color32) -> ColorImage {
    let mut image = ColorImage::new([side, side], Color32::TRANSPARENT);
    let r = side as f32 / 2.0;
    for y in 0..side {
        for x in 0..side {
            let dx = x as f32 + 0.5 - r;
            let dy = y as f32 + 0.5 - r;
            if dx * dx + dy * dy <= r * r {
                image.pixels[y * side + x] = color;
            }
        }
    }
    image
}
