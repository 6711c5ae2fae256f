use crate::error::Result;
use crate::models::{GeneratedFile, OutputFormat, RenderSpec};
use crate::render::render_icon;
use chrono::Local;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::{DynamicImage, RgbImage};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{BufWriter, Read};
use std::path::Path;

/// Resolutions an ICO file carries, capped at the icon's own size.
const ICO_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Prefixes a message with the local wall-clock time.
pub fn timestamped(message: &str) -> String {
    format!("[{}] {}", Local::now().format("%H:%M:%S"), message)
}

/// Writes a timestamped line to stdout.
pub fn log_line(message: &str) {
    println!("{}", timestamped(message));
}

/// Calculates the SHA256 hash of a file.
pub fn calculate_hash(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0; 8192]; // 8KB buffer
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

fn ico_entry(image: &RgbImage) -> Result<IconDirEntry> {
    let (width, height) = image.dimensions();
    let rgba = DynamicImage::ImageRgb8(image.clone()).into_rgba8();
    let icon_image = IconImage::from_rgba_data(width, height, rgba.into_raw());
    Ok(IconDirEntry::encode(&icon_image)?)
}

/// Encodes `image` as an ICO container. Every standard favicon size below
/// the image's own is rendered fresh and packed in as an extra entry.
pub fn save_ico(image: &RgbImage, path: &Path) -> Result<()> {
    let size = image.width();
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for smaller in ICO_SIZES.iter().copied().filter(|&s| s < size) {
        icon_dir.add_entry(ico_entry(&render_icon(smaller))?);
    }
    icon_dir.add_entry(ico_entry(image)?);
    let file = BufWriter::new(File::create(path)?);
    icon_dir.write(file)?;
    Ok(())
}

/// Writes a rendered icon to its target path, overwriting any existing file.
pub fn save_icon(image: &RgbImage, spec: &RenderSpec) -> Result<GeneratedFile> {
    if let Some(parent) = spec.path.parent() {
        fs::create_dir_all(parent)?;
    }
    match spec.format {
        OutputFormat::Png => image.save_with_format(&spec.path, image::ImageFormat::Png)?,
        OutputFormat::Ico => save_ico(image, &spec.path)?,
    }
    Ok(GeneratedFile {
        path: spec.path.clone(),
        size: spec.size,
        bytes: fs::metadata(&spec.path)?.len(),
        hash: calculate_hash(&spec.path)?,
    })
}

/// Re-opens a written icon and reports what is actually on disk.
/// For ICO files the largest entry is the one decoded.
pub fn inspect_file(path: &Path) -> Result<GeneratedFile> {
    let decoded = image::open(path)?;
    Ok(GeneratedFile {
        path: path.to_path_buf(),
        size: decoded.width(),
        bytes: fs::metadata(path)?.len(),
        hash: calculate_hash(path)?,
    })
}
