use image::Rgb;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const BACKGROUND: Rgb<u8> = Rgb([0x1e, 0x29, 0x3b]); // slate-800
pub const CALENDAR: Rgb<u8> = Rgb([0xf1, 0xf5, 0xf9]); // slate-100
pub const HEADER: Rgb<u8> = Rgb([0x3b, 0x82, 0xf6]); // blue-500
pub const BADGE: Rgb<u8> = Rgb([0xef, 0x44, 0x44]); // red-500

/// Container format an icon is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Ico,
}

impl OutputFormat {
    /// `.ico` files get a real ICO container, everything else is PNG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ico") => OutputFormat::Ico,
            _ => OutputFormat::Png,
        }
    }
}

/// Which plan directory an entry is written into.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Icons,
    Public,
}

/// A single resolved render target: one size, one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSpec {
    pub size: u32,
    pub path: PathBuf,
    pub format: OutputFormat,
}

impl RenderSpec {
    pub fn new(size: u32, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = OutputFormat::from_path(&path);
        Self { size, path, format }
    }
}

/// Metadata about a file written (or re-read) by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub size: u32,
    pub bytes: u64,
    pub hash: String,
}

/// Messages passed from render workers to the driver.
#[derive(Clone, Debug, PartialEq)]
pub enum GenMessage {
    /// A target has been rendered and written to disk.
    Generated(GeneratedFile),
    /// Free-form log line to be printed by the driver.
    Log(String),
}
