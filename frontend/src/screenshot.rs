use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::FrontendError;

/// First `lasergate-NNNN.png` in `dir` that does not exist yet.
pub fn next_path(dir: &Path) -> PathBuf {
    let mut n = 0u32;
    loop {
        let candidate = dir.join(format!("lasergate-{n:04}.png"));
        if !candidate.exists() || n == u32::MAX {
            return candidate;
        }
        n += 1;
    }
}

/// Write an RGB24 frame as an 8-bit PNG.
pub fn write_png(path: &Path, width: u32, height: u32, rgb: &[u8]) -> Result<(), FrontendError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = BufWriter::new(File::create(path)?);
    let mut encoder = png::Encoder::new(file, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgb)?;
    writer.finish()?;
    Ok(())
}
