use anyhow::{Context, Result};
use image::ImageFormat;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::fs_ops::write_atomic;
use crate::logging::Logger;

/// Decode `source` as `format` and write it to `destination` as a single
/// frame PNG. For animated sources only the first frame is kept.
pub fn convert_to_png(
    source: &Path,
    destination: &Path,
    format: ImageFormat,
    logger: &mut dyn Logger,
) -> Result<()> {
    let file = File::open(source).with_context(|| format!("Failed to open {}", source.display()))?;
    let image = image::load(BufReader::new(file), format)
        .with_context(|| format!("Failed to decode {} as {:?}", source.display(), format))?;

    let result = write_atomic(destination, |out| {
        let mut writer = BufWriter::new(out);
        image.write_to(&mut writer, ImageFormat::Png)?;
        writer.flush()?;
        Ok(())
    });

    match result {
        Ok(_) => {
            logger.info(format!(
                "Successfully converted {} to a PNG file format.",
                source.display()
            ));
            Ok(())
        }
        Err(e) => {
            logger.warn(format!("Failed to convert {} to a PNG file format.", source.display()));
            Err(e)
        }
    }
}
