// Animated GIF to per-frame PNG extraction

use anyhow::Result;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ImageFormat, RgbaImage};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::fs_ops::{ensure_dir, write_atomic};
use crate::cleanup::CleanupRegistry;
use crate::logging::Logger;

/// Encodes one decoded frame into an already-open output file.
pub trait FrameEncoder {
    fn encode(&mut self, frame: &RgbaImage, out: &mut File) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PngFrameEncoder;

impl FrameEncoder for PngFrameEncoder {
    fn encode(&mut self, frame: &RgbaImage, out: &mut File) -> Result<()> {
        let mut writer = BufWriter::new(out);
        frame.write_to(&mut writer, ImageFormat::Png)?;
        writer.flush()?;
        Ok(())
    }
}

/// `<output_dir>/<input file stem><index>.png`
pub fn frame_output_path(output_dir: &Path, input: &Path, index: usize) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    output_dir.join(format!("{}{}.png", stem, index))
}

/// Split a GIF into one PNG per frame using the default PNG encoder.
///
/// See [`extract_frames_with`].
pub fn extract_frames(
    path: &Path,
    output_dir: &Path,
    registry: &mut dyn CleanupRegistry,
    logger: &mut dyn Logger,
) -> Vec<PathBuf> {
    extract_frames_with(path, output_dir, &mut PngFrameEncoder, registry, logger)
}

/// Split a GIF into one image file per frame.
///
/// Returns the written paths in frame order; each one is also handed to
/// `registry` for deletion at cleanup. Nothing here is fatal: an unopenable
/// input warns and yields no paths, and a frame that fails to encode is
/// skipped with a warning. Frames are written through a temp file and
/// renamed into place, so a failed frame never leaves a partial file at its
/// output path. Existing outputs with the same names are overwritten.
pub fn extract_frames_with(
    path: &Path,
    output_dir: &Path,
    encoder: &mut dyn FrameEncoder,
    registry: &mut dyn CleanupRegistry,
    logger: &mut dyn Logger,
) -> Vec<PathBuf> {
    let mut written = Vec::new();

    let decoder = match open_gif(path) {
        Ok(d) => d,
        Err(e) => {
            logger.warn(format!("Failed to parse image file {}: {:#}", path.display(), e));
            return written;
        }
    };

    if let Err(e) = ensure_dir(output_dir) {
        logger.warn(format!(
            "Failed to create output directory {}: {}",
            output_dir.display(),
            e
        ));
        return written;
    }

    for (index, frame) in decoder.into_frames().enumerate() {
        let frame = match frame {
            Ok(f) => f,
            Err(e) => {
                // the decoder cannot resync past a corrupt frame
                logger.warn(format!(
                    "Failed to decode frame {} of {}: {}",
                    index,
                    path.display(),
                    e
                ));
                break;
            }
        };

        let export_path = frame_output_path(output_dir, path, index);
        match write_atomic(&export_path, |out| encoder.encode(frame.buffer(), out)) {
            Ok(p) => {
                registry.register_for_deletion(p.clone());
                written.push(p);
            }
            Err(e) => {
                logger.warn(format!(
                    "Failed to process frame {} of {}: {:#}",
                    index,
                    path.display(),
                    e
                ));
            }
        }
    }

    logger.info(format!(
        "Extracted {} frames from {}",
        written.len(),
        path.display()
    ));

    written
}

fn open_gif(path: &Path) -> Result<GifDecoder<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(GifDecoder::new(BufReader::new(file))?)
}
