// Directory texture loading

use anyhow::{Context, Result, anyhow};
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::draw::TextureSize;
use crate::logging::Logger;

/// Creates a texture handle from an image file on disk.
pub trait TextureLoader {
    type Texture;

    fn load(&mut self, path: &Path) -> Result<Self::Texture>;
}

/// Decoded RGBA pixels plus the file they came from.
#[derive(Debug, Clone)]
pub struct Texture {
    pub path: PathBuf,
    pub image: RgbaImage,
}

impl TextureSize for Texture {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Decodes files with the `image` crate; the default loader when no GPU
/// backend is involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageTextureLoader;

impl TextureLoader for ImageTextureLoader {
    type Texture = Texture;

    fn load(&mut self, path: &Path) -> Result<Texture> {
        let image = image::open(path)
            .with_context(|| format!("Failed to decode {}", path.display()))?
            .to_rgba8();
        Ok(Texture {
            path: path.to_path_buf(),
            image,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureOptions {
    /// lowercase, without the leading dot
    pub extensions: Vec<String>,
}

impl TextureOptions {
    pub fn new() -> Self {
        Self {
            extensions: vec!["png".to_string()],
        }
    }

    /// replace the recognized set; `".PNG"`, `"png"` and `"Png"` are equivalent
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        let ext = normalize_extension(extension);
        if !ext.is_empty() && !self.extensions.contains(&ext) {
            self.extensions.push(ext);
        }
        self
    }

    pub fn matches(&self, path: &Path) -> bool {
        match path.extension() {
            Some(ext) => {
                let ext_str = ext.to_string_lossy().to_lowercase();
                self.extensions.iter().any(|e| *e == ext_str)
            }
            None => false,
        }
    }
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

/// Regular files directly inside `dir` with a recognized extension, sorted
/// by the byte order of the full path.
pub fn scan_directory(dir: &Path, options: &TextureOptions) -> Result<Vec<PathBuf>> {
    let meta = fs::metadata(dir)
        .with_context(|| format!("Failed to open directory {}", dir.display()))?;
    if !meta.is_dir() {
        return Err(anyhow!("Not a directory: {}", dir.display()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to read directory {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && options.matches(path) {
            paths.push(path.to_path_buf());
        }
    }

    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(paths)
}

/// Load every recognized texture in `dir`, in sorted path order.
///
/// An unreadable directory is an error. Files that fail to load are skipped
/// with a warning, and ending up with no textures at all only warns.
pub fn textures_from_directory<L: TextureLoader + ?Sized>(
    dir: &Path,
    options: &TextureOptions,
    loader: &mut L,
    logger: &mut dyn Logger,
) -> Result<Vec<L::Texture>> {
    let paths = scan_directory(dir, options)?;
    let textures = load_all(&paths, loader, logger);

    if textures.is_empty() {
        logger.warn("Failed to load any textures!".to_string());
    }

    Ok(textures)
}

/// Load textures from an explicit list, keeping the caller's order.
pub fn textures_from_paths<L, P>(
    paths: &[P],
    loader: &mut L,
    logger: &mut dyn Logger,
) -> Vec<L::Texture>
where
    L: TextureLoader + ?Sized,
    P: AsRef<Path>,
{
    logger.info(format!("Parsing textures from {} paths", paths.len()));
    load_all(paths, loader, logger)
}

fn load_all<L, P>(paths: &[P], loader: &mut L, logger: &mut dyn Logger) -> Vec<L::Texture>
where
    L: TextureLoader + ?Sized,
    P: AsRef<Path>,
{
    let mut textures = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        match loader.load(path) {
            Ok(texture) => textures.push(texture),
            Err(e) => {
                logger.warn(format!("Failed to load texture {}: {:#}", path.display(), e));
            }
        }
    }

    textures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_options_default() {
        let opts = TextureOptions::default();
        assert_eq!(opts.extensions, vec!["png"]);
        assert!(opts.matches(Path::new("dir/a.png")));
        assert!(opts.matches(Path::new("dir/A.PNG")));
        assert!(!opts.matches(Path::new("dir/a.jpg")));
        assert!(!opts.matches(Path::new("dir/png")));
        assert!(!opts.matches(Path::new("dir/a.png.bak")));
    }

    #[test]
    fn test_texture_options_extend() {
        let opts = TextureOptions::new().with_extension(".JPG").with_extension("png");
        assert_eq!(opts.extensions, vec!["png", "jpg"]);
        assert!(opts.matches(Path::new("x.jpg")));
    }

    #[test]
    fn test_texture_options_replace() {
        let opts = TextureOptions::new().with_extensions(["bmp", " .tga", ""]);
        assert_eq!(opts.extensions, vec!["bmp", "tga"]);
        assert!(!opts.matches(Path::new("x.png")));
    }
}
