use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::textures::TextureOptions;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaperConfig {
    /// extensions picked up by directory texture loading, with or without
    /// the leading dot
    #[serde(default = "default_texture_extensions")]
    pub texture_extensions: Vec<String>,

    /// where extracted GIF frames are written
    #[serde(default = "default_frame_output_dir")]
    pub frame_output_dir: PathBuf,
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self {
            texture_extensions: default_texture_extensions(),
            frame_output_dir: default_frame_output_dir(),
        }
    }
}

impl PaperConfig {
    /// `<config dir>/paper/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("paper").join("config.toml"))
    }

    pub fn texture_options(&self) -> TextureOptions {
        TextureOptions::new().with_extensions(self.texture_extensions.iter())
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let content = self
            .to_toml_string()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        if let Some(parent) = path.as_ref().parent() {
            crate::assets::fs_ops::ensure_dir(parent)?;
        }
        fs::write(path, content)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// a missing file yields the defaults; a malformed one is still an error
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        match Self::load_from_file(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }
}

fn default_texture_extensions() -> Vec<String> {
    vec!["png".to_string()]
}

fn default_frame_output_dir() -> PathBuf {
    PathBuf::from("assets")
}
