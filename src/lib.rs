// Library exports for paper-utils

pub mod assets;
pub mod cleanup;
pub mod color;
pub mod config;
pub mod draw;
pub mod geometry;
pub mod input;
pub mod logging;

// Re-export commonly used types
pub use assets::{
    convert::convert_to_png,
    gif_frames::{FrameEncoder, PngFrameEncoder, extract_frames, extract_frames_with},
    textures::{
        ImageTextureLoader, Texture, TextureLoader, TextureOptions, textures_from_directory,
        textures_from_paths,
    },
};
pub use cleanup::{CleanupList, CleanupRegistry};
pub use color::{Color, compare_color};
pub use config::PaperConfig;
pub use geometry::{Circle, Rect, Vector2};
pub use input::{MouseButton, MouseInput, MouseSnapshot};
pub use logging::{Logger, StderrLogger};
