// Asset acquisition: directory texture loading, GIF frame extraction and
// single-image conversion

pub mod convert;
pub mod fs_ops;
pub mod gif_frames;
pub mod textures;

pub use convert::convert_to_png;
pub use gif_frames::{
    FrameEncoder, PngFrameEncoder, extract_frames, extract_frames_with, frame_output_path,
};
pub use textures::{
    ImageTextureLoader, Texture, TextureLoader, TextureOptions, scan_directory,
    textures_from_directory, textures_from_paths,
};
