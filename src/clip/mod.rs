//! Clip loading: frame decoding, the token→clip map, and the file-access
//! collaborator the loaders read through.

mod decode;
mod map;
mod source;

pub use decode::{DecodeError, Frame, decode_frames};
pub use map::{CLIP_MAP_RESOURCE, ClipMap, ClipMapEntry, DEFAULT_CLIP_SUFFIX};
pub use source::{CLIP_SUBDIR, ClipSource, DirSource, MemorySource, clip_path};
