//! Sequence builder: token list → concatenated frame buffer.
//!
//! Each token resolves to a clip through the [`ClipMap`], loads through the
//! [`ClipSource`], and decodes into frames. Missing, empty, or unusable
//! clips skip their token; one bad token never aborts the sequence. A
//! configurable hold (repeated final frame) is appended after each clip.

use log::{debug, warn};

use crate::clip::{ClipMap, ClipSource, Frame, clip_path, decode_frames};
use crate::schema::PlayerConfig;

/// Immutable, fully built play sequence. Replaced wholesale between
/// builds; never mutated while active.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    frames: Vec<Frame>,
}

impl Sequence {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame at the given cursor position, if in range.
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }
}

/// Builds play sequences from ordered token lists.
pub struct SequenceBuilder<'a> {
    map: &'a ClipMap,
    source: &'a dyn ClipSource,
    hold_frames: usize,
}

impl<'a> SequenceBuilder<'a> {
    pub fn new(map: &'a ClipMap, source: &'a dyn ClipSource, config: &PlayerConfig) -> Self {
        Self {
            map,
            source,
            hold_frames: config.hold_frames(),
        }
    }

    /// Hold frames appended after each resolved clip.
    pub fn hold_frames(&self) -> usize {
        self.hold_frames
    }

    /// Build a sequence for the tokens, in order. Blank tokens and tokens
    /// whose clips are missing or unusable contribute nothing; an empty
    /// result means "nothing to play", not an error.
    pub fn build<I, S>(&self, tokens: I) -> Sequence
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frames: Vec<Frame> = Vec::new();

        for token in tokens {
            let token = token.as_ref().trim();
            if token.is_empty() {
                continue;
            }

            let file = self.map.resolve(token);
            let text = match self.source.read(&clip_path(&file)) {
                Ok(text) => text,
                Err(err) => {
                    warn!("token {token:?}: clip {file:?} missing ({err}); skipping");
                    continue;
                }
            };

            let clip = match decode_frames(&text) {
                Ok(clip) => clip,
                Err(err) => {
                    warn!("token {token:?}: clip {file:?} unusable ({err}); skipping");
                    continue;
                }
            };
            if clip.is_empty() {
                warn!("token {token:?}: clip {file:?} has no frames; skipping");
                continue;
            }

            debug!("token {token:?} -> {file:?} ({} frames)", clip.len());

            let last = clip.last().cloned();
            frames.extend(clip);
            if let Some(last) = last {
                for _ in 0..self.hold_frames {
                    frames.push(last.clone());
                }
            }
        }

        Sequence::new(frames)
    }
}
