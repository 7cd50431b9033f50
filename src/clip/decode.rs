//! Frame decoder for the clip CSV format.
//!
//! A clip file is plain text: one frame per line, comma-separated f32
//! fields. Blank lines and lines starting with `#` are ignored. A single
//! non-numeric field makes the whole clip unusable; the caller skips the
//! token rather than salvaging partial frames.

/// One tick's worth of pose channels.
pub type Frame = Vec<f32>;

/// Frame decoding errors.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("line {line}, field {field}: {text:?} is not a number")]
    BadField {
        /// 1-based source line.
        line: usize,
        /// 0-based field on that line.
        field: usize,
        text: String,
    },
}

/// Decode raw clip text into an ordered list of frames.
///
/// An input with no data lines (empty, all blank, or all comments) decodes
/// to zero frames; the caller treats that as a missing clip, not an error.
pub fn decode_frames(text: &str) -> Result<Vec<Frame>, DecodeError> {
    let mut frames = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut frame = Frame::new();
        for (fieldno, field) in line.split(',').enumerate() {
            let field = field.trim();
            let value: f32 = field.parse().map_err(|_| DecodeError::BadField {
                line: lineno + 1,
                field: fieldno,
                text: field.to_string(),
            })?;
            frame.push(value);
        }
        frames.push(frame);
    }

    Ok(frames)
}
