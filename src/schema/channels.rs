//! Channel layout of the retarget frame format.
//!
//! Every decoded frame is a flat vector of 411 f32 channels. The prefix
//! holds body-joint Euler triplets (x, y, z degrees) addressed by each
//! binding's start index; two fixed ranges carry the hand channels and the
//! trailing range carries the face channels. These ranges are properties of
//! the capture pipeline, not per-binding configuration.

use std::ops::Range;

/// Total channel count of a nominal frame.
pub const CHANNELS: usize = 411;

/// Left-hand channel range, scaled by the hand gain.
pub const HAND_LEFT: Range<usize> = 99..162;

/// Right-hand channel range, scaled by the hand gain.
pub const HAND_RIGHT: Range<usize> = 162..225;

/// Face channel range, exponentially smoothed when face smoothing is on.
pub const FACE: Range<usize> = 225..411;

/// Last start index at which a full (x, y, z) triplet fits in a frame of
/// `len` channels. `None` when the frame holds less than one triplet.
pub fn last_triplet_start(len: usize) -> Option<usize> {
    len.checked_sub(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_partition_the_tail() {
        assert_eq!(HAND_LEFT.end, HAND_RIGHT.start);
        assert_eq!(HAND_RIGHT.end, FACE.start);
        assert_eq!(FACE.end, CHANNELS);
    }

    #[test]
    fn test_last_triplet_start() {
        assert_eq!(last_triplet_start(CHANNELS), Some(408));
        assert_eq!(last_triplet_start(3), Some(0));
        assert_eq!(last_triplet_start(2), None);
        assert_eq!(last_triplet_start(0), None);
    }
}
