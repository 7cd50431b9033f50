//! Runtime joint bindings: configured channel mappings resolved against
//! the host scene graph.

use glam::Vec3;
use log::warn;

use super::sink::{JointId, JointSink};
use crate::clip::Frame;
use crate::schema::BindingConfig;
use crate::schema::channels::last_triplet_start;

/// One configured binding, resolved to a joint handle. A binding whose
/// joint is absent from the sink stays in the list but is skipped each
/// tick.
#[derive(Debug, Clone)]
pub struct Binding {
    pub joint: Option<JointId>,
    pub start_index: usize,
    pub add_offset: Vec3,
    pub scale: Vec3,
    pub smooth: f32,
    pub clamp_deg: Vec3,
}

impl Binding {
    /// Resolve a configured binding against the sink's joint registry.
    pub fn resolve(config: &BindingConfig, sink: &dyn JointSink) -> Self {
        let joint = sink.joint_id(&config.joint);
        if joint.is_none() {
            warn!(
                "binding for joint {:?} has no matching joint; it will be skipped",
                config.joint
            );
        }
        Self {
            joint,
            start_index: config.start_index,
            add_offset: Vec3::from_array(config.add_offset),
            scale: Vec3::from_array(config.scale),
            smooth: config.smooth,
            clamp_deg: Vec3::from_array(config.clamp_deg),
        }
    }

    /// Sample this binding's Euler triplet (degrees) from a frame: clamp
    /// the start index to the last full triplet, scale, offset, then clamp
    /// each axis to ±clamp_deg. Returns `None` when the frame holds less
    /// than one triplet.
    pub fn sample(&self, frame: &Frame) -> Option<Vec3> {
        let start = self.start_index.min(last_triplet_start(frame.len())?);
        let raw = Vec3::new(frame[start], frame[start + 1], frame[start + 2]);
        let euler = raw * self.scale + self.add_offset;
        Some(euler.clamp(-self.clamp_deg, self.clamp_deg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(start_index: usize) -> Binding {
        Binding {
            joint: Some(JointId(0)),
            start_index,
            add_offset: Vec3::ZERO,
            scale: Vec3::ONE,
            smooth: 0.0,
            clamp_deg: Vec3::splat(60.0),
        }
    }

    #[test]
    fn test_sample_reads_triplet() {
        let frame = vec![0.0, 10.0, 20.0, 30.0, 40.0];
        assert_eq!(binding(1).sample(&frame), Some(Vec3::new(10.0, 20.0, 30.0)));
    }

    #[test]
    fn test_sample_scale_and_offset() {
        let frame = vec![10.0, 20.0, 30.0];
        let b = Binding {
            scale: Vec3::new(2.0, 1.0, -1.0),
            add_offset: Vec3::new(1.0, -5.0, 0.0),
            ..binding(0)
        };
        assert_eq!(b.sample(&frame), Some(Vec3::new(21.0, 15.0, -30.0)));
    }

    #[test]
    fn test_sample_clamps_axes() {
        let frame = vec![500.0, -500.0, 10.0];
        let b = Binding {
            clamp_deg: Vec3::new(60.0, 45.0, 60.0),
            ..binding(0)
        };
        assert_eq!(b.sample(&frame), Some(Vec3::new(60.0, -45.0, 10.0)));
    }

    #[test]
    fn test_sample_clamps_start_index() {
        // Scenario D: out-of-range start falls back to the last full
        // triplet instead of indexing out of bounds.
        let frame = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(binding(9999).sample(&frame), Some(Vec3::new(4.0, 5.0, 6.0)));
    }

    #[test]
    fn test_sample_short_frame() {
        assert_eq!(binding(0).sample(&vec![1.0, 2.0]), None);
        assert_eq!(binding(0).sample(&Vec::new()), None);
    }
}
