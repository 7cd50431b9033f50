//! Fixed-tick playback engine.
//!
//! Consumes a built [`Sequence`] one frame per tick and writes per-joint
//! local rotations to the [`JointSink`]. Each tick works on a private copy
//! of the current frame: hand-channel gain, optional face smoothing, then
//! per-binding sample / smooth / bind-pose composition. Decoded clip data
//! is never mutated, so sequences replay identically.

use std::collections::HashMap;

use glam::{EulerRot, Quat, Vec3};
use log::{debug, warn};

use super::binding::Binding;
use super::sink::{JointId, JointSink};
use crate::clip::Frame;
use crate::schema::channels::{CHANNELS, FACE, HAND_LEFT, HAND_RIGHT, last_triplet_start};
use crate::schema::{ConfigError, PlayerConfig};
use crate::sequence::Sequence;

/// Playback lifecycle state. Pausing deactivates ticking but keeps the
/// built sequence around so `play` can restart it from frame zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
}

/// Drives one test joint straight from an arbitrary channel triplet,
/// bypassing the binding list. Diagnostic aid for finding channel offsets.
#[derive(Debug, Clone, Copy)]
pub struct DebugSweep {
    pub joint: JointId,
    pub start_index: usize,
}

/// Token-driven skeletal playback engine.
pub struct Player {
    config: PlayerConfig,
    bindings: Vec<Binding>,
    /// Startup rotation snapshot per bound joint; composition base for
    /// every tick and the restore target of `reset_pose`.
    bind_pose: HashMap<JointId, Quat>,
    sequence: Option<Sequence>,
    cursor: usize,
    state: PlaybackState,
    /// Previous smoothed face channels, persisted across ticks.
    prev_face: Vec<f32>,
    /// Previous smoothed Euler output per binding (by binding position,
    /// not by joint, so shared joints never alias).
    prev_euler: Vec<Vec3>,
    debug_sweep: Option<DebugSweep>,
}

/// Unity-convention Euler composition: degrees, applied Z then X then Y.
fn euler_deg_to_quat(euler: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        euler.y.to_radians(),
        euler.x.to_radians(),
        euler.z.to_radians(),
    )
}

impl Player {
    /// Validate the configuration, resolve bindings against the sink, and
    /// capture the bind pose of every bound joint.
    pub fn new(config: PlayerConfig, sink: &dyn JointSink) -> Result<Self, ConfigError> {
        config.validate()?;

        let bindings: Vec<Binding> = config
            .bindings
            .iter()
            .map(|b| Binding::resolve(b, sink))
            .collect();

        let mut bind_pose = HashMap::new();
        for binding in &bindings {
            if let Some(joint) = binding.joint {
                bind_pose
                    .entry(joint)
                    .or_insert_with(|| sink.local_rotation(joint));
            }
        }

        let prev_euler = vec![Vec3::ZERO; bindings.len()];

        Ok(Self {
            config,
            bindings,
            bind_pose,
            sequence: None,
            cursor: 0,
            state: PlaybackState::Idle,
            prev_face: vec![0.0; CHANNELS],
            prev_euler,
            debug_sweep: None,
        })
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Length of the active sequence, if any.
    pub fn sequence_len(&self) -> Option<usize> {
        self.sequence.as_ref().map(Sequence::len)
    }

    pub fn set_debug_sweep(&mut self, sweep: Option<DebugSweep>) {
        self.debug_sweep = sweep;
    }

    /// Atomically replace the active sequence and start playing from frame
    /// zero. An empty sequence supersedes the current one but leaves
    /// nothing to play.
    pub fn set_sequence(&mut self, sequence: Sequence) {
        self.cursor = 0;
        if sequence.is_empty() {
            warn!("built sequence is empty; nothing to play");
            self.sequence = None;
            self.state = PlaybackState::Idle;
        } else {
            debug!("sequence with {} frames active", sequence.len());
            self.sequence = Some(sequence);
            self.state = PlaybackState::Playing;
        }
    }

    /// Restart the current sequence from frame zero without rebuilding.
    /// No-op when no sequence is loaded.
    pub fn play(&mut self) {
        if self.sequence.is_some() {
            self.cursor = 0;
            self.state = PlaybackState::Playing;
        } else {
            debug!("play requested with no sequence loaded");
            self.state = PlaybackState::Idle;
        }
    }

    /// Stop ticking. The built sequence is retained; `play` restarts it
    /// from frame zero (pausing is not resumable from position).
    pub fn pause(&mut self) {
        self.state = PlaybackState::Idle;
    }

    /// Discard the sequence and restore every bound joint to its captured
    /// bind pose.
    pub fn reset_pose(&mut self, sink: &mut dyn JointSink) {
        self.sequence = None;
        self.cursor = 0;
        self.state = PlaybackState::Idle;
        for (&joint, &rotation) in &self.bind_pose {
            sink.set_local_rotation(joint, rotation);
        }
    }

    /// Advance playback by one frame. Only meaningful while playing; a
    /// cursor past the end of the sequence ends the play and returns the
    /// engine to idle.
    pub fn tick(&mut self, sink: &mut dyn JointSink) {
        if self.state != PlaybackState::Playing {
            return;
        }

        let mut frame: Frame = match self.sequence.as_ref().and_then(|s| s.frame(self.cursor)) {
            Some(frame) => frame.clone(),
            None => {
                debug!("sequence complete after {} frames", self.cursor);
                self.sequence = None;
                self.state = PlaybackState::Idle;
                return;
            }
        };

        self.apply_hand_gain(&mut frame);
        self.apply_face_smoothing(&mut frame);

        if let Some(sweep) = self.debug_sweep {
            if let Some(max) = last_triplet_start(frame.len()) {
                let s = sweep.start_index.min(max);
                let euler = Vec3::new(frame[s], frame[s + 1], frame[s + 2]);
                sink.set_local_rotation(sweep.joint, euler_deg_to_quat(euler));
            }
        }

        for (i, binding) in self.bindings.iter().enumerate() {
            let Some(joint) = binding.joint else {
                continue;
            };
            let Some(mut euler) = binding.sample(&frame) else {
                continue;
            };

            if binding.smooth > 0.0 {
                let a = 1.0 - binding.smooth;
                euler = self.prev_euler[i].lerp(euler, a);
                self.prev_euler[i] = euler;
            }

            let delta = euler_deg_to_quat(euler);
            let bind = match self.bind_pose.get(&joint) {
                Some(&q) => q,
                None => sink.local_rotation(joint),
            };
            sink.set_local_rotation(joint, bind * delta);
        }

        self.cursor += 1;
    }

    fn apply_hand_gain(&self, frame: &mut Frame) {
        let gain = self.config.hand_gain;
        for range in [HAND_LEFT, HAND_RIGHT] {
            let end = range.end.min(frame.len());
            if range.start < end {
                for v in &mut frame[range.start..end] {
                    *v *= gain;
                }
            }
        }
    }

    fn apply_face_smoothing(&mut self, frame: &mut Frame) {
        if self.config.face_smooth <= 0.0 {
            return;
        }
        let a = 1.0 - self.config.face_smooth;
        let end = FACE.end.min(frame.len());
        for i in FACE.start..end {
            frame[i] = self.prev_face[i] + (frame[i] - self.prev_face[i]) * a;
            self.prev_face[i] = frame[i];
        }
    }
}
