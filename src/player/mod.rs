//! Playback engine: joint bindings, bind-pose capture, and the fixed-tick
//! state machine that writes rotations to the scene-graph sink.

mod binding;
mod engine;
mod sink;

pub use binding::Binding;
pub use engine::{DebugSweep, PlaybackState, Player};
pub use sink::{JointId, JointSink, RecordingSink};
