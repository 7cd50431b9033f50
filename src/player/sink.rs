//! Scene-graph boundary: where computed joint rotations are written.
//!
//! The engine never owns joints. It reads local rotations once at startup
//! (bind-pose capture) and writes them every tick through this trait; the
//! host's rendering runtime sits behind it.

use std::collections::HashMap;

use glam::Quat;

/// Stable handle to one joint in the host scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JointId(pub usize);

/// Joint-transform sink the playback engine reads from and writes to.
pub trait JointSink {
    /// Look up a joint by its configured name.
    fn joint_id(&self, name: &str) -> Option<JointId>;

    /// Current local rotation of a joint.
    fn local_rotation(&self, joint: JointId) -> Quat;

    /// Overwrite a joint's local rotation.
    fn set_local_rotation(&mut self, joint: JointId, rotation: Quat);
}

/// In-memory sink recording joint rotations; backs the CLI runner and
/// tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    names: HashMap<String, JointId>,
    rotations: Vec<Quat>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a joint at identity rotation.
    pub fn add_joint(&mut self, name: impl Into<String>) -> JointId {
        self.add_joint_with_rotation(name, Quat::IDENTITY)
    }

    /// Register a joint with an initial local rotation (its rest pose).
    pub fn add_joint_with_rotation(&mut self, name: impl Into<String>, rotation: Quat) -> JointId {
        let id = JointId(self.rotations.len());
        self.rotations.push(rotation);
        self.names.insert(name.into(), id);
        id
    }

    pub fn joint_count(&self) -> usize {
        self.rotations.len()
    }
}

impl JointSink for RecordingSink {
    fn joint_id(&self, name: &str) -> Option<JointId> {
        self.names.get(name).copied()
    }

    fn local_rotation(&self, joint: JointId) -> Quat {
        self.rotations[joint.0]
    }

    fn set_local_rotation(&mut self, joint: JointId, rotation: Quat) {
        self.rotations[joint.0] = rotation;
    }
}
