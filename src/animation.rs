use crate::types::Prop;

/// A per-frame update. Receives the absolute elapsed time in seconds and the
/// scene's prop list; implementations recompute transforms from `time`
/// rather than integrating deltas, so replaying a time yields the same pose.
pub type UpdateFn = Box<dyn FnMut(f32, &mut [Prop])>;

/// Owns the ordered list of registered per-frame updates. Replaces the
/// original's module-level callback array with a component the app holds
/// and drives explicitly.
#[derive(Default)]
pub struct AnimationDriver {
    updates: Vec<UpdateFn>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an update. Updates run in registration order.
    pub fn register(&mut self, update: UpdateFn) {
        self.updates.push(update);
    }

    /// Run every registered update for this frame.
    pub fn run(&mut self, time: f32, props: &mut [Prop]) {
        for update in &mut self.updates {
            update(time, props);
        }
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}
