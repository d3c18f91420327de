/// Counters for the degraded paths the immediate-mode API never reports
/// as errors, plus flush totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub flushes: u64,
    pub draw_calls_issued: u64,
    pub vertices_uploaded: u64,
    /// Vertices refused because the active buffer was full.
    pub dropped_vertices: u64,
    /// Colors or texture coordinates refused for the same reason.
    pub dropped_attributes: u64,
    /// Calls ignored because they were illegal in the current state.
    pub rejected_calls: u64,
    pub stack_overflows: u64,
}

impl BatchStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
