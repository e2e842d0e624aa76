/// Source of transcript entry IDs. Renderers key their transcript lists on
/// these, so IDs must be unique within a session.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> String;
}

#[derive(Debug, Default)]
pub struct UuidIdGen;

impl IdGenerator for UuidIdGen {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic IDs (`"0"`, `"1"`, …) for tests and snapshots.
#[derive(Debug, Default)]
pub struct SequentialIdGen(u64);

impl SequentialIdGen {
    pub fn new() -> Self {
        Self(0)
    }
}

impl IdGenerator for SequentialIdGen {
    fn next_id(&mut self) -> String {
        let id = self.0;
        self.0 += 1;
        id.to_string()
    }
}
