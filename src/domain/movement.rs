use {
    crate::{domain::SlotPosition, utils::hours_between},
    chrono::NaiveDateTime,
};

/// One document movement: who asked, when it was asked and finished, and where it went.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementEvent {
    pub company: String,
    pub requested_at: NaiveDateTime,
    pub completed_at: NaiveDateTime,
    pub position: SlotPosition,
    pub movement_type: String,
}

impl MovementEvent {
    /// Request-to-completion time in hours. Negative for completion before request.
    pub fn service_hours(&self) -> f64 {
        hours_between(self.requested_at, self.completed_at)
    }

    pub fn position_difficulty(&self) -> f64 {
        self.position.difficulty()
    }
}

/// Partner company as listed in the companies sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub name: String,
    pub external_id: Option<String>,
}

/// Entry of the movement-type catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementType {
    pub name: String,
}
