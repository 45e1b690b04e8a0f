use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovementTypeStats {
    pub movement_type: String,
    pub frequency: usize,
    pub avg_service_hours: f64,
    /// Whether the label is listed in the movement-type catalog sheet.
    pub cataloged: bool,
}
