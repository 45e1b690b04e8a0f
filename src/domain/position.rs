use {
    crate::config::ANALYSIS,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Retrieval-effort score of a storage position.
/// Shelves count down from `shelf_base` (shelf 1 weighs most), racks count up.
#[inline]
pub fn position_difficulty(rack: f64, shelf: f64) -> f64 {
    let w = ANALYSIS.difficulty;
    (w.shelf_base - shelf) * w.shelf_weight + rack * w.rack_weight
}

/// A rack/shelf coordinate in the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPosition {
    pub rack: u32,
    pub shelf: u32,
}

impl SlotPosition {
    pub fn new(rack: u32, shelf: u32) -> Self {
        Self { rack, shelf }
    }

    pub fn difficulty(&self) -> f64 {
        position_difficulty(self.rack as f64, self.shelf as f64)
    }

    /// Compact table label, `E<rack> / P<shelf>` (estante / prateleira).
    pub fn short_label(&self) -> String {
        format!("E{} / P{}", self.rack, self.shelf)
    }

    pub fn within_bounds(&self) -> bool {
        let bounds = ANALYSIS.slots;
        (1..=bounds.max_rack).contains(&self.rack) && (1..=bounds.max_shelf).contains(&self.shelf)
    }
}

impl fmt::Display for SlotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rack {}, shelf {}", self.rack, self.shelf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_matches_weighted_formula() {
        assert!((SlotPosition::new(5, 2).difficulty() - 9.2).abs() < 1e-9);
        assert!((SlotPosition::new(40, 10).difficulty() - 14.1).abs() < 1e-9);
        assert!((SlotPosition::new(10, 1).difficulty() - 11.4).abs() < 1e-9);
    }

    #[test]
    fn labels() {
        let slot = SlotPosition::new(10, 1);
        assert_eq!(slot.short_label(), "E10 / P1");
        assert_eq!(slot.to_string(), "rack 10, shelf 1");
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(SlotPosition::new(1, 1).within_bounds());
        assert!(SlotPosition::new(48, 12).within_bounds());
        assert!(!SlotPosition::new(49, 12).within_bounds());
        assert!(!SlotPosition::new(3, 13).within_bounds());
        assert!(!SlotPosition::new(0, 4).within_bounds());
    }
}
