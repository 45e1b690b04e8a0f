mod movement;
mod position;

pub use movement::{Company, MovementEvent, MovementType};
pub use position::{SlotPosition, position_difficulty};
