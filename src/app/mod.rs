mod phases;
mod root;
mod state;

pub(crate) use phases::PhaseView;

pub(crate) use state::{
    ActivityLog, AppState, IdleState, LogLevel, LogLine, Session, WorkingState,
};

pub use root::App;
