mod cells;
mod loader;

pub use loader::load_workbook;
