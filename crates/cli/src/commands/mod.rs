//! CLI Commands

pub mod categories;
pub mod codes;
pub mod export;

pub use categories::CategoriesCommand;
pub use codes::CodesCommand;
pub use export::ExportCommand;
