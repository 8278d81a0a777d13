// Presentation layer - Terminal view and operator commands
pub mod console;
pub mod view;
