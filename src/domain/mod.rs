// Domain layer - Dashboard state and its pure helpers
pub mod camera;
pub mod dashboard;
pub mod elapsed;
