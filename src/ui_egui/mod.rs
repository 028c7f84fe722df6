mod app;
pub mod views;

pub use app::AvailabilityApp;
