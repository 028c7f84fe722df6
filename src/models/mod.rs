// Module exports for models

pub mod selection;
pub mod settings;
pub mod slot;
pub mod week;
