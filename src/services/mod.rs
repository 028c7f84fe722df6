// Service module exports

pub mod export;
pub mod timezone;
