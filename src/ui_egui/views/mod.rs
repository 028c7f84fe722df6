//! Grid rendering for the availability picker.

pub mod grid;
mod palette;

pub use palette::GridPalette;
