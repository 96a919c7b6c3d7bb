//! UI panels outside the 3D viewport

pub mod status_bar;
pub mod toolbar;
