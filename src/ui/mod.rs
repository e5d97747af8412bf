pub mod icons;
pub mod render;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use render::{NOT_FOUND, Renderer, error};
pub use table::snippet_table;
pub use theme::{theme, Theme};
