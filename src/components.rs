pub mod map;
pub mod toast;
pub mod ui;

pub use map::ImpactMap;
pub use ui::*;
