pub mod button;
pub mod modal;
pub mod stat_card;

pub use button::*;
pub use modal::*;
pub use stat_card::*;
