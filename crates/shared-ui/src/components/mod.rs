// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod field;
pub mod page_header;
pub mod spinner;

// Landing and dashboard building blocks
pub mod hero;
pub mod tab_bar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use field::*;
pub use hero::*;
pub use page_header::*;
pub use spinner::*;
pub use tab_bar::*;
