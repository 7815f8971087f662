pub mod badge;
pub mod button;

pub use badge::Badge;
pub use button::{Button, ButtonVariant};
