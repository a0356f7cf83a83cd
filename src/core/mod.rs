pub mod events;
pub mod hover;
pub mod spring;
pub mod tilt;
pub mod typed_text;

pub use events::*;
pub use hover::*;
pub use spring::*;
pub use tilt::*;
pub use typed_text::*;
