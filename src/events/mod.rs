pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_help_toggle;
pub use pointer::{wire_pointer_handlers, PointerWiring};
