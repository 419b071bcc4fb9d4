pub mod console;
pub mod display;
pub mod menu;
pub mod messages;

pub use console::Console;
pub use menu::Menu;
