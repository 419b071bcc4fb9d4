pub mod menus;
pub mod parser;
