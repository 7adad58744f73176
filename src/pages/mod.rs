pub mod homework;
pub mod menu;
