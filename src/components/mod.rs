pub mod drop_zone;
pub mod file_summary;
pub mod menu_card;
pub mod site_header;
pub mod toaster;
