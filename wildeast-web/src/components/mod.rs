pub mod brand;
pub mod config_error;
pub mod itinerary_sheet;
pub mod nav_arrow;
pub mod panel;
