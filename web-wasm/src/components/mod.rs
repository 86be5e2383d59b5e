pub mod header;
pub mod search_bar;
pub mod filters;
pub mod result_list;
pub mod result_card;
pub mod saved_panel;
pub mod toast;
