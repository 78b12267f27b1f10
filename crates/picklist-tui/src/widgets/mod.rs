pub mod list_row;
pub mod selectable_list;
pub mod status_bar;
