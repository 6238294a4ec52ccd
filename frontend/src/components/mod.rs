pub mod map_panel;
pub mod title_bar;
pub mod viewer;
