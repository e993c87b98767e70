pub mod canvas;
pub mod menu_bar;
pub mod status;
pub mod sync_bar;
pub mod viewers;
