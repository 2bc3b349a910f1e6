pub mod app;
pub mod camera_controls;
pub mod legend;
pub mod legend_panel;
pub mod profile_panel;
pub mod star_map;
