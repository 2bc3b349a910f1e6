mod components;
mod config;
mod error;
mod interaction;
mod loader;
mod merge;
mod model;
mod projection;
mod render;
mod state;
mod util;

use components::app::App;

fn main() {
    util::init_logging(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
