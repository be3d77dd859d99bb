mod components;
mod config;
mod controller;
mod service;
mod state;
mod util;
mod wheel;

fn main() {
    yew::Renderer::<components::app::App>::new().render();
}
