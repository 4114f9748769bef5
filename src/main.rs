use convex_landing::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("mounting Convex landing page");
    yew::Renderer::<App>::new().render();
}
