use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

mod api;
mod components;
pub mod state;
pub mod types;

use components::index::Index;
use components::notices::Toaster;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Toaster>
            <Router>
                <Routes fallback=|| "Not found.">
                    <Route path=path!("/") view=Index/>
                </Routes>
            </Router>
        </Toaster>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {}", e);
    }
    leptos::mount::mount_to_body(App);
}
