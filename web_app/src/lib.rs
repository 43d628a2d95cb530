use leptos::prelude::*;
use leptos::mount::mount_to_body;
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod manager;

use components::OrderWizard;
use manager::OrderFormManager;
use order_core::FormSpec;

#[wasm_bindgen(start)]
pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    // The rendering layer owns the field set; everything below reads it
    // through the manager context.
    let manager = OrderFormManager::new(FormSpec::music_video());
    provide_context(manager);

    view! {
        <main class="min-h-screen bg-[#0a0a0a] text-white flex items-start justify-center p-4">
            <OrderWizard/>
        </main>
    }
}
