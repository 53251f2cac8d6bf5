#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

pub mod handlers;
pub mod stage;
pub mod state;
pub mod view;

pub use stage::Stage;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    let app_handlers = handlers::AppHandlers::new(&app_state);
    view::render_app(&app_state, &app_handlers)
}
