mod components;
mod pages;
mod providers;
mod routes;

use yew::prelude::*;
use yew_router::prelude::*;

use providers::ThemeProvider;
use routes::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    scio::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
