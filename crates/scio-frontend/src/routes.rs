use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{DashboardPage, HomePage, PracticePage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/practice")]
    Practice,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Practice => html! { <PracticePage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::NotFound => html! { <div>{ "404 Not Found" }</div> },
    }
}
