use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ThemeToggle;
use crate::routes::Route;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <div class="min-h-screen p-8">
            <header class="flex items-center justify-between mb-8">
                <h1 class="text-2xl font-bold">{ "Dashboard" }</h1>
                <ThemeToggle />
            </header>

            <p class="mb-6">
                { "Past performance at a glance: scores, streaks, and per-event accuracy." }
            </p>

            <Link<Route> classes="underline" to={Route::Home}>{ "Back home" }</Link<Route>>
        </div>
    }
}
