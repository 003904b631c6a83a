use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ThemeToggle;
use crate::routes::Route;

#[function_component(PracticePage)]
pub fn practice_page() -> Html {
    html! {
        <div class="min-h-screen p-8">
            <header class="flex items-center justify-between mb-8">
                <h1 class="text-2xl font-bold">{ "Practice" }</h1>
                <ThemeToggle />
            </header>

            <p class="mb-6">
                { "Pick an event and work through its question sets. Timed tests and unlimited streams live here." }
            </p>

            <Link<Route> classes="underline" to={Route::Home}>{ "Back home" }</Link<Route>>
        </div>
    }
}
