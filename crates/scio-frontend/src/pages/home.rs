use yew::prelude::*;
use yew_router::prelude::*;

use scio::data::BlacklistsResponse;

use crate::components::{ParticleField, ThemeToggle};
use crate::providers::api;
use crate::routes::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let blacklists = use_state(|| None::<BlacklistsResponse>);
    let error_msg = use_state(|| None::<String>);

    {
        let blacklists = blacklists.clone();
        let error_msg = error_msg.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let api = api::create();
                match api.fetch_blacklists().await {
                    Ok(data) => blacklists.set(Some(data)),
                    Err(err) => error_msg.set(Some(format!("Error fetching blacklists: {err}"))),
                }
            });
        });
    }

    html! {
        <div class="min-h-screen p-8">
            <ParticleField />

            <header class="flex items-center justify-between mb-8">
                <h1 class="text-2xl font-bold">{ "Scio" }</h1>
                <ThemeToggle />
            </header>

            <p class="mb-6">
                { "Practice Science Olympiad test questions: browse practice sets, take timed tests, and track your performance." }
            </p>

            <nav class="mb-8 space-x-4">
                <Link<Route> classes="underline" to={Route::Practice}>{ "Practice" }</Link<Route>>
                <Link<Route> classes="underline" to={Route::Dashboard}>{ "Dashboard" }</Link<Route>>
            </nav>

            {
                if let Some(error) = error_msg.as_ref() {
                    html! {
                        <div class="p-4 bg-red-100 text-red-700 rounded">
                            <p>{ error }</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if let Some(data) = blacklists.as_ref() {
                    html! {
                        <section>
                            <h2 class="text-xl font-semibold mb-4">{ "Question exclusions" }</h2>
                            <ul class="space-y-1">
                                {
                                    data.blacklists.iter().map(|(event, blacklist)| {
                                        html! {
                                            <li key={event.clone()}>
                                                <span class="font-medium">{ event }</span>
                                                { format!(": {} excluded question(s)", blacklist.len()) }
                                            </li>
                                        }
                                    }).collect::<Html>()
                                }
                            </ul>
                        </section>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
