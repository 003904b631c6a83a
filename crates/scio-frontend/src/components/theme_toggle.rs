use yew::prelude::*;

use crate::providers::use_theme;

/// Button flipping the dark-mode flag through the theme context's setter.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();

    let onclick = {
        let set_dark_mode = theme.set_dark_mode.clone();
        let dark_mode = theme.dark_mode;
        Callback::from(move |_| set_dark_mode.emit(!dark_mode))
    };

    html! {
        <button
            class="rounded px-3 py-2 border border-slate-300 dark:border-slate-600 cursor-pointer"
            title={ if theme.dark_mode { "Switch to light theme" } else { "Switch to dark theme" } }
            {onclick}
        >
            { if theme.dark_mode { "🌙" } else { "☀️" } }
        </button>
    }
}
