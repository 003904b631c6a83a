use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

use scio::theme::{THEME_STORAGE_KEY, Theme};

/// The theme configuration handed to consumers: the boolean dark-mode flag
/// together with its setter, as one explicit object rather than two ambient
/// lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    pub dark_mode: bool,
    pub set_dark_mode: Callback<bool>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

/// Owns the dark-mode flag for the whole app.
///
/// On mount the flag is read from local storage; only a persisted `"light"`
/// selects the light theme, everything else (including a missing key) means
/// dark. Every change is written back to storage and mirrored onto the
/// `dark` class of the document element so the stylesheet can follow.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let dark_mode = use_state(|| {
        LocalStorage::get::<String>(THEME_STORAGE_KEY)
            .map(|s| Theme::parse(&s))
            .unwrap_or_default()
            .is_dark()
    });

    let set_dark_mode = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |value: bool| {
            LocalStorage::set(THEME_STORAGE_KEY, Theme::from_dark_mode(value).as_str()).ok();
            dark_mode.set(value);
        })
    };

    use_effect_with(*dark_mode, |dark_mode| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(html) = document.document_element() {
                let class_list = html.class_list();
                if *dark_mode {
                    class_list.add_1("dark").ok();
                } else {
                    class_list.remove_1("dark").ok();
                }
            }
        }
    });

    let context = ThemeContext {
        dark_mode: *dark_mode,
        set_dark_mode,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}
