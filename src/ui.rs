use crate::clock::local_now;
use crate::config::LandingConfig;
use crate::greeting::resolve;
use crate::theme::theme_definition;
use crate::types::{Greeting, ThemeMode};
use crate::views::LandingView;
use dioxus::prelude::*;
use std::time::Duration;

const LANDING_CSS: Asset = asset!("/assets/landing.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let greeting = use_signal(Greeting::default);

    use_greeting_refresh(greeting, config.greeting_refresh);

    rsx! {
        document::Title { "{config.page_title}" }
        document::Meta { name: "description", content: "{config.page_description}" }
        ThemeStyles { theme: config.theme }
        LandingView { config: config.clone(), greeting }
    }
}

fn load_config() -> LandingConfig {
    LandingConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to default landing config");
        LandingConfig::default()
    })
}

/// Resolves the greeting once mounted and keeps it current.
fn use_greeting_refresh(greeting: Signal<Greeting>, interval: Duration) {
    use_effect(move || {
        let mut greeting = greeting;
        greeting.set(resolve(local_now()));
        spawn_refresh(greeting, interval);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_refresh(mut greeting: Signal<Greeting>, interval: Duration) {
    spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            greeting.set(resolve(local_now()));
        }
    });
}

// The tokio timer needs a native runtime; in the browser the greeting is
// resolved once per page load.
#[cfg(target_arch = "wasm32")]
fn spawn_refresh(_greeting: Signal<Greeting>, _interval: Duration) {}

#[component]
fn ThemeStyles(theme: ThemeMode) -> Element {
    let definition = theme_definition(theme);
    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}
