use crate::config::LandingConfig;
use crate::theme::theme_definition;
use crate::types::{Greeting, IconCategory};
use dioxus::prelude::*;

const BRAND_LOGO: Asset = asset!("/assets/evmak-logo.svg");

const HEADLINE: &str = "Empowering African SMEs with Nuvia Business Tool";
const SUBTITLE: &str = "From Tanzania to across Africa, EvMak's Nuvia helps small businesses manage finances, accept payments, and grow with confidence.";
const FOOTER_NOTE: &str = "© 2025 all rights reserved. Powered by Evmak Tanzania.";

const APPLE_GLYPH: &str = "M18.71 19.5c-.83 1.24-1.71 2.45-3.05 2.47-1.34.03-1.77-.79-3.29-.79-1.53 0-2 .77-3.27.82-1.31.05-2.3-1.32-3.14-2.53C4.25 17 2.94 12.45 4.7 9.39c.87-1.52 2.43-2.48 4.12-2.51 1.28-.02 2.5.87 3.29.87.78 0 2.26-1.07 3.81-.91.65.03 2.47.26 3.64 1.98-.09.06-2.17 1.28-2.15 3.81.03 3.02 2.65 4.03 2.68 4.04-.03.07-.42 1.44-1.38 2.83M13 3.5c.73-.83 1.94-1.46 2.94-1.5.13 1.17-.34 2.35-1.04 3.19-.69.85-1.83 1.51-2.95 1.42-.15-1.15.41-2.35 1.05-3.11z";
const PLAY_GLYPH: &str = "M3,20.5V3.5C3,2.91 3.34,2.39 3.84,2.15L13.69,12L3.84,21.85C3.34,21.6 3,21.09 3,20.5M16.81,15.12L6.05,21.34L14.54,12.85L16.81,15.12M20.16,10.81C20.5,11.08 20.75,11.5 20.75,12C20.75,12.5 20.53,12.9 20.18,13.18L17.89,14.5L15.39,12L17.89,9.5L20.16,10.81M6.05,2.66L16.81,8.88L14.54,11.15L6.05,2.66Z";

/// Stroke paths for the weather icon shown next to the greeting.
pub fn weather_icon_paths(icon: IconCategory) -> &'static [&'static str] {
    match icon {
        IconCategory::Sunny => &[
            "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8Z",
            "M12 2v2",
            "M12 20v2",
            "m4.93 4.93 1.41 1.41",
            "m17.66 17.66 1.41 1.41",
            "M2 12h2",
            "M20 12h2",
            "m6.34 17.66-1.41 1.41",
            "m19.07 4.93-1.41 1.41",
        ],
        IconCategory::Cloudy => &["M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"],
        IconCategory::Rainy => &[
            "M4 14.899A7 7 0 1 1 15.71 8h1.79a4.5 4.5 0 0 1 2.5 8.242",
            "M16 14v6",
            "M8 14v6",
            "M12 16v6",
        ],
    }
}

fn weather_icon_label(icon: IconCategory) -> &'static str {
    match icon {
        IconCategory::Sunny => "Sunny",
        IconCategory::Cloudy => "Cloudy",
        IconCategory::Rainy => "Rainy",
    }
}

#[component]
pub fn LandingView(config: LandingConfig, greeting: Signal<Greeting>) -> Element {
    rsx! {
        div { class: "landing",
            main { class: "landing-main",
                div { class: "landing-column",
                    GreetingBanner { greeting }
                    BrandLogo { config: config.clone() }
                    Hero {}
                    DownloadCard {
                        app_store_url: config.app_store_url.clone(),
                        play_store_url: config.play_store_url.clone(),
                    }
                }
            }
            Footer {}
        }
    }
}

#[component]
fn GreetingBanner(greeting: Signal<Greeting>) -> Element {
    let current = greeting();
    let payload = serde_json::to_string(&current).unwrap_or_default();
    let label = weather_icon_label(current.icon);
    rsx! {
        div { class: "greeting-banner", "data-greeting": "{payload}",
            svg {
                class: "weather-icon",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                role: "img",
                "aria-label": "{label}",
                for d in weather_icon_paths(current.icon) {
                    path { d: "{d}" }
                }
            }
            span { class: "greeting-text", "{current}" }
        }
    }
}

#[component]
fn BrandLogo(config: LandingConfig) -> Element {
    let theme = theme_definition(config.theme);
    rsx! {
        div { class: "brand",
            img { class: "{theme.logo_class}", src: BRAND_LOGO, alt: "EvMak Logo" }
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        div { class: "hero",
            h2 { class: "hero-title", "{HEADLINE}" }
            p { class: "hero-subtitle", "{SUBTITLE}" }
        }
    }
}

#[component]
fn DownloadCard(app_store_url: String, play_store_url: String) -> Element {
    rsx! {
        div { class: "download-card",
            div { class: "download-heading",
                h3 { "Download Nuvia Today" }
                p { class: "text-muted", "Get started with Africa's leading business management tool" }
            }
            div { class: "store-buttons",
                StoreButton {
                    href: app_store_url,
                    glyph: APPLE_GLYPH,
                    caption: "Download on the",
                    store: "App Store",
                }
                StoreButton {
                    href: play_store_url,
                    glyph: PLAY_GLYPH,
                    caption: "GET IT ON",
                    store: "Google Play",
                }
            }
        }
    }
}

#[component]
fn StoreButton(
    href: String,
    glyph: &'static str,
    caption: &'static str,
    store: &'static str,
) -> Element {
    rsx! {
        a {
            class: "store-button",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            div { class: "store-button-content",
                svg { class: "store-glyph", view_box: "0 0 24 24", fill: "currentColor",
                    path { d: glyph }
                }
                div { class: "store-label",
                    div { class: "store-caption", "{caption}" }
                    div { class: "store-name", "{store}" }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "landing-footer",
            p { "{FOOTER_NOTE}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_paths() {
        for icon in [IconCategory::Sunny, IconCategory::Cloudy, IconCategory::Rainy] {
            assert!(!weather_icon_paths(icon).is_empty());
        }
    }

    #[test]
    fn test_rainy_icon_has_drops() {
        assert_eq!(weather_icon_paths(IconCategory::Rainy).len(), 4);
    }
}
