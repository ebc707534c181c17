use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub logo_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            logo_class: "brand-logo",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            logo_class: "brand-logo brand-logo-inverted",
        },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-accent: rgba(16, 122, 87, 0.05);
    --color-text-primary: #0a0a0a;
    --color-text-muted: #737373;
    --color-border: #e5e5e5;
    --color-card-border: #e5e5e5;
    --color-store-bg: #000000;
    --color-store-hover: #1f2937;
    --color-store-text: #ffffff;
    --color-store-caption: #d1d5db;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0a0a0a;
    --color-bg-accent: rgba(255, 255, 255, 0.04);
    --color-text-primary: #fafafa;
    --color-text-muted: #a3a3a3;
    --color-border: #262626;
    --color-card-border: #262626;
    --color-store-bg: #ffffff;
    --color-store-hover: #e5e5e5;
    --color-store-text: #000000;
    --color-store-caption: #4b5563;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;
