//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! reproduce the stock site; a user config file in the content directory
//! overrides any subset of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown in `photo-gallery gen-config`
//!
//! [site]
//! name = "PhotoGallery"
//! tagline = "..."            # Footer blurb
//! copyright = "© 2024 PhotoGallery. Все права защищены."
//! email = "gallery@example.com"
//! phone = "+7 (999) 123-45-67"
//!
//! [hero]
//! badge = "..."
//! heading = ["Мир в", "объективе"]   # Second line gets the accent gradient
//! lead = "..."
//! primary_cta = "Смотреть галерею"
//! secondary_cta = "Подробнее"
//!
//! [about]
//! badge = "О проекте"
//! heading = ["Искусство", "в каждом кадре"]
//! body = """markdown"""
//! chips = [{ icon = "grid-3x3", label = "Адаптивная сетка" }]
//! stats = [{ icon = "image", value = "150+", label = "Фотографий" }]
//!
//! [[features]]
//! icon = "maximize"          # Any icon name; unknown names render a placeholder
//! title = "..."
//! description = "..."
//! accent = "red"             # red | purple | blue
//!
//! [layout]
//! breakpoint_md = 768        # px; single column below this width
//! breakpoint_lg = 1024       # px; three columns from this width
//! reveal_margin_px = 50      # how far a cell must be inside the viewport to reveal
//! reveal_stagger_secs = 0.1  # extra delay per cell index
//!
//! [lightbox]
//! zoom_min = 0.5
//! zoom_max = 3.0
//! zoom_step = 0.25
//!
//! [colors.dark]
//! background = "#09090b"
//! ...
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub hero: HeroConfig,
    pub about: AboutConfig,
    pub features: Vec<Feature>,
    pub layout: LayoutConfig,
    pub lightbox: LightboxConfig,
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteInfo::default(),
            hero: HeroConfig::default(),
            about: AboutConfig::default(),
            features: default_features(),
            layout: LayoutConfig::default(),
            lightbox: LightboxConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if self.layout.breakpoint_md >= self.layout.breakpoint_lg {
            return Err(ConfigError::Validation(
                "layout.breakpoint_md must be below layout.breakpoint_lg".into(),
            ));
        }
        if !(self.layout.reveal_stagger_secs >= 0.0) {
            return Err(ConfigError::Validation(
                "layout.reveal_stagger_secs must not be negative".into(),
            ));
        }
        let lb = &self.lightbox;
        if !(lb.zoom_min > 0.0 && lb.zoom_min <= 1.0 && lb.zoom_max >= 1.0) {
            return Err(ConfigError::Validation(
                "lightbox zoom range must satisfy 0 < zoom_min <= 1 <= zoom_max".into(),
            ));
        }
        if !(lb.zoom_step > 0.0) {
            return Err(ConfigError::Validation(
                "lightbox.zoom_step must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Brand, footer and contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub name: String,
    /// Page `<title>`.
    pub title: String,
    pub tagline: String,
    pub copyright: String,
    pub email: String,
    pub phone: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "PhotoGallery".to_string(),
            title: "PhotoGallery — Мир в объективе".to_string(),
            tagline: "Профессиональная фотогалерея с эксклюзивными работами. Создаем визуальные истории с 2024 года.".to_string(),
            copyright: "© 2024 PhotoGallery. Все права защищены.".to_string(),
            email: "gallery@example.com".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub badge: String,
    /// Heading lines; the last one is drawn with the accent gradient.
    pub heading: Vec<String>,
    pub lead: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            badge: "Профессиональная фотогалерея".to_string(),
            heading: vec!["Мир в".to_string(), "объективе".to_string()],
            lead: "Откройте для себя коллекцию уникальных фотографий. Каждый кадр — это история, эмоция и мгновение вечности.".to_string(),
            primary_cta: "Смотреть галерею".to_string(),
            secondary_cta: "Подробнее".to_string(),
        }
    }
}

/// Icon + label pill shown under the about text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Chip {
    pub icon: String,
    pub label: String,
}

/// Floating stat card next to the about image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub icon: String,
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutConfig {
    pub badge: String,
    pub heading: Vec<String>,
    /// Markdown.
    pub body: String,
    pub chips: Vec<Chip>,
    pub stats: Vec<Stat>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        let chip = |icon: &str, label: &str| Chip {
            icon: icon.to_string(),
            label: label.to_string(),
        };
        Self {
            badge: "О проекте".to_string(),
            heading: vec!["Искусство".to_string(), "в каждом кадре".to_string()],
            body: "Наша фотогалерея — это пространство, где каждая фотография рассказывает свою историю. Мы собираем лучшие работы и представляем их в удобном, элегантном формате.\n\nОсобенности нашей галереи: адаптивный дизайн для всех устройств, быстрая загрузка благодаря оптимизации изображений, удобный просмотр в полноэкранном режиме с масштабированием.\n".to_string(),
            chips: vec![
                chip("grid-3x3", "Адаптивная сетка"),
                chip("zoom-in", "Масштабирование"),
                chip("image", "Lazy Loading"),
            ],
            stats: vec![
                Stat {
                    icon: "image".to_string(),
                    value: "150+".to_string(),
                    label: "Фотографий".to_string(),
                    accent: Accent::Red,
                },
                Stat {
                    icon: "heart".to_string(),
                    value: "2.5K".to_string(),
                    label: "Лайков".to_string(),
                    accent: Accent::Purple,
                },
            ],
        }
    }
}

/// Accent colour for cards and icons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Red,
    Purple,
    Blue,
}

impl Accent {
    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Red => "red",
            Accent::Purple => "purple",
            Accent::Blue => "blue",
        }
    }
}

/// A card in the features section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub accent: Accent,
}

pub fn default_features() -> Vec<Feature> {
    vec![
        Feature {
            icon: "maximize".to_string(),
            title: "Полноэкранный просмотр".to_string(),
            description: "Увеличивайте изображения с сохранением качества. Удобная навигация между фото.".to_string(),
            accent: Accent::Red,
        },
        Feature {
            icon: "image".to_string(),
            title: "Lazy Loading".to_string(),
            description: "Изображения загружаются по мере прокрутки. Экономия трафика и быстрая загрузка.".to_string(),
            accent: Accent::Purple,
        },
        Feature {
            icon: "grid-3x3".to_string(),
            title: "Адаптивная сетка".to_string(),
            description: "Оптимальное отображение на любых устройствах: от смартфонов до 4K мониторов.".to_string(),
            accent: Accent::Blue,
        },
    ]
}

/// Grid breakpoints and reveal animation timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub breakpoint_md: u32,
    pub breakpoint_lg: u32,
    pub reveal_margin_px: u32,
    pub reveal_stagger_secs: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint_md: 768,
            breakpoint_lg: 1024,
            reveal_margin_px: 50,
            reveal_stagger_secs: 0.1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightboxConfig {
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub zoom_step: f64,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            zoom_min: 0.5,
            zoom_max: 3.0,
            zoom_step: 0.25,
        }
    }
}

/// Color configuration for the two themes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub dark: ColorScheme,
    pub light: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            dark: ColorScheme::default_dark(),
            light: ColorScheme::default_light(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Cards, header, footer.
    pub surface: String,
    pub text: String,
    pub text_muted: String,
    pub border: String,
    pub accent: String,
}

impl ColorScheme {
    pub fn default_dark() -> Self {
        Self {
            background: "#09090b".to_string(),
            surface: "#18181b".to_string(),
            text: "#ffffff".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "rgba(255, 255, 255, 0.08)".to_string(),
            accent: "#dc2626".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#fafafa".to_string(),
            surface: "#ffffff".to_string(),
            text: "#18181b".to_string(),
            text_muted: "#52525b".to_string(),
            border: "rgba(0, 0, 0, 0.08)".to_string(),
            accent: "#dc2626".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_dark()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an array
///   such as `features` is replaced as a whole.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a commented stock `config.toml`. Used by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Photo Gallery Configuration
# ===========================
# All settings are optional. Remove any you don't need; values shown are
# the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Brand and contacts (header, footer, page title)
# ---------------------------------------------------------------------------
[site]
name = "PhotoGallery"
title = "PhotoGallery — Мир в объективе"
tagline = "Профессиональная фотогалерея с эксклюзивными работами. Создаем визуальные истории с 2024 года."
copyright = "© 2024 PhotoGallery. Все права защищены."
email = "gallery@example.com"
phone = "+7 (999) 123-45-67"

# ---------------------------------------------------------------------------
# Hero section. The last heading line gets the accent gradient.
# ---------------------------------------------------------------------------
[hero]
badge = "Профессиональная фотогалерея"
heading = ["Мир в", "объективе"]
lead = "Откройте для себя коллекцию уникальных фотографий. Каждый кадр — это история, эмоция и мгновение вечности."
primary_cta = "Смотреть галерею"
secondary_cta = "Подробнее"

# ---------------------------------------------------------------------------
# About section. `body` is markdown.
# ---------------------------------------------------------------------------
[about]
badge = "О проекте"
heading = ["Искусство", "в каждом кадре"]
body = """
Наша фотогалерея — это пространство, где каждая фотография рассказывает свою историю. Мы собираем лучшие работы и представляем их в удобном, элегантном формате.

Особенности нашей галереи: адаптивный дизайн для всех устройств, быстрая загрузка благодаря оптимизации изображений, удобный просмотр в полноэкранном режиме с масштабированием.
"""
chips = [
    { icon = "grid-3x3", label = "Адаптивная сетка" },
    { icon = "zoom-in", label = "Масштабирование" },
    { icon = "image", label = "Lazy Loading" },
]
stats = [
    { icon = "image", value = "150+", label = "Фотографий", accent = "red" },
    { icon = "heart", value = "2.5K", label = "Лайков", accent = "purple" },
]

# ---------------------------------------------------------------------------
# Feature cards. Icon names are case-insensitive ("zoom-in", "ZoomIn").
# Accent: red | purple | blue
# ---------------------------------------------------------------------------
[[features]]
icon = "maximize"
title = "Полноэкранный просмотр"
description = "Увеличивайте изображения с сохранением качества. Удобная навигация между фото."
accent = "red"

[[features]]
icon = "image"
title = "Lazy Loading"
description = "Изображения загружаются по мере прокрутки. Экономия трафика и быстрая загрузка."
accent = "purple"

[[features]]
icon = "grid-3x3"
title = "Адаптивная сетка"
description = "Оптимальное отображение на любых устройствах: от смартфонов до 4K мониторов."
accent = "blue"

# ---------------------------------------------------------------------------
# Grid layout and reveal animation
# ---------------------------------------------------------------------------
[layout]
# Single column below this width (px).
breakpoint_md = 768
# Three columns from this width (px).
breakpoint_lg = 1024
# A cell reveals once it is this many px inside the viewport.
reveal_margin_px = 50
# Extra reveal delay per cell index (seconds).
reveal_stagger_secs = 0.1

# ---------------------------------------------------------------------------
# Lightbox zoom. Must satisfy 0 < zoom_min <= 1 <= zoom_max.
# ---------------------------------------------------------------------------
[lightbox]
zoom_min = 0.5
zoom_max = 3.0
zoom_step = 0.25

# ---------------------------------------------------------------------------
# Colors. Dark is the initial theme; the header toggle switches to light.
# ---------------------------------------------------------------------------
[colors.dark]
background = "#09090b"
surface = "#18181b"
text = "#ffffff"
text_muted = "#9ca3af"
border = "rgba(255, 255, 255, 0.08)"
accent = "#dc2626"

[colors.light]
background = "#fafafa"
surface = "#ffffff"
text = "#18181b"
text_muted = "#52525b"
border = "rgba(0, 0, 0, 0.08)"
accent = "#dc2626"
"##
}

fn scheme_vars(scheme: &ColorScheme) -> String {
    format!(
        "    --color-bg: {};\n    --color-surface: {};\n    --color-text: {};\n    --color-text-muted: {};\n    --color-border: {};\n    --color-accent: {};",
        scheme.background, scheme.surface, scheme.text, scheme.text_muted, scheme.border, scheme.accent,
    )
}

/// Generate CSS custom properties for both themes.
///
/// The page root carries `data-theme="dark"` or `data-theme="light"`.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root,\n:root[data-theme=\"dark\"] {{\n{}\n}}\n\n:root[data-theme=\"light\"] {{\n{}\n}}",
        scheme_vars(&colors.dark),
        scheme_vars(&colors.light),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn default_config_has_three_features() {
        let config = load_config(TempDir::new().unwrap().path()).unwrap();
        assert_eq!(config.features.len(), 3);
        assert_eq!(config.features[1].accent, Accent::Purple);
    }

    #[test]
    fn stock_config_toml_matches_defaults() {
        let stock: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = load_config(TempDir::new().unwrap().path()).unwrap();
        assert_eq!(stock.site.name, defaults.site.name);
        assert_eq!(stock.hero.heading, defaults.hero.heading);
        assert_eq!(stock.about.body.trim(), defaults.about.body.trim());
        assert_eq!(stock.about.stats.len(), defaults.about.stats.len());
        assert_eq!(stock.features.len(), defaults.features.len());
        assert_eq!(stock.layout.breakpoint_md, defaults.layout.breakpoint_md);
        assert_eq!(stock.lightbox.zoom_max, defaults.lightbox.zoom_max);
        assert_eq!(stock.colors.light.background, defaults.colors.light.background);
        stock.validate().unwrap();
    }

    #[test]
    fn parse_partial_config() {
        let config: SiteConfig = toml::from_str(
            r##"
[colors.light]
background = "#f0f0f0"
"##,
        )
        .unwrap();
        assert_eq!(config.colors.light.background, "#f0f0f0");
        assert_eq!(config.colors.light.text, "#18181b");
        assert_eq!(config.colors.dark.background, "#09090b");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[lightbox]\nzoom_maximum = 4.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn merge_preserves_untouched_keys() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str("[site]\nname = \"Lens\"\n").unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.site.name, "Lens");
        assert_eq!(config.site.email, "gallery@example.com");
    }

    #[test]
    fn feature_array_is_replaced_not_merged() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[[features]]
icon = "camera"
title = "Only"
description = "One card"
"#,
        )
        .unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.features.len(), 1);
        assert_eq!(config.features[0].accent, Accent::Red);
    }

    #[test]
    fn validation_rejects_bad_zoom_range() {
        let mut config = SiteConfig::default();
        config.lightbox.zoom_min = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = SiteConfig::default();
        config.lightbox.zoom_step = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validation_rejects_inverted_breakpoints() {
        let mut config = SiteConfig::default();
        config.layout.breakpoint_md = 1200;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[layout]\nreveal_margin_px = 80\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.layout.reveal_margin_px, 80);
        assert_eq!(config.layout.breakpoint_md, 768);
    }

    #[test]
    fn load_config_from_fixtures() {
        let tmp = crate::test_helpers::setup_fixtures();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.name, "Harbour Lens");
        assert_eq!(config.layout.reveal_margin_px, 40);
        assert_eq!(config.features.len(), 2);
        assert_eq!(config.features[1].accent, Accent::Purple);
        // untouched sections keep their stock values
        assert_eq!(config.lightbox.zoom_max, 3.0);
    }

    #[test]
    fn load_config_reports_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[site\nname = ").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn color_css_covers_both_themes() {
        let mut colors = ColorConfig::default();
        colors.light.background = "#eeeeee".to_string();
        let css = generate_color_css(&colors);
        assert!(css.contains(r#":root[data-theme="light"]"#));
        assert!(css.contains("--color-bg: #eeeeee"));
        assert!(css.contains("--color-bg: #09090b"));
    }
}
