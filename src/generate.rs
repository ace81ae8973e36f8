//! HTML page generation.
//!
//! Renders the whole site as one `index.html`: header, hero, gallery grid,
//! about, features, footer and the lightbox overlay. The page is rendered
//! from a fresh [`PageController`], so the markup reflects its initial state
//! (dark theme, menu closed, lightbox closed, no cell revealed yet).
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! └── index.html      # markup + inline CSS + inline JS + catalog JSON
//! ```
//!
//! Images are not copied or processed; every `<img>` points at the catalog URL.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: base styles (theme colours and breakpoints injected from config)
//! - `static/gallery.js`: lightbox, theme/menu toggles, smooth scroll, reveal observer
//!
//! The script reads its tunables from `data-*` attributes written here, and
//! the catalog from a `<script type="application/json">` block.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All catalog and config text is escaped by maud.

use crate::catalog::{Catalog, ImageRecord};
use crate::config::{self, SiteConfig};
use crate::controller::PageController;
use crate::grid::{self, GridCell, RevealTracker};
use crate::icons::{Glyph, Icon};
use crate::lightbox::Lightbox;
use crate::shell::{NavigationTarget, ShellState};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a generate run wrote.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub index_path: PathBuf,
    pub bytes: usize,
    pub cells: Vec<GridCell>,
    pub features: usize,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/gallery.js");

pub fn generate(
    catalog: &Catalog,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let page = PageController::new(catalog.clone(), config);
    let css = page_css(config);

    fs::create_dir_all(output_dir)?;
    let html = render_page(catalog, config, &page, &css)?.into_string();
    let index_path = output_dir.join("index.html");
    fs::write(&index_path, &html)?;
    info!(path = %index_path.display(), bytes = html.len(), "wrote page");

    Ok(GenerateReport {
        index_path,
        bytes: html.len(),
        cells: grid::layout(catalog, &config.layout),
        features: config.features.len(),
    })
}

/// Theme colours, the static stylesheet, then the grid breakpoint rules.
pub fn page_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC,
        grid::generate_layout_css(&config.layout),
    )
}

/// JSON for a `<script>` block. Markup-significant characters are written as
/// `\u` escapes so record text can never end or restart the element.
fn script_safe_json(catalog: &Catalog) -> Result<String, serde_json::Error> {
    Ok(catalog
        .to_json()?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, shell: &ShellState, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" data-theme=(shell.theme.as_str()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn brand(name: &str) -> Markup {
    html! {
        div.brand {
            span.brand-mark { (Icon::Camera.render(20)) }
            span.brand-name { (name) }
        }
    }
}

/// Header navigation. Buttons resolve their section directly, so they
/// always land, and they close the mobile menu.
pub fn render_nav(class: &str) -> Markup {
    html! {
        nav class=(class) {
            @for target in NavigationTarget::ALL {
                button.nav-link type="button" data-nav=(target.anchor_id()) {
                    (target.label())
                }
            }
        }
    }
}

fn site_header(config: &SiteConfig, shell: &ShellState) -> Markup {
    html! {
        header.site-header.menu-open[shell.menu_open] {
            div.container.header-bar {
                (brand(&config.site.name))
                (render_nav("nav-desktop"))
                div.header-actions {
                    button.theme-toggle type="button" aria-label="Сменить тему" {
                        span.when-dark { (Icon::Sun.render(20)) }
                        span.when-light { (Icon::Moon.render(20)) }
                    }
                    button.menu-toggle type="button" aria-label="Меню"
                        aria-expanded=(if shell.menu_open { "true" } else { "false" }) {
                        span.when-closed { (Icon::Menu.render(24)) }
                        span.when-open { (Icon::X.render(24)) }
                    }
                }
            }
            div.mobile-menu {
                (render_nav("nav-mobile"))
            }
        }
    }
}

/// Heading lines; the last line gets the accent style.
fn heading_lines(lines: &[String]) -> Markup {
    html! {
        @for (i, line) in lines.iter().enumerate() {
            @if i > 0 { br; }
            @if i + 1 == lines.len() && lines.len() > 1 {
                span.heading-accent { (line) }
            } @else {
                span.heading-plain { (line) }
            }
        }
    }
}

fn badge(icon: Icon, text: &str) -> Markup {
    html! {
        span.badge { (icon.render(16)) (text) }
    }
}

fn hero_section(config: &SiteConfig) -> Markup {
    let hero = &config.hero;
    html! {
        section #hero.hero data-section="hero" {
            div.hero-glow.glow-red {}
            div.hero-glow.glow-purple {}
            div.hero-content {
                div.hero-step style="--step: 0.2s" { (badge(Icon::Camera, &hero.badge)) }
                h1.hero-title.hero-step style="--step: 0.4s" { (heading_lines(&hero.heading)) }
                p.hero-lead.hero-step style="--step: 0.6s" { (hero.lead) }
                div.hero-actions.hero-step style="--step: 0.8s" {
                    // Plain id lookup: a missing section is silently ignored.
                    button.btn.btn-primary type="button" data-scroll-id="gallery" {
                        (hero.primary_cta) (Icon::ArrowRight.render(20))
                    }
                    button.btn.btn-ghost type="button" data-scroll-id="about" {
                        (hero.secondary_cta) (Icon::Expand.render(20))
                    }
                }
            }
            div.scroll-indicator { span {} }
        }
    }
}

fn gallery_cell(record: &ImageRecord, cell: &GridCell, revealed: bool) -> Markup {
    let mut class = format!("gallery-cell reveal size-{}", cell.size.as_str());
    if revealed {
        class.push_str(" revealed");
    }
    let style = format!(
        "--reveal-delay: {}s; min-height: {}px",
        cell.reveal_delay_secs, cell.min_height_px
    );
    html! {
        div class=(class)
            data-index=(cell.index) data-id=(record.id) style=(style)
            role="button" tabindex="0" {
            img src=(record.url) alt=(record.title) loading="lazy";
            div.cell-shade {}
            div.cell-caption {
                h3 { (record.title) }
                p { (record.description) }
                span.cell-hint { (Icon::Maximize.render(16)) "Нажмите для просмотра" }
            }
        }
    }
}

fn gallery_section(catalog: &Catalog, config: &SiteConfig, reveal: &RevealTracker) -> Markup {
    let cells = grid::layout(catalog, &config.layout);
    html! {
        section #gallery.section data-section="gallery" {
            div.container {
                div.section-head.reveal {
                    (badge(Icon::Grid3x3, "Коллекция работ"))
                    h2 { span.heading-plain { "Галерея" } }
                    p.section-lead {
                        "Каждая фотография рассказывает свою уникальную историю. Нажмите на изображение для полноэкранного просмотра."
                    }
                }
                div.gallery-grid data-reveal-margin=(config.layout.reveal_margin_px) {
                    @for (record, cell) in catalog.records().iter().zip(&cells) {
                        (gallery_cell(record, cell, reveal.is_revealed(cell.index)))
                    }
                }
                div.load-more.reveal {
                    button.btn.btn-ghost type="button" {
                        span { "Загрузить ещё" } (Icon::ArrowRight.render(20))
                    }
                }
            }
        }
    }
}

fn markdown(body: &str) -> Markup {
    let parser = Parser::new(body);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}

fn about_section(catalog: &Catalog, config: &SiteConfig) -> Markup {
    let about = &config.about;
    html! {
        section #about.section.about data-section="about" {
            div.container.about-grid {
                div.about-text.reveal.from-left {
                    (badge(Icon::Camera, &about.badge))
                    h2 { (heading_lines(&about.heading)) }
                    div.about-body { (markdown(&about.body)) }
                    div.chips {
                        @for chip in &about.chips {
                            span.chip { (Glyph::lookup(&chip.icon).render(20)) span { (chip.label) } }
                        }
                    }
                }
                div.about-visual.reveal.from-right {
                    @if let Some(cover) = catalog.first() {
                        div.about-cover {
                            img src=(cover.url) alt="About gallery" loading="lazy";
                        }
                    }
                    @for (i, stat) in about.stats.iter().enumerate() {
                        div class={ "stat-card stat-" (i) " accent-" (stat.accent.as_str()) } {
                            span.stat-icon { (Glyph::lookup(&stat.icon).render(24)) }
                            div {
                                div.stat-value { (stat.value) }
                                div.stat-label { (stat.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn features_section(config: &SiteConfig) -> Markup {
    html! {
        section.section.features {
            div.container {
                div.section-head.reveal {
                    (badge(Icon::Grid3x3, "Возможности"))
                    h2 {
                        span.heading-plain { "Почему выбирают" }
                        br;
                        span.heading-accent { "нас" }
                    }
                }
                div.feature-grid {
                    @for (i, feature) in config.features.iter().enumerate() {
                        div class={ "feature-card reveal accent-" (feature.accent.as_str()) }
                            style={ "--reveal-delay: " (grid::reveal_delay(i, config.layout.reveal_stagger_secs)) "s" } {
                            span.feature-icon { (Glyph::lookup(&feature.icon).render(28)) }
                            h3 { (feature.title) }
                            p { (feature.description) }
                        }
                    }
                }
            }
        }
    }
}

fn site_footer(config: &SiteConfig) -> Markup {
    let site = &config.site;
    html! {
        footer.site-footer {
            div.container {
                div.footer-grid {
                    div.reveal {
                        (brand(&site.name))
                        p.footer-tagline { (site.tagline) }
                    }
                    div.reveal {
                        h4 { "Навигация" }
                        ul.footer-links {
                            @for target in NavigationTarget::ALL {
                                li { button.nav-link type="button" data-nav=(target.anchor_id()) { (target.label()) } }
                            }
                            li { button type="button" { "Контакты" } }
                        }
                    }
                    div.reveal {
                        h4 { "Контакты" }
                        ul.contacts {
                            li { span.dot {} (site.email) }
                            li { span.dot {} (site.phone) }
                        }
                        div.socials {
                            @for icon in [Icon::Instagram, Icon::Facebook, Icon::Twitter] {
                                button.social type="button" aria-label=(icon.name()) { (icon.render(20)) }
                            }
                        }
                    }
                }
                div.footer-bottom.reveal {
                    p { (site.copyright) }
                    div.legal {
                        button type="button" { "Политика конфиденциальности" }
                        button type="button" { "Условия использования" }
                    }
                }
            }
        }
    }
}

/// Renders the overlay for the given lightbox state.
///
/// A closed overlay is hidden and carries no image `src`, so nothing is
/// fetched until the visitor opens it.
pub fn lightbox_overlay(catalog: &Catalog, lightbox: &Lightbox) -> Markup {
    let state = lightbox.state();
    let limits = lightbox.limits();
    let current = catalog.get(state.current_index);
    let src = current.filter(|_| state.is_open).map(|r| r.url.as_str());
    html! {
        div #lightbox.lightbox hidden[!state.is_open] role="dialog" aria-modal="true"
            data-zoom-min=(limits.min) data-zoom-max=(limits.max) data-zoom-step=(limits.step) {
            button.lb-button.lb-close type="button" data-action="close" aria-label="Закрыть" {
                (Icon::X.render(24))
            }
            button.lb-button.lb-prev type="button" data-action="prev" aria-label="Назад" {
                (Icon::ChevronLeft.render(32))
            }
            button.lb-button.lb-next type="button" data-action="next" aria-label="Вперёд" {
                (Icon::ChevronRight.render(32))
            }
            div.lb-frame {
                div.lb-spinner hidden[!state.is_loading] { span {} }
                img.lb-image src=[src] alt=[current.map(|r| r.title.as_str())]
                    style={ "transform: scale(" (state.zoom) ")" };
                div.lb-info {
                    h3.lb-title { @if let Some(r) = current { (r.title) } }
                    p.lb-description { @if let Some(r) = current { (r.description) } }
                    p.lb-counter { (lightbox.counter()) }
                }
            }
            div.lb-zoom {
                button.lb-button type="button" data-action="zoom-out" aria-label="Уменьшить" {
                    (Icon::ZoomOut.render(20))
                }
                span.lb-zoom-level { (lightbox.zoom_percent()) }
                button.lb-button type="button" data-action="zoom-in" aria-label="Увеличить" {
                    (Icon::ZoomIn.render(20))
                }
            }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

pub fn render_page(
    catalog: &Catalog,
    config: &SiteConfig,
    page: &PageController,
    css: &str,
) -> Result<Markup, GenerateError> {
    let catalog_json = script_safe_json(catalog)?;
    let content = html! {
        (site_header(config, page.shell()))
        main {
            (hero_section(config))
            (gallery_section(catalog, config, page.reveal()))
            (about_section(catalog, config))
            (features_section(config))
            (site_footer(config))
        }
        (lightbox_overlay(catalog, page.lightbox()))
        script #catalog-data type="application/json" { (PreEscaped(catalog_json)) }
        script { (PreEscaped(JS)) }
    };
    Ok(base_document(&config.site.title, css, page.shell(), content))
}

// ============================================================================
// Tests
// ============================================================================
