//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every entity (image,
//! feature, simulated step) leads with its positional index and title; URLs
//! and other details follow on indented context lines. Paths appear only
//! where something was written.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Images
//! 001 Горный пейзаж (large)
//!     Source: https://cdn.example.com/1.jpg
//!     Category: nature
//!
//! Features
//! 001 Полноэкранный просмотр
//!     Icon: maximize
//! 002 Rocket launch
//!     Icon: rocket (placeholder)
//!
//! Config
//!     config.toml
//!     catalog.toml (stock)
//! ```
//!
//! ## Build
//!
//! ```text
//! Gallery → index.html
//!     001 Горный пейзаж: 2×2, min 500px, reveal +0s
//!     002 Городская архитектура: 1×2, min 400px, reveal +0.1s
//! Generated 1 page, 3 cells, 3 features (48213 bytes)
//! ```
//!
//! ## Simulate
//!
//! ```text
//! 001 open:0
//!     Lightbox: open 1 / 3, zoom 100%, loading
//!     Shell: theme dark, menu closed, scroll locked
//!     Effect: lock scroll
//!     Effect: load 001 https://cdn.example.com/1.jpg (token 1)
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::controller::{Effect, PageController, PageEvent};
use crate::generate::GenerateReport;
use crate::icons::Glyph;
use crate::lightbox::Key;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Горный пейзаж (large)
/// 002 Rocket launch
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Pluralise a count with a fixed noun: `1 page`, `3 cells`.
fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Which optional content files were found in the source directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentFiles {
    pub config: bool,
    pub catalog: bool,
}

/// Format the content inventory shown by `check`.
pub fn format_check_output(
    catalog: &Catalog,
    config: &SiteConfig,
    files: ContentFiles,
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Images".to_string());
    for (i, record) in catalog.records().iter().enumerate() {
        lines.push(entity_header(i + 1, &record.title, Some(record.size.as_str())));
        lines.push(format!("{}Source: {}", indent(1), record.url));
        if !record.category.is_empty() {
            lines.push(format!("{}Category: {}", indent(1), record.category));
        }
    }

    if !config.features.is_empty() {
        lines.push(String::new());
        lines.push("Features".to_string());
        for (i, feature) in config.features.iter().enumerate() {
            lines.push(entity_header(i + 1, &feature.title, None));
            let icon = match Glyph::lookup(&feature.icon) {
                Glyph::Icon(icon) => icon.name().to_string(),
                Glyph::Placeholder => format!("{} (placeholder)", feature.icon),
            };
            lines.push(format!("{}Icon: {}", indent(1), icon));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    lines.push(format!(
        "{}config.toml{}",
        indent(1),
        if files.config { "" } else { " (stock)" }
    ));
    lines.push(format!(
        "{}catalog.toml{}",
        indent(1),
        if files.catalog { "" } else { " (stock)" }
    ));

    lines
}

/// Print check output to stdout.
pub fn print_check_output(catalog: &Catalog, config: &SiteConfig, files: ContentFiles) {
    for line in format_check_output(catalog, config, files) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the generated page and its grid cells.
pub fn format_build_output(catalog: &Catalog, report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    let file_name = report
        .index_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.index_path.display().to_string());

    lines.push(format!("Gallery \u{2192} {}", file_name));
    for cell in &report.cells {
        let title = catalog
            .get(cell.index)
            .map(|r| r.title.as_str())
            .unwrap_or_default();
        lines.push(format!(
            "{}{}: {}\u{d7}{}, min {}px, reveal +{}s",
            indent(1),
            entity_header(cell.index + 1, title, None),
            cell.span.cols,
            cell.span.rows,
            cell.min_height_px,
            cell.reveal_delay_secs
        ));
    }
    lines.push(format!(
        "Generated 1 page, {}, {} ({} bytes)",
        count(report.cells.len(), "cell"),
        count(report.features, "feature"),
        report.bytes
    ));

    lines
}

/// Print build output to stdout.
pub fn print_build_output(catalog: &Catalog, report: &GenerateReport) {
    for line in format_build_output(catalog, report) {
        println!("{}", line);
    }
}

// ============================================================================
// Simulate output
// ============================================================================

/// Compact script form of an event, matching what `simulate --events` accepts.
pub fn describe_event(event: &PageEvent) -> String {
    match event {
        PageEvent::OpenLightbox(i) => format!("open:{}", i),
        PageEvent::Next => "next".to_string(),
        PageEvent::Prev => "prev".to_string(),
        PageEvent::ZoomIn => "zoom-in".to_string(),
        PageEvent::ZoomOut => "zoom-out".to_string(),
        PageEvent::ImageLoaded(token) => format!("loaded:{}", token.0),
        PageEvent::CloseLightbox => "close".to_string(),
        PageEvent::BackdropClick => "backdrop".to_string(),
        PageEvent::Key(key) => format!(
            "key:{}",
            match key {
                Key::ArrowLeft => "arrowleft",
                Key::ArrowRight => "arrowright",
                Key::Escape => "escape",
                Key::Other => "other",
            }
        ),
        PageEvent::ToggleTheme => "theme".to_string(),
        PageEvent::ToggleMenu => "menu".to_string(),
        PageEvent::Navigate(target) => format!("nav:{}", target.anchor_id()),
        PageEvent::ScrollToId(id) => format!("scroll:{}", id),
        PageEvent::CellInView { index, overlap_px } => format!("view:{}:{}", index, overlap_px),
    }
}

fn describe_effect(effect: &Effect) -> String {
    match effect {
        Effect::LockScroll => "lock scroll".to_string(),
        Effect::UnlockScroll => "unlock scroll".to_string(),
        Effect::LoadImage { index, url, token } => {
            format!("load {} {} (token {})", format_index(index + 1), url, token.0)
        }
        Effect::ScrollIntoView(target) => format!("scroll to #{}", target.anchor_id()),
        Effect::ApplyTheme(theme) => format!("theme {}", theme.as_str()),
        Effect::RevealCell(index) => format!("reveal cell {}", format_index(index + 1)),
    }
}

/// One-line summary of the lightbox.
fn lightbox_line(page: &PageController) -> String {
    let lightbox = page.lightbox();
    if !lightbox.is_open() {
        return "closed".to_string();
    }
    let mut line = format!("open {}, zoom {}", lightbox.counter(), lightbox.zoom_percent());
    if lightbox.is_loading() {
        line.push_str(", loading");
    }
    line
}

/// Format one simulated step: the event, the resulting state, the effects.
///
/// `step` is 1-based. A `None` event is the final teardown.
pub fn format_step(
    step: usize,
    event: Option<&PageEvent>,
    effects: &[Effect],
    page: &PageController,
) -> Vec<String> {
    let label = event.map(describe_event).unwrap_or_else(|| "teardown".to_string());
    let shell = page.shell();
    let mut lines = vec![
        format!("{} {}", format_index(step), label),
        format!("{}Lightbox: {}", indent(1), lightbox_line(page)),
        format!(
            "{}Shell: theme {}, menu {}, scroll {}",
            indent(1),
            shell.theme.as_str(),
            if shell.menu_open { "open" } else { "closed" },
            if page.scroll_locked() { "locked" } else { "free" }
        ),
    ];
    for effect in effects {
        lines.push(format!("{}Effect: {}", indent(1), describe_effect(effect)));
    }
    lines
}

/// Print one simulated step to stdout.
pub fn print_step(
    step: usize,
    event: Option<&PageEvent>,
    effects: &[Effect],
    page: &PageController,
) {
    for line in format_step(step, event, effects, page) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
