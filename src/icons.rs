//! Inline SVG icon set.
//!
//! Every glyph the page uses is an [`Icon`] variant, rendered from a handful
//! of stroke primitives on a 24×24 grid. Templates refer to icons by variant,
//! so a typo is a compile error. Names coming from configuration (feature
//! cards) go through [`Glyph::lookup`], which is forgiving about case and
//! separators and falls back to a visible placeholder instead of failing.

use maud::{Markup, html};

/// Stroke primitive on a 24×24 view box.
enum Shape {
    Path(&'static str),
    Circle(f32, f32, f32),
    Rect(f32, f32, f32, f32, f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowRight,
    ArrowLeft,
    X,
    Menu,
    Grid3x3,
    List,
    Expand,
    Camera,
    Image,
    Sun,
    Moon,
    Download,
    Share,
    Heart,
    Maximize,
    Minimize,
    ZoomIn,
    ZoomOut,
    ChevronLeft,
    ChevronRight,
    Play,
    Pause,
    Instagram,
    Facebook,
    Twitter,
}

impl Icon {
    pub const ALL: [Icon; 25] = [
        Icon::ArrowRight,
        Icon::ArrowLeft,
        Icon::X,
        Icon::Menu,
        Icon::Grid3x3,
        Icon::List,
        Icon::Expand,
        Icon::Camera,
        Icon::Image,
        Icon::Sun,
        Icon::Moon,
        Icon::Download,
        Icon::Share,
        Icon::Heart,
        Icon::Maximize,
        Icon::Minimize,
        Icon::ZoomIn,
        Icon::ZoomOut,
        Icon::ChevronLeft,
        Icon::ChevronRight,
        Icon::Play,
        Icon::Pause,
        Icon::Instagram,
        Icon::Facebook,
        Icon::Twitter,
    ];

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Icon::ArrowRight => "arrow-right",
            Icon::ArrowLeft => "arrow-left",
            Icon::X => "x",
            Icon::Menu => "menu",
            Icon::Grid3x3 => "grid-3x3",
            Icon::List => "list",
            Icon::Expand => "expand",
            Icon::Camera => "camera",
            Icon::Image => "image",
            Icon::Sun => "sun",
            Icon::Moon => "moon",
            Icon::Download => "download",
            Icon::Share => "share",
            Icon::Heart => "heart",
            Icon::Maximize => "maximize",
            Icon::Minimize => "minimize",
            Icon::ZoomIn => "zoom-in",
            Icon::ZoomOut => "zoom-out",
            Icon::ChevronLeft => "chevron-left",
            Icon::ChevronRight => "chevron-right",
            Icon::Play => "play",
            Icon::Pause => "pause",
            Icon::Instagram => "instagram",
            Icon::Facebook => "facebook",
            Icon::Twitter => "twitter",
        }
    }

    fn shapes(self) -> &'static [Shape] {
        use Shape::*;
        match self {
            Icon::ArrowRight => &[Path("M5 12h14"), Path("m12 5 7 7-7 7")],
            Icon::ArrowLeft => &[Path("m12 19-7-7 7-7"), Path("M19 12H5")],
            Icon::X => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
            Icon::Menu => &[Path("M4 6h16"), Path("M4 12h16"), Path("M4 18h16")],
            Icon::Grid3x3 => &[
                Rect(3.0, 3.0, 18.0, 18.0, 2.0),
                Path("M3 9h18"),
                Path("M3 15h18"),
                Path("M9 3v18"),
                Path("M15 3v18"),
            ],
            Icon::List => &[
                Path("M3 6h.01"),
                Path("M3 12h.01"),
                Path("M3 18h.01"),
                Path("M8 6h13"),
                Path("M8 12h13"),
                Path("M8 18h13"),
            ],
            Icon::Expand => &[
                Path("m21 21-6-6m6 6v-4.8m0 4.8h-4.8"),
                Path("M3 16.2V21m0 0h4.8M3 21l6-6"),
                Path("M21 7.8V3m0 0h-4.8M21 3l-6 6"),
                Path("M3 7.8V3m0 0h4.8M3 3l6 6"),
            ],
            Icon::Camera => &[
                Path("M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z"),
                Circle(12.0, 13.0, 3.0),
            ],
            Icon::Image => &[
                Rect(3.0, 3.0, 18.0, 18.0, 2.0),
                Circle(9.0, 9.0, 2.0),
                Path("m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21"),
            ],
            Icon::Sun => &[
                Circle(12.0, 12.0, 4.0),
                Path("M12 2v2"),
                Path("M12 20v2"),
                Path("m4.93 4.93 1.41 1.41"),
                Path("m17.66 17.66 1.41 1.41"),
                Path("M2 12h2"),
                Path("M20 12h2"),
                Path("m6.34 17.66-1.41 1.41"),
                Path("m19.07 4.93-1.41 1.41"),
            ],
            Icon::Moon => &[Path("M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z")],
            Icon::Download => &[
                Path("M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
                Path("m7 10 5 5 5-5"),
                Path("M12 15V3"),
            ],
            Icon::Share => &[
                Circle(18.0, 5.0, 3.0),
                Circle(6.0, 12.0, 3.0),
                Circle(18.0, 19.0, 3.0),
                Path("m8.59 13.51 6.83 3.98"),
                Path("m15.41 6.51-6.82 3.98"),
            ],
            Icon::Heart => &[Path(
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            )],
            Icon::Maximize => &[
                Path("M8 3H5a2 2 0 0 0-2 2v3"),
                Path("M21 8V5a2 2 0 0 0-2-2h-3"),
                Path("M3 16v3a2 2 0 0 0 2 2h3"),
                Path("M16 21h3a2 2 0 0 0 2-2v-3"),
            ],
            Icon::Minimize => &[
                Path("M8 3v3a2 2 0 0 1-2 2H3"),
                Path("M21 8h-3a2 2 0 0 1-2-2V3"),
                Path("M3 16h3a2 2 0 0 1 2 2v3"),
                Path("M16 21v-3a2 2 0 0 1 2-2h3"),
            ],
            Icon::ZoomIn => &[
                Circle(11.0, 11.0, 8.0),
                Path("m21 21-4.3-4.3"),
                Path("M11 8v6"),
                Path("M8 11h6"),
            ],
            Icon::ZoomOut => &[
                Circle(11.0, 11.0, 8.0),
                Path("m21 21-4.3-4.3"),
                Path("M8 11h6"),
            ],
            Icon::ChevronLeft => &[Path("m15 18-6-6 6-6")],
            Icon::ChevronRight => &[Path("m9 18 6-6-6-6")],
            Icon::Play => &[Path("M6 3l14 9-14 9V3z")],
            Icon::Pause => &[
                Rect(14.0, 4.0, 4.0, 16.0, 1.0),
                Rect(6.0, 4.0, 4.0, 16.0, 1.0),
            ],
            Icon::Instagram => &[
                Rect(2.0, 2.0, 20.0, 20.0, 5.0),
                Path("M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"),
                Path("M17.5 6.5h.01"),
            ],
            Icon::Facebook => &[Path(
                "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
            )],
            Icon::Twitter => &[Path(
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            )],
        }
    }

    pub fn render(self, size: u32) -> Markup {
        html! {
            svg.icon xmlns="http://www.w3.org/2000/svg" width=(size) height=(size)
                viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"
                data-icon=(self.name()) {
                @for shape in self.shapes() {
                    @match shape {
                        Shape::Path(d) => { path d=(d) {} }
                        Shape::Circle(cx, cy, r) => { circle cx=(cx) cy=(cy) r=(r) {} }
                        Shape::Rect(x, y, w, h, rx) => {
                            rect x=(x) y=(y) width=(w) height=(h) rx=(rx) {}
                        }
                    }
                }
            }
        }
    }
}

/// Lowercase and drop separators so `zoom-in`, `ZoomIn` and `zoom_in` agree.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Result of a by-name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Icon(Icon),
    Placeholder,
}

impl Glyph {
    pub fn lookup(name: &str) -> Glyph {
        let wanted = normalize(name);
        if wanted.is_empty() {
            return Glyph::Placeholder;
        }
        let wanted = match wanted.as_str() {
            "share2" => "share".to_string(),
            "imageicon" => "image".to_string(),
            other => other.to_string(),
        };
        Icon::ALL
            .into_iter()
            .find(|icon| normalize(icon.name()) == wanted)
            .map_or(Glyph::Placeholder, Glyph::Icon)
    }

    pub fn render(self, size: u32) -> Markup {
        match self {
            Glyph::Icon(icon) => icon.render(size),
            Glyph::Placeholder => html! {
                span.icon-placeholder style={ "width:" (size) "px;height:" (size) "px" } {
                    span { "?" }
                }
            },
        }
    }
}
