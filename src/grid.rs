//! Gallery grid layout and reveal tracking.
//!
//! One cell per catalog record, in catalog order. The size hint decides how
//! many tracks a cell spans on wide layouts; below the `md` breakpoint the grid
//! is a single column and every cell is 1×1.
//!
//! | Hint | Wide span (cols × rows) | Min height |
//! |------|-------------------------|------------|
//! | large | 2 × 2 | 500px |
//! | medium | 1 × 2 | 400px |
//! | small | 1 × 1 | 250px |
//!
//! The page stylesheet for the grid is generated from these rules by
//! [`generate_layout_css`], so the markup cannot disagree with them.
//!
//! Cells fade and slide in the first time they come into view, staggered by
//! their index. A revealed cell stays revealed: scrolling it out and back in
//! does not replay the animation.

use crate::catalog::{Catalog, SizeHint};
use crate::config::LayoutConfig;
use crate::controller::PageEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub cols: u8,
    pub rows: u8,
}

impl CellSpan {
    pub const UNIT: CellSpan = CellSpan { cols: 1, rows: 1 };
}

pub fn cell_span(size: SizeHint) -> CellSpan {
    match size {
        SizeHint::Large => CellSpan { cols: 2, rows: 2 },
        SizeHint::Medium => CellSpan { cols: 1, rows: 2 },
        SizeHint::Small => CellSpan::UNIT,
    }
}

pub fn min_height_px(size: SizeHint) -> u32 {
    match size {
        SizeHint::Large => 500,
        SizeHint::Medium => 400,
        SizeHint::Small => 250,
    }
}

pub const COLUMNS_NARROW: u8 = 1;
pub const COLUMNS_MD: u8 = 2;
pub const COLUMNS_LG: u8 = 3;

/// Number of grid columns at a given viewport width.
pub fn columns_for_width(width_px: u32, layout: &LayoutConfig) -> u8 {
    if width_px >= layout.breakpoint_lg {
        COLUMNS_LG
    } else if width_px >= layout.breakpoint_md {
        COLUMNS_MD
    } else {
        COLUMNS_NARROW
    }
}

/// Span actually applied at `width_px`.
pub fn effective_span(size: SizeHint, width_px: u32, layout: &LayoutConfig) -> CellSpan {
    if width_px < layout.breakpoint_md {
        CellSpan::UNIT
    } else {
        cell_span(size)
    }
}

/// Grid rules for every breakpoint, plus the header switch at `md`.
///
/// Each block states the column count from [`columns_for_width`] and, where
/// they change, the spans from [`effective_span`] at that width. Media
/// queries cannot read custom properties, so breakpoints are written out.
pub fn generate_layout_css(layout: &LayoutConfig) -> String {
    let mut blocks = Vec::new();
    let mut previous: Option<Vec<CellSpan>> = None;

    for width in [0, layout.breakpoint_md, layout.breakpoint_lg] {
        let mut rules = vec![format!(
            ".gallery-grid {{ grid-template-columns: repeat({}, minmax(0, 1fr)); }}",
            columns_for_width(width, layout)
        )];

        let spans: Vec<CellSpan> = SizeHint::ALL
            .iter()
            .map(|size| effective_span(*size, width, layout))
            .collect();
        if previous.as_ref() != Some(&spans) {
            for (size, span) in SizeHint::ALL.iter().zip(&spans) {
                rules.push(format!(
                    ".gallery-cell.size-{} {{ grid-column: span {}; grid-row: span {}; }}",
                    size.as_str(),
                    span.cols,
                    span.rows
                ));
            }
        }
        previous = Some(spans);

        if width == layout.breakpoint_md {
            rules.push(".nav-desktop { display: flex; }".to_string());
            rules.push(".menu-toggle, .mobile-menu { display: none !important; }".to_string());
        }

        if width == 0 {
            blocks.push(rules.join("\n"));
        } else {
            let body: Vec<String> = rules.iter().map(|r| format!("    {r}")).collect();
            blocks.push(format!(
                "@media (min-width: {}px) {{\n{}\n}}",
                width,
                body.join("\n")
            ));
        }
    }

    blocks.join("\n\n")
}

/// A laid-out grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub index: usize,
    pub id: u32,
    pub size: SizeHint,
    pub span: CellSpan,
    pub min_height_px: u32,
    pub reveal_delay_secs: f64,
}

pub fn layout(catalog: &Catalog, layout: &LayoutConfig) -> Vec<GridCell> {
    catalog
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| GridCell {
            index,
            id: record.id,
            size: record.size,
            span: cell_span(record.size),
            min_height_px: min_height_px(record.size),
            reveal_delay_secs: reveal_delay(index, layout.reveal_stagger_secs),
        })
        .collect()
}

/// Stagger delay for the `index`-th revealed element, rounded to milliseconds.
pub fn reveal_delay(index: usize, stagger_secs: f64) -> f64 {
    (index as f64 * stagger_secs * 1000.0).round() / 1000.0
}

/// Activating a cell asks the root controller to open the lightbox there.
pub fn activate(index: usize) -> PageEvent {
    PageEvent::OpenLightbox(index)
}

/// One-shot reveal bookkeeping for every cell.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    margin_px: f64,
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(cells: usize, margin_px: u32) -> Self {
        Self {
            margin_px: f64::from(margin_px),
            revealed: vec![false; cells],
        }
    }

    /// Report how many pixels of a cell are inside the viewport (negative
    /// when it is still below or above). Returns `true` only on the call
    /// that triggers the reveal.
    pub fn observe(&mut self, index: usize, overlap_px: f64) -> bool {
        let Some(revealed) = self.revealed.get_mut(index) else {
            return false;
        };
        if *revealed || overlap_px <= self.margin_px {
            return false;
        }
        *revealed = true;
        true
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}
