//! # Photo Gallery
//!
//! A single-page photo gallery: a hero section, a responsive image grid, an
//! about block, feature cards and a footer, with a full-screen lightbox for
//! browsing the images one at a time. The site is rendered once into a
//! self-contained `index.html`; images stay on their external host and are
//! referenced by URL.
//!
//! # Architecture: State Machines, Rendered Once
//!
//! All interactive behaviour is modelled as plain Rust state machines:
//!
//! ```text
//! PageEvent ──▶ PageController ──▶ Vec<Effect>
//!                 ├── Lightbox      open / navigate / zoom / load tokens
//!                 ├── ShellState    theme, mobile menu, section lookup
//!                 └── RevealTracker one-shot reveal per grid cell
//! ```
//!
//! `generate` renders the page from a fresh controller, so the markup is the
//! controller's initial state. The inline script mirrors the same transitions
//! in the browser, reading its limits from `data-*` attributes written by
//! `generate`. The `simulate` command drives the controller directly and
//! prints every transition.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Image records, `catalog.toml` loading and validation, stock catalog |
//! | [`grid`] | Cell spans per size hint, responsive columns and their CSS, reveal tracking |
//! | [`lightbox`] | Lightbox overlay state machine with stale-load protection |
//! | [`shell`] | Theme, mobile menu, navigation targets |
//! | [`controller`] | Root controller: owns all page state, turns events into effects |
//! | [`icons`] | Named glyph set with forgiving lookup and a placeholder fallback |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation, colour CSS |
//! | [`generate`] | Renders `index.html` using Maud |
//! | [`output`] | CLI output formatting for `check`, `build` and `simulate` |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed markup is a build error and every interpolated
//! value is escaped, which matters here because titles and descriptions come
//! straight from the catalog.
//!
//! ## Load Tokens
//!
//! Every time the lightbox shows an image it issues a new [`lightbox::LoadToken`].
//! A load completion only clears the spinner if its token is still current, so
//! a slow image that finishes after the visitor moved on cannot hide the
//! spinner of the image now on screen.
//!
//! ## One Page, No Build Artifacts
//!
//! CSS, JavaScript and the catalog JSON are inlined. The output directory
//! holds exactly one file, which can be served from anywhere or opened from
//! disk.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod generate;
pub mod grid;
pub mod icons;
pub mod lightbox;
pub mod output;
pub mod shell;

#[cfg(test)]
pub(crate) mod test_helpers;
