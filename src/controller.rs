//! Root page controller.
//!
//! Owns every piece of mutable page state: the lightbox, the shell flags,
//! the reveal tracker and the page scroll lock. Components never mutate
//! page-level state directly; they produce a [`PageEvent`], the controller
//! applies it, and the resulting [`Effect`]s describe what the host (the
//! browser runtime, or `simulate` on the command line) has to do.
//!
//! The scroll lock is derived, not toggled: after every event it is brought
//! in line with whether the lightbox is open, and [`PageController::teardown`]
//! releases it unconditionally.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::grid::{self, RevealTracker};
use crate::lightbox::{Key, KeyOutcome, Lightbox, LoadToken, ZoomLimits};
use crate::shell::{NavigationTarget, ShellState, Theme};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    OpenLightbox(usize),
    Next,
    Prev,
    ZoomIn,
    ZoomOut,
    ImageLoaded(LoadToken),
    CloseLightbox,
    /// Click on the dimmed area around the image frame.
    BackdropClick,
    Key(Key),
    ToggleTheme,
    ToggleMenu,
    Navigate(NavigationTarget),
    ScrollToId(String),
    /// A grid cell overlaps the viewport by `overlap_px`.
    CellInView { index: usize, overlap_px: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LockScroll,
    UnlockScroll,
    LoadImage {
        index: usize,
        url: String,
        token: LoadToken,
    },
    ScrollIntoView(NavigationTarget),
    ApplyTheme(Theme),
    RevealCell(usize),
}

#[derive(Debug, Clone)]
pub struct PageController {
    catalog: Catalog,
    lightbox: Lightbox,
    shell: ShellState,
    reveal: RevealTracker,
    scroll_locked: bool,
}

impl PageController {
    pub fn new(catalog: Catalog, config: &SiteConfig) -> Self {
        let limits = ZoomLimits {
            min: config.lightbox.zoom_min,
            max: config.lightbox.zoom_max,
            step: config.lightbox.zoom_step,
        };
        Self {
            lightbox: Lightbox::new(catalog.len(), limits),
            reveal: RevealTracker::new(catalog.len(), config.layout.reveal_margin_px),
            shell: ShellState::default(),
            scroll_locked: false,
            catalog,
        }
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn shell(&self) -> &ShellState {
        &self.shell
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn dispatch(&mut self, event: PageEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match &event {
            PageEvent::OpenLightbox(index) => {
                let token = self.lightbox.open(*index);
                self.push_load(token, &mut effects);
            }
            PageEvent::Next => {
                let token = self.lightbox.next();
                self.push_load(token, &mut effects);
            }
            PageEvent::Prev => {
                let token = self.lightbox.prev();
                self.push_load(token, &mut effects);
            }
            PageEvent::ZoomIn => self.lightbox.zoom_in(),
            PageEvent::ZoomOut => self.lightbox.zoom_out(),
            PageEvent::ImageLoaded(token) => {
                if !self.lightbox.image_loaded(*token) {
                    debug!(?token, current = ?self.lightbox.state().token, "ignored load completion");
                }
            }
            PageEvent::CloseLightbox | PageEvent::BackdropClick => {
                self.lightbox.close();
            }
            PageEvent::Key(key) => {
                if let KeyOutcome::Navigated(token) = self.lightbox.handle_key(*key) {
                    self.push_load(Some(token), &mut effects);
                }
            }
            PageEvent::ToggleTheme => {
                effects.push(Effect::ApplyTheme(self.shell.toggle_theme()));
            }
            PageEvent::ToggleMenu => {
                self.shell.toggle_menu();
            }
            PageEvent::Navigate(target) => {
                effects.push(Effect::ScrollIntoView(self.shell.navigate(*target)));
            }
            PageEvent::ScrollToId(id) => {
                if let Some(target) = self.shell.scroll_to_id(id) {
                    effects.push(Effect::ScrollIntoView(target));
                }
            }
            PageEvent::CellInView { index, overlap_px } => {
                if self.reveal.observe(*index, *overlap_px) {
                    effects.push(Effect::RevealCell(*index));
                }
            }
        }
        self.sync_scroll_lock(&mut effects);
        debug!(?event, ?effects, "dispatch");
        effects
    }

    /// Release everything the page holds, as on an unexpected unmount.
    pub fn teardown(&mut self) -> Vec<Effect> {
        self.lightbox.close();
        self.scroll_locked = false;
        vec![Effect::UnlockScroll]
    }

    fn push_load(&self, token: Option<LoadToken>, effects: &mut Vec<Effect>) {
        let Some(token) = token else {
            return;
        };
        let index = self.lightbox.current_index();
        if let Some(record) = self.catalog.get(index) {
            effects.push(Effect::LoadImage {
                index,
                url: record.url.clone(),
                token,
            });
        }
    }

    fn sync_scroll_lock(&mut self, effects: &mut Vec<Effect>) {
        let open = self.lightbox.is_open();
        if open != self.scroll_locked {
            self.scroll_locked = open;
            effects.push(if open {
                Effect::LockScroll
            } else {
                Effect::UnlockScroll
            });
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EventParseError {
    #[error("unknown event '{0}'")]
    Unknown(String),
    #[error("event '{0}' expects an argument")]
    MissingArgument(String),
    #[error("invalid argument in '{0}'")]
    InvalidArgument(String),
}

/// Parses the compact event syntax used by `simulate`. `open:N` is a click
/// on grid cell `N`.
///
/// Accepted steps:
/// `open:0`, `next`, `prev`, `zoom-in`, `zoom-out`, `loaded:1`, `close`,
/// `backdrop`, `key:escape`, `theme`, `menu`, `nav:gallery`, `scroll:about`,
/// `view:0:120`.
impl FromStr for PageEvent {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let require = || arg.ok_or_else(|| EventParseError::MissingArgument(s.to_string()));
        let invalid = || EventParseError::InvalidArgument(s.to_string());

        let event = match name {
            "open" => grid::activate(require()?.parse().map_err(|_| invalid())?),
            "next" => PageEvent::Next,
            "prev" => PageEvent::Prev,
            "zoom-in" => PageEvent::ZoomIn,
            "zoom-out" => PageEvent::ZoomOut,
            "loaded" => PageEvent::ImageLoaded(LoadToken(
                require()?.parse().map_err(|_| invalid())?,
            )),
            "close" => PageEvent::CloseLightbox,
            "backdrop" => PageEvent::BackdropClick,
            "key" => PageEvent::Key(Key::from_name(require()?)),
            "theme" => PageEvent::ToggleTheme,
            "menu" => PageEvent::ToggleMenu,
            "nav" => PageEvent::Navigate(
                NavigationTarget::from_anchor_id(require()?).ok_or_else(invalid)?,
            ),
            "scroll" => PageEvent::ScrollToId(require()?.to_string()),
            "view" => {
                let (index, overlap) = require()?.split_once(':').ok_or_else(invalid)?;
                PageEvent::CellInView {
                    index: index.parse().map_err(|_| invalid())?,
                    overlap_px: overlap.parse().map_err(|_| invalid())?,
                }
            }
            _ => return Err(EventParseError::Unknown(s.to_string())),
        };
        Ok(event)
    }
}

/// Parse a comma-separated event script.
pub fn parse_script(script: &str) -> Result<Vec<PageEvent>, EventParseError> {
    script
        .split(',')
        .filter(|step| !step.trim().is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::three_image_controller;

    #[test]
    fn open_locks_scroll_and_requests_image() {
        let mut page = three_image_controller();
        let effects = page.dispatch(PageEvent::OpenLightbox(1));
        assert!(page.scroll_locked());
        assert!(matches!(effects[0], Effect::LoadImage { index: 1, .. }));
        assert_eq!(effects.last(), Some(&Effect::LockScroll));
    }

    #[test]
    fn escape_closes_and_releases_scroll() {
        let mut page = three_image_controller();
        page.dispatch(PageEvent::OpenLightbox(0));
        let effects = page.dispatch(PageEvent::Key(Key::Escape));
        assert!(!page.lightbox().is_open());
        assert!(!page.scroll_locked());
        assert_eq!(effects, vec![Effect::UnlockScroll]);
    }

    #[test]
    fn backdrop_click_closes() {
        let mut page = three_image_controller();
        page.dispatch(PageEvent::OpenLightbox(2));
        page.dispatch(PageEvent::BackdropClick);
        assert!(!page.lightbox().is_open());
        assert!(!page.scroll_locked());
    }

    #[test]
    fn navigation_keeps_lock_without_repeating_it() {
        let mut page = three_image_controller();
        page.dispatch(PageEvent::OpenLightbox(0));
        let effects = page.dispatch(PageEvent::Key(Key::ArrowRight));
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], Effect::LoadImage { index: 1, .. }));
        assert!(page.scroll_locked());
    }

    #[test]
    fn keys_do_nothing_while_closed() {
        let mut page = three_image_controller();
        assert!(page.dispatch(PageEvent::Key(Key::ArrowRight)).is_empty());
        assert!(page.dispatch(PageEvent::Key(Key::Escape)).is_empty());
        assert_eq!(page.lightbox().current_index(), 0);
    }

    #[test]
    fn teardown_always_releases_scroll() {
        let mut page = three_image_controller();
        page.dispatch(PageEvent::OpenLightbox(0));
        assert_eq!(page.teardown(), vec![Effect::UnlockScroll]);
        assert!(!page.scroll_locked());
        assert!(!page.lightbox().is_open());
    }

    #[test]
    fn stale_load_does_not_clear_spinner() {
        let mut page = three_image_controller();
        page.dispatch(PageEvent::OpenLightbox(0));
        let first = page.lightbox().state().token;
        page.dispatch(PageEvent::Next);
        page.dispatch(PageEvent::ImageLoaded(first));
        assert!(page.lightbox().is_loading());
        let current = page.lightbox().state().token;
        page.dispatch(PageEvent::ImageLoaded(current));
        assert!(!page.lightbox().is_loading());
    }

    #[test]
    fn menu_closes_after_navigation() {
        let mut page = three_image_controller();
        page.dispatch(PageEvent::ToggleMenu);
        assert!(page.shell().menu_open);
        let effects = page.dispatch(PageEvent::Navigate(NavigationTarget::Gallery));
        assert!(!page.shell().menu_open);
        assert_eq!(effects, vec![Effect::ScrollIntoView(NavigationTarget::Gallery)]);
    }

    #[test]
    fn scroll_to_missing_id_is_a_no_op() {
        let mut page = three_image_controller();
        assert!(page.dispatch(PageEvent::ScrollToId("pricing".into())).is_empty());
        assert_eq!(
            page.dispatch(PageEvent::ScrollToId("about".into())),
            vec![Effect::ScrollIntoView(NavigationTarget::About)]
        );
    }

    #[test]
    fn theme_toggle_emits_new_theme() {
        let mut page = three_image_controller();
        assert_eq!(
            page.dispatch(PageEvent::ToggleTheme),
            vec![Effect::ApplyTheme(Theme::Light)]
        );
    }

    #[test]
    fn cell_reveals_once() {
        let mut page = three_image_controller();
        let first = page.dispatch(PageEvent::CellInView { index: 1, overlap_px: 80.0 });
        let again = page.dispatch(PageEvent::CellInView { index: 1, overlap_px: 80.0 });
        assert_eq!(first, vec![Effect::RevealCell(1)]);
        assert!(again.is_empty());
    }

    #[test]
    fn parse_script_reads_all_steps() {
        let events = parse_script("open:0, next, zoom-in, loaded:2, key:Escape, nav:about, view:1:60").unwrap();
        assert_eq!(
            events,
            vec![
                PageEvent::OpenLightbox(0),
                PageEvent::Next,
                PageEvent::ZoomIn,
                PageEvent::ImageLoaded(LoadToken(2)),
                PageEvent::Key(Key::Escape),
                PageEvent::Navigate(NavigationTarget::About),
                PageEvent::CellInView { index: 1, overlap_px: 60.0 },
            ]
        );
    }

    #[test]
    fn parse_rejects_bad_steps() {
        assert_eq!(
            "jump".parse::<PageEvent>(),
            Err(EventParseError::Unknown("jump".into()))
        );
        assert_eq!(
            "open".parse::<PageEvent>(),
            Err(EventParseError::MissingArgument("open".into()))
        );
        assert_eq!(
            "nav:contacts".parse::<PageEvent>(),
            Err(EventParseError::InvalidArgument("nav:contacts".into()))
        );
    }
}
