//! Lightbox overlay state machine.
//!
//! The overlay is either closed or open on one catalog index. While open it
//! carries a zoom factor and a loading flag for the displayed image:
//!
//! ```text
//!             open(i)                 next / prev (wraps)
//!   Closed ───────────────▶ Open ◀──────────────────────┐
//!     ▲                      │ │                        │
//!     │  close / Escape /    │ └────────────────────────┘
//!     └──── backdrop ────────┘   zoom_in / zoom_out (clamped)
//! ```
//!
//! Every time the displayed image changes (fresh open or navigation) the zoom
//! returns to 1.0, the loading flag goes up, and a new [`LoadToken`] is
//! issued. A load completion only clears the loading flag when it carries the
//! current token, so a slow load for an image the user already navigated away
//! from cannot hide the spinner of the image now on screen.
//!
//! There is no timeout: an image that never loads keeps the spinner up.

/// Identifies one image-load request. Issued on every open and navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken(pub u64);

/// Zoom bounds and increment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 3.0,
            step: 0.25,
        }
    }
}

/// Keys the overlay reacts to. Everything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value (or a lowercase alias) to a key.
    pub fn from_name(name: &str) -> Key {
        match name {
            "ArrowLeft" | "left" | "arrowleft" => Key::ArrowLeft,
            "ArrowRight" | "right" | "arrowright" => Key::ArrowRight,
            "Escape" | "Esc" | "escape" | "esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Snapshot of the overlay, as rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightboxState {
    pub is_open: bool,
    pub current_index: usize,
    pub zoom: f64,
    pub is_loading: bool,
    pub token: LoadToken,
}

/// What a key press did to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Navigated(LoadToken),
    Closed,
}

#[derive(Debug, Clone)]
pub struct Lightbox {
    len: usize,
    limits: ZoomLimits,
    state: LightboxState,
    issued: u64,
}

impl Lightbox {
    /// A closed overlay over a catalog of `len` images.
    pub fn new(len: usize, limits: ZoomLimits) -> Self {
        Self {
            len,
            limits,
            state: LightboxState {
                is_open: false,
                current_index: 0,
                zoom: 1.0,
                is_loading: true,
                token: LoadToken(0),
            },
            issued: 0,
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Open on `index`. Out-of-range indices leave the overlay untouched.
    pub fn open(&mut self, index: usize) -> Option<LoadToken> {
        if index >= self.len {
            return None;
        }
        self.state.is_open = true;
        Some(self.show(index))
    }

    pub fn next(&mut self) -> Option<LoadToken> {
        if !self.state.is_open {
            return None;
        }
        let index = (self.state.current_index + 1) % self.len;
        Some(self.show(index))
    }

    pub fn prev(&mut self) -> Option<LoadToken> {
        if !self.state.is_open {
            return None;
        }
        let index = (self.state.current_index + self.len - 1) % self.len;
        Some(self.show(index))
    }

    /// Returns `true` when the overlay was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.state.is_open, false)
    }

    pub fn zoom_in(&mut self) {
        if self.state.is_open {
            self.state.zoom = (self.state.zoom + self.limits.step).min(self.limits.max);
        }
    }

    pub fn zoom_out(&mut self) {
        if self.state.is_open {
            self.state.zoom = (self.state.zoom - self.limits.step).max(self.limits.min);
        }
    }

    /// Apply a load completion. Stale tokens are ignored; returns whether
    /// the loading flag was cleared.
    pub fn image_loaded(&mut self, token: LoadToken) -> bool {
        if !self.state.is_open || token != self.state.token || !self.state.is_loading {
            return false;
        }
        self.state.is_loading = false;
        true
    }

    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if !self.state.is_open {
            return KeyOutcome::Ignored;
        }
        match key {
            Key::ArrowLeft => self.prev().map_or(KeyOutcome::Ignored, KeyOutcome::Navigated),
            Key::ArrowRight => self.next().map_or(KeyOutcome::Ignored, KeyOutcome::Navigated),
            Key::Escape => {
                self.close();
                KeyOutcome::Closed
            }
            Key::Other => KeyOutcome::Ignored,
        }
    }

    /// Zoom readout, e.g. `125%`.
    pub fn zoom_percent(&self) -> String {
        format!("{}%", (self.state.zoom * 100.0).round() as i64)
    }

    /// Position readout, e.g. `2 / 3`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.state.current_index + 1, self.len)
    }

    fn show(&mut self, index: usize) -> LoadToken {
        self.issued += 1;
        let token = LoadToken(self.issued);
        self.state.current_index = index;
        self.state.zoom = 1.0;
        self.state.is_loading = true;
        self.state.token = token;
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lightbox(len: usize) -> Lightbox {
        Lightbox::new(len, ZoomLimits::default())
    }

    #[test]
    fn starts_closed() {
        let lb = lightbox(3);
        assert!(!lb.is_open());
        assert_eq!(lb.zoom(), 1.0);
    }

    #[test]
    fn open_resets_zoom_and_loading() {
        let mut lb = lightbox(3);
        lb.open(1);
        lb.zoom_in();
        lb.zoom_in();
        let token = lb.state().token;
        assert!(lb.image_loaded(token));
        lb.close();

        lb.open(2);
        assert!(lb.is_open());
        assert_eq!(lb.current_index(), 2);
        assert_eq!(lb.zoom(), 1.0);
        assert!(lb.is_loading());
    }

    #[test]
    fn close_keeps_loading_flag() {
        let mut lb = lightbox(3);
        lb.open(0);
        assert!(lb.close());
        assert!(lb.is_loading());

        lb.open(0);
        let token = lb.state().token;
        lb.image_loaded(token);
        lb.close();
        assert!(!lb.is_loading());
    }

    #[test]
    fn open_out_of_range_is_rejected() {
        let mut lb = lightbox(3);
        assert_eq!(lb.open(3), None);
        assert!(!lb.is_open());
    }

    #[test]
    fn empty_catalog_never_opens() {
        let mut lb = lightbox(0);
        assert_eq!(lb.open(0), None);
        assert_eq!(lb.next(), None);
        assert!(!lb.is_open());
    }

    #[test]
    fn next_wraps_back_to_start_after_len_steps() {
        for len in 1..6 {
            for start in 0..len {
                let mut lb = lightbox(len);
                lb.open(start);
                for _ in 0..len {
                    lb.next();
                }
                assert_eq!(lb.current_index(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn prev_wraps_to_last() {
        for len in 1..6 {
            for start in 0..len {
                let mut lb = lightbox(len);
                lb.open(start);
                lb.prev();
                assert_eq!(lb.current_index(), (start + len - 1) % len);
            }
        }
    }

    #[test]
    fn three_image_walkthrough() {
        let mut lb = lightbox(3);
        lb.open(0);
        assert_eq!(lb.current_index(), 0);
        lb.next();
        assert_eq!(lb.current_index(), 1);
        lb.next();
        lb.next();
        assert_eq!(lb.current_index(), 0);
        lb.prev();
        assert_eq!(lb.current_index(), 2);
    }

    #[test]
    fn navigation_resets_zoom_and_loading() {
        let mut lb = lightbox(3);
        lb.open(0);
        lb.zoom_in();
        let token = lb.state().token;
        lb.image_loaded(token);
        lb.next();
        assert_eq!(lb.zoom(), 1.0);
        assert!(lb.is_loading());
    }

    #[test]
    fn zoom_in_saturates_after_eight_steps() {
        let mut lb = lightbox(3);
        lb.open(0);
        for _ in 0..8 {
            lb.zoom_in();
        }
        assert_eq!(lb.zoom(), 3.0);
        lb.zoom_in();
        assert_eq!(lb.zoom(), 3.0);
        assert_eq!(lb.zoom_percent(), "300%");
    }

    #[test]
    fn zoom_out_saturates_at_half() {
        let mut lb = lightbox(3);
        lb.open(0);
        for _ in 0..10 {
            lb.zoom_out();
        }
        assert_eq!(lb.zoom(), 0.5);
        assert_eq!(lb.zoom_percent(), "50%");
    }

    #[test]
    fn zoom_keeps_index_and_loading() {
        let mut lb = lightbox(3);
        lb.open(1);
        lb.zoom_in();
        assert_eq!(lb.current_index(), 1);
        assert!(lb.is_loading());
        assert_eq!(lb.zoom_percent(), "125%");
    }

    #[test]
    fn stale_load_completion_is_ignored() {
        let mut lb = lightbox(3);
        let first = lb.open(0).unwrap();
        let second = lb.next().unwrap();
        assert!(!lb.image_loaded(first));
        assert!(lb.is_loading());
        assert!(lb.image_loaded(second));
        assert!(!lb.is_loading());
    }

    #[test]
    fn reopening_same_index_issues_fresh_token() {
        let mut lb = lightbox(3);
        let first = lb.open(0).unwrap();
        lb.close();
        let second = lb.open(0).unwrap();
        assert_ne!(first, second);
        assert!(!lb.image_loaded(first));
    }

    #[test]
    fn keys_map_to_navigation_and_close() {
        let mut lb = lightbox(3);
        lb.open(0);
        assert!(matches!(lb.handle_key(Key::ArrowRight), KeyOutcome::Navigated(_)));
        assert_eq!(lb.current_index(), 1);
        assert!(matches!(lb.handle_key(Key::ArrowLeft), KeyOutcome::Navigated(_)));
        assert_eq!(lb.current_index(), 0);
        assert_eq!(lb.handle_key(Key::Other), KeyOutcome::Ignored);
        assert_eq!(lb.handle_key(Key::Escape), KeyOutcome::Closed);
        assert!(!lb.is_open());
    }

    #[test]
    fn keys_are_inert_while_closed() {
        let mut lb = lightbox(3);
        assert_eq!(lb.handle_key(Key::ArrowRight), KeyOutcome::Ignored);
        assert_eq!(lb.handle_key(Key::Escape), KeyOutcome::Ignored);
        assert_eq!(lb.current_index(), 0);
    }

    #[test]
    fn key_names_follow_dom_values() {
        assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_name("right"), Key::ArrowRight);
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("Enter"), Key::Other);
    }

    #[test]
    fn counter_is_one_based() {
        let mut lb = lightbox(3);
        lb.open(2);
        assert_eq!(lb.counter(), "3 / 3");
    }
}
