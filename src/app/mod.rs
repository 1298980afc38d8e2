// SPDX-License-Identifier: MPL-2.0
//! Gallery coordinator: composition root of the carousel core.
//!
//! The `GalleryCoordinator` owns the pager, the prefetch window of zoom
//! states, the viewport and the tap recognizer, and translates inbound
//! events into calls on the [`GalleryShell`] port. Nothing else mutates that
//! state. Every handler runs to completion synchronously.

mod message;
pub mod script;
mod update;

pub use message::{Flags, Message};

use crate::application::port::GalleryShell;
use crate::application::query::{Pager, PagerInfo};
use crate::config::CarouselSettings;
use crate::domain::gallery::{GalleryItem, Size};
use crate::media::prefetch::{PrefetchStats, PrefetchWindow};
use crate::ui::state::tap;
use crate::ui::state::viewport::ViewportState;
use crate::ui::state::zoom::{ZoomController, ZoomState};
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Page counter text shown above the image (`"3 / 7"`).
#[must_use]
pub fn counter_text(index: usize, count: usize) -> String {
    format!("{} / {}", index + 1, count)
}

/// State that only exists between `open` and `close`.
struct Session<H> {
    pager: Pager<H>,
    window: PrefetchWindow,
}

/// Root carousel state bridging paging, zoom and the UI shell.
pub struct GalleryCoordinator<H> {
    settings: CarouselSettings,
    zoom: ZoomController,
    viewport: ViewportState,
    tap: tap::State,
    session: Option<Session<H>>,
}

impl<H> fmt::Debug for GalleryCoordinator<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryCoordinator")
            .field("settings", &self.settings)
            .field("viewport", &self.viewport)
            .field("open", &self.session.is_some())
            .field("pager", &self.pager_info())
            .finish()
    }
}

impl<H> Default for GalleryCoordinator<H> {
    fn default() -> Self {
        Self::new(CarouselSettings::default())
    }
}

impl<H> GalleryCoordinator<H> {
    /// Creates a closed coordinator.
    #[must_use]
    pub fn new(settings: CarouselSettings) -> Self {
        Self {
            settings,
            zoom: ZoomController::new(settings.zoom_multiplier),
            viewport: ViewportState::default(),
            tap: tap::State::new(settings.tap_window),
            session: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> CarouselSettings {
        self.settings
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Snapshot of the pager; default (empty) while closed.
    #[must_use]
    pub fn pager_info(&self) -> PagerInfo {
        self.session
            .as_ref()
            .map(|session| session.pager.info())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&GalleryItem<H>> {
        self.session.as_ref()?.pager.current_item()
    }

    /// Zoom state of the current page, if materialized.
    #[must_use]
    pub fn current_zoom(&self) -> Option<&ZoomState> {
        let session = self.session.as_ref()?;
        session.window.get(session.pager.current_index()?)
    }

    /// Indices of the pages holding a zoom state.
    #[must_use]
    pub fn materialized_pages(&self) -> Vec<usize> {
        self.session
            .as_ref()
            .map(|session| session.window.indices().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn prefetch_stats(&self) -> PrefetchStats {
        self.session
            .as_ref()
            .map(|session| session.window.stats())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn viewport_size(&self) -> Option<Size> {
        self.viewport.size
    }

    /// Starts a gallery session at `start_index` (clamped).
    ///
    /// An empty list hides the controls and renders nothing. Opening while
    /// already open replaces the session.
    pub fn open(
        &mut self,
        items: Vec<GalleryItem<H>>,
        start_index: usize,
        shell: &mut impl GalleryShell<H>,
    ) {
        self.tap.reset();

        let pager = Pager::new(items, start_index);
        let count = pager.len();
        let mut window = PrefetchWindow::new(self.settings.prefetch_radius);
        window.refresh(&pager, self.viewport.size, &self.zoom);

        info!(count, start = ?pager.current_index(), "gallery opened");
        if !self.viewport.is_known() {
            debug!("viewport unknown, pages render without zoom until first layout");
        }
        if count == 0 {
            warn!("gallery opened without items");
        }

        self.session = Some(Session { pager, window });
        shell.set_controls_visible(count > 1);
        self.emit_page(shell);
    }

    /// Moves to the next page. Returns whether the page changed.
    pub fn go_next(&mut self, shell: &mut impl GalleryShell<H>) -> bool {
        self.navigate(shell, Pager::next)
    }

    /// Moves to the previous page. Returns whether the page changed.
    pub fn go_previous(&mut self, shell: &mut impl GalleryShell<H>) -> bool {
        self.navigate(shell, Pager::previous)
    }

    /// A swipe transition finished on `index`.
    pub fn page_settled(&mut self, index: usize, shell: &mut impl GalleryShell<H>) -> bool {
        self.navigate(shell, |pager| pager.select(index))
    }

    /// Single tap on the image: returns to fit when zoomed, otherwise nothing.
    pub fn single_tap(&mut self, shell: &mut impl GalleryShell<H>) {
        let Some((zoom, state)) = self.current_zoom_mut() else {
            return;
        };
        if !state.is_zoomed() {
            return;
        }
        zoom.toggle_zoom(state);
        debug!("single tap returned to fit");
        self.emit_transform(shell);
    }

    /// Double tap on the image: always toggles zoom.
    ///
    /// Returns whether the page is zoomed afterwards, `None` when there is no
    /// materialized current page.
    pub fn double_tap(&mut self, shell: &mut impl GalleryShell<H>) -> Option<bool> {
        let (zoom, state) = self.current_zoom_mut()?;
        let zoomed = zoom.toggle_zoom(state);
        debug!(zoomed, "double tap toggled zoom");
        self.emit_transform(shell);
        Some(zoomed)
    }

    /// Raw tap at `now`, disambiguated into single/double tap.
    pub fn tap(&mut self, now: Instant, shell: &mut impl GalleryShell<H>) {
        let effect = self.tap.handle(tap::Message::Tap(now));
        self.dispatch_tap(effect, shell);
    }

    /// Clock tick: fires a pending single tap once the window has elapsed.
    pub fn tick(&mut self, now: Instant, shell: &mut impl GalleryShell<H>) {
        let effect = self.tap.handle(tap::Message::CheckTimeout(now));
        self.dispatch_tap(effect, shell);
    }

    /// Pinch gesture with an incremental scale factor.
    pub fn pinch(&mut self, factor: f32, shell: &mut impl GalleryShell<H>) {
        let Some((zoom, state)) = self.current_zoom_mut() else {
            return;
        };
        if zoom.pinch(state, factor).is_change() {
            self.emit_transform(shell);
        }
    }

    /// The display area changed size (layout pass, rotation).
    ///
    /// Degenerate sizes are ignored and the previous state kept.
    pub fn viewport_resized(&mut self, size: Size, shell: &mut impl GalleryShell<H>) {
        if size.is_degenerate() {
            warn!(width = size.width, height = size.height, "ignoring degenerate viewport");
            return;
        }
        let first_layout = !self.viewport.is_known();
        if !self.viewport.update(size) {
            return;
        }
        debug!(
            width = size.width,
            height = size.height,
            first_layout,
            "viewport resized"
        );

        let Some(session) = self.session.as_mut() else {
            return;
        };
        let focus = session.pager.current_index();
        let had_focus = focus.is_some_and(|index| session.window.contains(index));

        let effect = session.window.resize_all(size, &self.zoom, focus);
        session.window.refresh(&session.pager, Some(size), &self.zoom);
        let has_focus = focus.is_some_and(|index| session.window.contains(index));

        if effect.is_change() || (has_focus && !had_focus) {
            self.emit_transform(shell);
        }
    }

    /// Ends the session and asks the shell to dismiss the screen.
    pub fn close(&mut self, shell: &mut impl GalleryShell<H>) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.tap.reset();
        info!(
            count = session.pager.len(),
            stats = ?session.window.stats(),
            "gallery closed"
        );
        shell.dismiss_requested();
    }

    fn navigate(
        &mut self,
        shell: &mut impl GalleryShell<H>,
        step: impl FnOnce(&mut Pager<H>) -> bool,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !step(&mut session.pager) {
            debug!(index = ?session.pager.current_index(), "navigation ignored at boundary");
            return false;
        }
        session
            .window
            .refresh(&session.pager, self.viewport.size, &self.zoom);
        debug!(index = ?session.pager.current_index(), "page changed");

        self.tap.reset();
        self.emit_page(shell);
        true
    }

    fn dispatch_tap(&mut self, effect: tap::Effect, shell: &mut impl GalleryShell<H>) {
        match effect {
            tap::Effect::SingleTap => self.single_tap(shell),
            tap::Effect::DoubleTap => {
                self.double_tap(shell);
            }
            tap::Effect::None => {}
        }
    }

    fn current_zoom_mut(&mut self) -> Option<(&ZoomController, &mut ZoomState)> {
        let session = self.session.as_mut()?;
        let index = session.pager.current_index()?;
        let state = session.window.get_mut(index)?;
        Some((&self.zoom, state))
    }

    /// Counter plus render of the current page.
    fn emit_page(&self, shell: &mut impl GalleryShell<H>) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let Some(index) = session.pager.current_index() else {
            return;
        };
        shell.update_counter(&counter_text(index, session.pager.len()));
        self.emit_transform(shell);
    }

    /// Render of the current page with its latest transform.
    fn emit_transform(&self, shell: &mut impl GalleryShell<H>) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let Some(index) = session.pager.current_index() else {
            return;
        };
        if let Some(item) = session.pager.get(index) {
            shell.render_item(item, session.window.get(index).map(ZoomState::transform));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{RecordingShell, ShellEvent};
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;

    const VIEWPORT: Size = Size::new(300.0, 300.0);

    fn items(count: usize) -> Vec<GalleryItem<usize>> {
        (0..count)
            .map(|i| GalleryItem::new(i, Size::new(600.0, 300.0)))
            .collect()
    }

    fn opened(count: usize, start: usize) -> (GalleryCoordinator<usize>, RecordingShell<usize>) {
        let mut coordinator = GalleryCoordinator::default();
        let mut shell = RecordingShell::new();
        coordinator.viewport_resized(VIEWPORT, &mut shell);
        coordinator.open(items(count), start, &mut shell);
        (coordinator, shell)
    }

    #[test]
    fn counter_text_is_one_based() {
        assert_eq!(counter_text(0, 4), "1 / 4");
        assert_eq!(counter_text(3, 4), "4 / 4");
    }

    #[test]
    fn open_emits_visibility_counter_and_render() {
        let (_, shell) = opened(3, 1);
        let events = shell.events();

        assert_eq!(events[0], ShellEvent::ControlsVisible(true));
        assert_eq!(events[1], ShellEvent::Counter("2 / 3".to_string()));
        match &events[2] {
            ShellEvent::Render { handle, transform } => {
                assert_eq!(*handle, 1);
                let transform = transform.expect("viewport known");
                assert_abs_diff_eq!(transform.scale, 0.5);
                assert!(!transform.zoomed);
            }
            other => panic!("expected render, got {other:?}"),
        }
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn open_clamps_start_index() {
        let (coordinator, shell) = opened(3, 5);
        assert_eq!(coordinator.pager_info().current_index, Some(2));
        assert_eq!(shell.last_counter(), Some("3 / 3"));
    }

    #[test]
    fn open_materializes_prefetch_window() {
        let (coordinator, _) = opened(10, 0);
        assert_eq!(coordinator.materialized_pages(), vec![0, 1]);

        let (coordinator, _) = opened(10, 5);
        assert_eq!(coordinator.materialized_pages(), vec![4, 5, 6]);
    }

    #[test]
    fn empty_gallery_hides_controls_and_renders_nothing() {
        let (mut coordinator, mut shell) = opened(0, 0);
        assert_eq!(shell.drain(), vec![ShellEvent::ControlsVisible(false)]);

        assert!(!coordinator.go_next(&mut shell));
        assert!(!coordinator.go_previous(&mut shell));
        coordinator.double_tap(&mut shell);
        assert!(shell.events().is_empty());
    }

    #[test]
    fn single_item_hides_controls_and_never_moves() {
        let (mut coordinator, mut shell) = opened(1, 0);
        assert_eq!(shell.events()[0], ShellEvent::ControlsVisible(false));
        shell.drain();

        assert!(!coordinator.go_next(&mut shell));
        assert!(!coordinator.go_previous(&mut shell));
        assert!(shell.events().is_empty());
    }

    #[test]
    fn navigation_updates_counter_and_window() {
        let (mut coordinator, mut shell) = opened(5, 0);
        shell.drain();

        assert!(coordinator.go_next(&mut shell));
        assert_eq!(shell.last_counter(), Some("2 / 5"));
        assert_eq!(shell.last_render().map(|(h, _)| *h), Some(1));
        assert_eq!(coordinator.materialized_pages(), vec![0, 1, 2]);

        assert!(coordinator.go_next(&mut shell));
        assert_eq!(coordinator.materialized_pages(), vec![1, 2, 3]);
        assert_eq!(coordinator.prefetch_stats().evictions, 1);
    }

    #[test]
    fn boundary_navigation_emits_nothing() {
        let (mut coordinator, mut shell) = opened(2, 1);
        shell.drain();
        assert!(!coordinator.go_next(&mut shell));
        assert!(shell.events().is_empty());
    }

    #[test]
    fn page_settled_jumps_to_index() {
        let (mut coordinator, mut shell) = opened(6, 0);
        assert!(coordinator.page_settled(4, &mut shell));
        assert_eq!(shell.last_counter(), Some("5 / 6"));
        assert_eq!(coordinator.materialized_pages(), vec![3, 4, 5]);
        assert!(!coordinator.page_settled(4, &mut shell));
    }

    #[test]
    fn double_tap_toggles_and_single_tap_returns_to_fit() {
        let (mut coordinator, mut shell) = opened(3, 0);

        assert_eq!(coordinator.double_tap(&mut shell), Some(true));
        let (_, transform) = shell.last_render().expect("rendered");
        assert!(transform.is_some_and(|t| t.zoomed));

        shell.drain();
        coordinator.single_tap(&mut shell);
        let (_, transform) = shell.last_render().expect("rendered");
        assert!(transform.is_some_and(|t| !t.zoomed));

        // At fit a single tap does nothing.
        shell.drain();
        coordinator.single_tap(&mut shell);
        assert!(shell.events().is_empty());
    }

    #[test]
    fn raw_double_tap_suppresses_single_tap() {
        let (mut coordinator, mut shell) = opened(3, 0);
        let t0 = Instant::now();

        // Zoom in first so a stray single tap would be visible.
        coordinator.double_tap(&mut shell);
        shell.drain();

        coordinator.tap(t0, &mut shell);
        coordinator.tap(t0 + Duration::from_millis(100), &mut shell);
        coordinator.tick(t0 + Duration::from_secs(1), &mut shell);

        let renders = shell
            .events()
            .iter()
            .filter(|e| matches!(e, ShellEvent::Render { .. }))
            .count();
        assert_eq!(renders, 1);
        assert!(coordinator.current_zoom().is_some_and(|z| !z.is_zoomed()));
    }

    #[test]
    fn raw_single_tap_fires_after_window() {
        let (mut coordinator, mut shell) = opened(3, 0);
        coordinator.double_tap(&mut shell);
        let t0 = Instant::now();

        coordinator.tap(t0, &mut shell);
        assert!(coordinator.current_zoom().is_some_and(ZoomState::is_zoomed));

        coordinator.tick(t0 + Duration::from_millis(400), &mut shell);
        assert!(coordinator.current_zoom().is_some_and(|z| !z.is_zoomed()));
    }

    #[test]
    fn pinch_changes_scale_within_bounds() {
        let (mut coordinator, mut shell) = opened(3, 0);
        coordinator.pinch(2.0, &mut shell);
        let zoom = coordinator.current_zoom().expect("materialized");
        assert_abs_diff_eq!(zoom.current_scale(), 1.0);

        coordinator.pinch(100.0, &mut shell);
        let zoom = coordinator.current_zoom().expect("materialized");
        assert_eq!(zoom.current_scale(), zoom.max_scale());
    }

    #[test]
    fn open_before_layout_materializes_on_first_viewport() {
        let mut coordinator = GalleryCoordinator::default();
        let mut shell = RecordingShell::new();
        coordinator.open(items(3), 0, &mut shell);

        assert_eq!(shell.last_render(), Some((&0, None)));
        assert!(coordinator.materialized_pages().is_empty());

        coordinator.viewport_resized(VIEWPORT, &mut shell);
        assert_eq!(coordinator.materialized_pages(), vec![0, 1]);
        let (_, transform) = shell.last_render().expect("rendered");
        assert!(transform.is_some());
    }

    #[test]
    fn rotation_keeps_relative_zoom() {
        let (mut coordinator, mut shell) = opened(3, 0);
        coordinator.pinch(2.0, &mut shell);

        coordinator.viewport_resized(Size::new(600.0, 600.0), &mut shell);
        let zoom = coordinator.current_zoom().expect("materialized");
        assert_abs_diff_eq!(zoom.min_scale(), 1.0);
        assert_abs_diff_eq!(zoom.current_scale(), 2.0);
    }

    #[test]
    fn degenerate_viewport_is_ignored() {
        let (mut coordinator, mut shell) = opened(3, 0);
        shell.drain();
        coordinator.viewport_resized(Size::new(0.0, 0.0), &mut shell);
        assert!(shell.events().is_empty());
        assert_eq!(coordinator.viewport_size(), Some(VIEWPORT));
    }

    #[test]
    fn degenerate_item_renders_without_transform() {
        let mut coordinator = GalleryCoordinator::default();
        let mut shell = RecordingShell::new();
        coordinator.viewport_resized(VIEWPORT, &mut shell);
        coordinator.open(vec![GalleryItem::new(9, Size::default())], 0, &mut shell);

        assert_eq!(shell.last_render(), Some((&9, None)));
        assert_eq!(coordinator.double_tap(&mut shell), None);
    }

    #[test]
    fn close_dismisses_once_and_drops_state() {
        let (mut coordinator, mut shell) = opened(3, 0);
        shell.drain();

        coordinator.close(&mut shell);
        assert_eq!(shell.drain(), vec![ShellEvent::Dismiss]);
        assert!(!coordinator.is_open());
        assert!(coordinator.materialized_pages().is_empty());

        coordinator.close(&mut shell);
        assert!(!coordinator.go_next(&mut shell));
        assert!(shell.events().is_empty());
    }
}
