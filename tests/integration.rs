// SPDX-License-Identifier: MPL-2.0
use lens_carousel::app::{GalleryCoordinator, Message};
use lens_carousel::application::port::{RecordingShell, ShellEvent};
use lens_carousel::config::{self, CarouselSettings, Config};
use lens_carousel::domain::gallery::{GalleryItem, Size};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn gallery(names: &[&'static str]) -> Vec<GalleryItem<&'static str>> {
    names
        .iter()
        .map(|name| GalleryItem::new(*name, Size::new(600.0, 300.0)))
        .collect()
}

fn open_at(
    names: &[&'static str],
    start_index: usize,
) -> (GalleryCoordinator<&'static str>, RecordingShell<&'static str>) {
    let mut coordinator = GalleryCoordinator::default();
    let mut shell = RecordingShell::new();
    coordinator.update(Message::ViewportResized(Size::new(300.0, 300.0)), &mut shell);
    coordinator.update(
        Message::Open {
            items: gallery(names),
            start_index,
        },
        &mut shell,
    );
    (coordinator, shell)
}

#[test]
fn out_of_range_start_opens_last_page() {
    let (coordinator, shell) = open_at(&["A", "B", "C"], 5);

    assert_eq!(coordinator.pager_info().current_index, Some(2));
    assert_eq!(shell.last_counter(), Some("3 / 3"));
    assert_eq!(shell.last_render().map(|(handle, _)| *handle), Some("C"));
}

#[test]
fn empty_gallery_only_hides_controls() {
    let (_, shell) = open_at(&[], 0);
    assert_eq!(shell.events(), &[ShellEvent::ControlsVisible(false)]);
}

#[test]
fn single_item_gallery_hides_controls_and_ignores_navigation() {
    let (mut coordinator, mut shell) = open_at(&["only"], 0);
    assert_eq!(shell.events()[0], ShellEvent::ControlsVisible(false));
    shell.drain();

    coordinator.update(Message::Next, &mut shell);
    coordinator.update(Message::Previous, &mut shell);
    assert!(shell.events().is_empty());
}

#[test]
fn browsing_forward_and_back_keeps_window_bounded() {
    let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
    let (mut coordinator, mut shell) = open_at(&names, 0);

    while coordinator.go_next(&mut shell) {
        assert!(coordinator.materialized_pages().len() <= 3);
    }
    assert_eq!(shell.last_counter(), Some("8 / 8"));
    assert_eq!(coordinator.materialized_pages(), vec![6, 7]);

    while coordinator.go_previous(&mut shell) {
        assert!(coordinator.materialized_pages().len() <= 3);
    }
    assert_eq!(shell.last_counter(), Some("1 / 8"));
    assert_eq!(coordinator.materialized_pages(), vec![0, 1]);
}

#[test]
fn fit_scale_for_wide_image_in_square_viewport() {
    let (coordinator, _) = open_at(&["wide"], 0);
    let zoom = coordinator.current_zoom().expect("materialized");
    assert_eq!(zoom.min_scale(), 0.5);
    assert_eq!(zoom.max_scale(), 1.25);
    assert_eq!(zoom.content_inset().vertical, 75.0);
}

#[test]
fn double_tap_then_rotation_keeps_relative_zoom() {
    let (mut coordinator, mut shell) = open_at(&["a", "b"], 0);
    coordinator.update(Message::Pinch(2.0), &mut shell);
    coordinator.update(Message::ViewportResized(Size::new(600.0, 600.0)), &mut shell);

    let zoom = coordinator.current_zoom().expect("materialized");
    assert!((zoom.min_scale() - 1.0).abs() < 1e-6);
    assert!((zoom.current_scale() - 2.0).abs() < 1e-6);

    let (_, transform) = shell.last_render().expect("rendered");
    assert!(transform.is_some_and(|t| t.zoomed));
}

#[test]
fn zoom_survives_navigation_within_window() {
    let (mut coordinator, mut shell) = open_at(&["a", "b", "c"], 0);
    coordinator.update(Message::DoubleTap, &mut shell);
    coordinator.update(Message::Next, &mut shell);
    coordinator.update(Message::Previous, &mut shell);

    assert!(coordinator.current_zoom().is_some_and(|z| z.is_zoomed()));
}

#[test]
fn zoom_resets_after_page_leaves_window() {
    let (mut coordinator, mut shell) = open_at(&["a", "b", "c", "d"], 0);
    coordinator.update(Message::DoubleTap, &mut shell);
    coordinator.update(Message::Next, &mut shell);
    coordinator.update(Message::Next, &mut shell);
    coordinator.update(Message::Previous, &mut shell);
    coordinator.update(Message::Previous, &mut shell);

    assert!(coordinator.current_zoom().is_some_and(|z| !z.is_zoomed()));
}

#[test]
fn tap_sequence_distinguishes_single_and_double() {
    let (mut coordinator, mut shell) = open_at(&["a", "b"], 0);
    let t0 = Instant::now();

    // Double tap zooms in.
    coordinator.update(Message::Tap(t0), &mut shell);
    coordinator.update(Message::Tap(t0 + Duration::from_millis(120)), &mut shell);
    assert!(coordinator.current_zoom().is_some_and(|z| z.is_zoomed()));

    // A lone tap zooms out once the window has passed.
    let t1 = t0 + Duration::from_secs(2);
    coordinator.update(Message::Tap(t1), &mut shell);
    assert!(coordinator.current_zoom().is_some_and(|z| z.is_zoomed()));
    coordinator.update(Message::Tick(t1 + Duration::from_millis(500)), &mut shell);
    assert!(coordinator.current_zoom().is_some_and(|z| !z.is_zoomed()));
}

#[test]
fn close_signals_dismiss() {
    let (mut coordinator, mut shell) = open_at(&["a", "b"], 1);
    coordinator.update(Message::Close, &mut shell);

    assert_eq!(shell.events().last(), Some(&ShellEvent::Dismiss));
    assert!(!coordinator.is_open());
}

#[test]
fn settings_from_config_file_drive_the_coordinator() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let config = Config {
        max_zoom_multiplier: Some(4.0),
        prefetch_radius: Some(0),
        double_tap_window_ms: Some(200),
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let mut coordinator = GalleryCoordinator::new(CarouselSettings::from(&loaded));
    let mut shell = RecordingShell::new();
    coordinator.viewport_resized(Size::new(300.0, 300.0), &mut shell);
    coordinator.open(gallery(&["a", "b", "c"]), 1, &mut shell);

    assert_eq!(coordinator.materialized_pages(), vec![1]);
    let zoom = coordinator.current_zoom().expect("materialized");
    assert_eq!(zoom.max_scale(), 2.0);

    dir.close().expect("Failed to close temporary directory");
}
