// SPDX-License-Identifier: MPL-2.0
//! Terminal shell for the carousel core.
//!
//! Probes the given images, opens a gallery on them and reads commands from
//! stdin (see [`lens_carousel::app::script`]). Outbound signals are printed
//! to stdout, logs go to stderr.

use lens_carousel::app::{script, Flags, GalleryCoordinator};
use lens_carousel::application::port::GalleryShell;
use lens_carousel::config::{self, CarouselSettings, Config};
use lens_carousel::domain::gallery::{GalleryItem, ZoomTransform};
use lens_carousel::error::Result;
use lens_carousel::media::probe_items;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Prints every outbound signal as one line.
struct TerminalShell<W: Write> {
    out: W,
    dismissed: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalShell<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            dismissed: false,
            error: None,
        }
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_fmt(text).and_then(|()| self.out.write_all(b"\n")) {
            self.error = Some(err);
        }
    }

    /// Returns the first write error, if any.
    fn check(&mut self) -> Result<()> {
        match self.error.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

impl<W: Write> GalleryShell<PathBuf> for TerminalShell<W> {
    fn render_item(&mut self, item: &GalleryItem<PathBuf>, transform: Option<ZoomTransform>) {
        let path = item.handle().display().to_string();
        match transform {
            Some(t) => self.line(format_args!(
                "render {path} scale={:.3} inset={:.1},{:.1} zoomed={}",
                t.scale, t.inset.vertical, t.inset.horizontal, t.zoomed
            )),
            None => self.line(format_args!("render {path} (no transform)")),
        }
    }

    fn update_counter(&mut self, text: &str) {
        self.line(format_args!("counter {text}"));
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.line(format_args!("controls {}", if visible { "shown" } else { "hidden" }));
    }

    fn dismiss_requested(&mut self) {
        self.dismissed = true;
        self.line(format_args!("dismiss"));
    }
}

fn parse_flags() -> Result<Flags> {
    let mut args = pico_args::Arguments::from_env();

    Ok(Flags {
        verbose: args.contains(["-v", "--verbose"]),
        viewport: args.opt_value_from_fn("--viewport", script::parse_size)?,
        start_index: args.opt_value_from_str("--start")?.unwrap_or(0),
        config_path: args.opt_value_from_str("--config")?,
        files: args.finish().into_iter().map(PathBuf::from).collect(),
    })
}

fn load_config(flags: &Flags) -> Result<Config> {
    match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => Ok(config::load().unwrap_or_else(|err| {
            tracing::warn!("failed to load settings, using defaults: {err}");
            Config::default()
        })),
    }
}

fn main() -> Result<()> {
    let flags = parse_flags()?;

    let filter = if flags.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let settings = CarouselSettings::from(&load_config(&flags)?);
    let items = probe_items(&flags.files);
    if items.is_empty() {
        tracing::warn!("no readable images given");
    }

    let stdout = io::stdout();
    let mut shell = TerminalShell::new(stdout.lock());
    let mut coordinator = GalleryCoordinator::new(settings);

    if let Some(viewport) = flags.viewport {
        coordinator.viewport_resized(viewport, &mut shell);
    }
    coordinator.open(items, flags.start_index, &mut shell);
    shell.check()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let now = Instant::now();
        coordinator.tick(now, &mut shell);

        match script::parse_command(&line, now) {
            Ok(Some(message)) => coordinator.update(message, &mut shell),
            Ok(None) => {}
            Err(err) => eprintln!("{err}"),
        }
        shell.check()?;

        if shell.dismissed {
            return Ok(());
        }
    }

    // Input ended: resolve a tap that is still waiting for its double-tap window.
    let flush_at = Instant::now() + settings.tap_window.as_duration() + Duration::from_millis(1);
    coordinator.tick(flush_at, &mut shell);
    shell.check()
}
