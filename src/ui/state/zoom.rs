// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles all zoom-related state and logic for one page:
//! - Fit scale computed from viewport and natural size
//! - Clamped scale changes (toggle, pinch)
//! - Centering inset for undersized content
//! - Rescaling across viewport changes (rotation)

use crate::domain::gallery::{ContentInset, Size, ZoomTransform};
use crate::domain::ui::ZoomMultiplier;

/// Scale bounds for one item in one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitScale {
    /// Scale at which the whole item is visible.
    pub min: f32,
    /// `min` times the zoom multiplier.
    pub max: f32,
}

/// Computes the fit scale bounds.
///
/// Returns `None` when either size is degenerate; callers keep their
/// previous state in that case.
#[must_use]
pub fn compute_fit(viewport: Size, natural: Size, multiplier: ZoomMultiplier) -> Option<FitScale> {
    if viewport.is_degenerate() || natural.is_degenerate() {
        return None;
    }

    let width_scale = viewport.width / natural.width;
    let height_scale = viewport.height / natural.height;
    let min = width_scale.min(height_scale);

    if !min.is_finite() || min <= 0.0 {
        return None;
    }

    Some(FitScale {
        min,
        max: multiplier.apply(min),
    })
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Neither scale nor inset changed.
    None,
    /// The scale changed but the inset stayed the same.
    Rescaled,
    /// The inset changed (the scale may have changed too).
    InsetChanged(ContentInset),
}

impl Effect {
    /// Returns true when the rendered transform must be refreshed.
    #[must_use]
    pub fn is_change(self) -> bool {
        !matches!(self, Effect::None)
    }
}

/// Zoom state of one materialized page.
///
/// `min_scale <= current_scale <= max_scale` always holds. Only
/// [`ZoomController`] mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    viewport_size: Size,
    natural_size: Size,
    min_scale: f32,
    max_scale: f32,
    current_scale: f32,
    content_inset: ContentInset,
}

impl ZoomState {
    fn fitted(viewport_size: Size, natural_size: Size, fit: FitScale) -> Self {
        let mut state = Self {
            viewport_size,
            natural_size,
            min_scale: fit.min,
            max_scale: fit.max,
            current_scale: fit.min,
            content_inset: ContentInset::default(),
        };
        state.content_inset = state.centering_inset();
        state
    }

    fn centering_inset(&self) -> ContentInset {
        ContentInset::centering(self.viewport_size, self.scaled_size())
    }

    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    #[must_use]
    pub fn natural_size(&self) -> Size {
        self.natural_size
    }

    #[must_use]
    pub fn min_scale(&self) -> f32 {
        self.min_scale
    }

    #[must_use]
    pub fn max_scale(&self) -> f32 {
        self.max_scale
    }

    #[must_use]
    pub fn current_scale(&self) -> f32 {
        self.current_scale
    }

    #[must_use]
    pub fn content_inset(&self) -> ContentInset {
        self.content_inset
    }

    /// Size of the content at the current scale.
    #[must_use]
    pub fn scaled_size(&self) -> Size {
        self.natural_size.scaled(self.current_scale)
    }

    /// Zoomed means strictly above the fit scale.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.current_scale > self.min_scale
    }

    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        ZoomTransform {
            scale: self.current_scale,
            inset: self.content_inset,
            zoomed: self.is_zoomed(),
        }
    }
}

/// Applies zoom rules to [`ZoomState`] values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomController {
    multiplier: ZoomMultiplier,
}

impl ZoomController {
    #[must_use]
    pub fn new(multiplier: ZoomMultiplier) -> Self {
        Self { multiplier }
    }

    #[must_use]
    pub fn multiplier(&self) -> ZoomMultiplier {
        self.multiplier
    }

    #[must_use]
    pub fn compute_fit(&self, viewport: Size, natural: Size) -> Option<FitScale> {
        compute_fit(viewport, natural, self.multiplier)
    }

    /// Builds the fitted state for an item, or `None` for degenerate geometry.
    ///
    /// Pure: the same inputs always produce the same state.
    #[must_use]
    pub fn materialize(&self, viewport: Size, natural: Size) -> Option<ZoomState> {
        self.compute_fit(viewport, natural)
            .map(|fit| ZoomState::fitted(viewport, natural, fit))
    }

    /// Clamps `scale` into the state's bounds and applies it.
    ///
    /// NaN is ignored. Infinite scales land on the nearest bound.
    pub fn set_scale(&self, state: &mut ZoomState, scale: f32) -> Effect {
        if scale.is_nan() {
            return Effect::None;
        }

        let clamped = scale.clamp(state.min_scale, state.max_scale);
        if clamped == state.current_scale {
            return Effect::None;
        }
        state.current_scale = clamped;
        Self::refresh_inset(state)
    }

    /// Zoomed goes back to fit, otherwise zooms to the maximum.
    ///
    /// Returns whether the state is zoomed afterwards.
    pub fn toggle_zoom(&self, state: &mut ZoomState) -> bool {
        let target = if state.is_zoomed() {
            state.min_scale
        } else {
            state.max_scale
        };
        self.set_scale(state, target);
        state.is_zoomed()
    }

    #[must_use]
    pub fn is_zoomed(&self, state: &ZoomState) -> bool {
        state.is_zoomed()
    }

    /// Scales the current zoom by a relative pinch factor.
    pub fn pinch(&self, state: &mut ZoomState, factor: f32) -> Effect {
        if !factor.is_finite() || factor <= 0.0 {
            return Effect::None;
        }
        self.set_scale(state, state.current_scale * factor)
    }

    /// Recomputes bounds for a new viewport.
    ///
    /// A fitted state stays fitted. A zoomed state keeps its zoom factor
    /// relative to the fit scale, clamped to the new bounds. Degenerate
    /// viewports leave the state untouched.
    pub fn on_viewport_resized(&self, state: &mut ZoomState, viewport: Size) -> Effect {
        let Some(fit) = self.compute_fit(viewport, state.natural_size) else {
            tracing::warn!(
                width = viewport.width,
                height = viewport.height,
                "ignoring degenerate viewport"
            );
            return Effect::None;
        };

        let new_scale = if state.is_zoomed() {
            let relative = state.current_scale / state.min_scale;
            (fit.min * relative).clamp(fit.min, fit.max)
        } else {
            fit.min
        };

        let previous_scale = state.current_scale;
        state.viewport_size = viewport;
        state.min_scale = fit.min;
        state.max_scale = fit.max;
        state.current_scale = new_scale;

        match Self::refresh_inset(state) {
            Effect::Rescaled if new_scale == previous_scale => Effect::None,
            effect => effect,
        }
    }

    fn refresh_inset(state: &mut ZoomState) -> Effect {
        let inset = state.centering_inset();
        if inset == state.content_inset {
            Effect::Rescaled
        } else {
            state.content_inset = inset;
            Effect::InsetChanged(inset)
        }
    }
}
