#![warn(missing_docs)]

//! Constrained panel tiling for the railkit kernel.
//!
//! Subdivides a usable run length into a deterministic number of
//! equal-width panels separated by fixed gaps, with no panel wider than a
//! maximum. The same search lays out glass panels, pickets, and post bays.

/// Number of count increments attempted before giving up on convergence.
const MAX_TILE_ITERATIONS: usize = 100;

/// An equal-width panel layout over a usable length.
///
/// Invariant: `count * width + (count - 1) * gap == usable_length` within
/// floating tolerance, and `width <= max_width` whenever the search
/// converged. Panel `i` starts at `i * (width + gap)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    /// Number of panels.
    pub count: usize,
    /// Uniform panel width.
    pub width: f64,
    /// Gap between adjacent panels.
    pub gap: f64,
}

impl PanelLayout {
    /// Start offset of panel `i` along the run.
    pub fn panel_start(&self, i: usize) -> f64 {
        i as f64 * (self.width + self.gap)
    }

    /// `(start, end)` span of each panel along the run.
    pub fn spans(&self) -> Vec<(f64, f64)> {
        (0..self.count)
            .map(|i| {
                let start = self.panel_start(i);
                (start, start + self.width)
            })
            .collect()
    }

    /// Total length covered: panels plus interior gaps.
    pub fn total_length(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.count as f64 * self.width + (self.count - 1) as f64 * self.gap
        }
    }
}

/// Tile a usable length into equal-width panels.
///
/// Starts from `ceil(usable_length / max_width)` panels and increments the
/// count until the resulting width fits `(0, max_width]`. Returns `None`
/// for non-positive lengths, widths, or negative gaps — degenerate input
/// is skipped, never turned into fabricated geometry.
///
/// Convergence can be impossible (e.g. `gap >= max_width`); after a hard
/// iteration cap the last computed layout is returned as-is so the caller
/// can still proceed with a degraded tiling.
pub fn tile(usable_length: f64, gap: f64, max_width: f64) -> Option<PanelLayout> {
    if usable_length <= 0.0 || max_width <= 0.0 || gap < 0.0 {
        return None;
    }

    let mut count = (usable_length / max_width).ceil() as usize;
    if count == 0 {
        count = 1;
    }

    let mut layout = None;
    for _ in 0..MAX_TILE_ITERATIONS {
        let width = (usable_length - (count as f64 - 1.0) * gap) / count as f64;
        layout = Some(PanelLayout { count, width, gap });
        if width > 0.0 && width <= max_width {
            return layout;
        }
        count += 1;
    }
    layout
}
