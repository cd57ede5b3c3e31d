//! The stateful table view a rendering host drives.
//!
//! Holds the current [`Dataset`] and scroll position, and answers the only
//! question the host needs per frame: which rows exist right now, and what
//! do they look like. The header is exposed separately and never moves with
//! the scroll offset.

use crate::table::scroll::{ScrollState, ViewportWindow, window_bounds};
use crate::types::{Column, Dataset, Row};
use std::sync::Arc;

/// Alternating background assignment for a row.
///
/// Parity is taken from the absolute dataset index, not the position within
/// the rendered window, so the same row renders identically no matter where
/// the window currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowStripe {
    Even,
    Odd,
}

impl RowStripe {
    pub fn of(index: usize) -> Self {
        if index % 2 == 0 {
            RowStripe::Even
        } else {
            RowStripe::Odd
        }
    }
}

/// One materialized row, ready for the host to paint.
#[derive(Clone, Copy, Debug)]
pub struct RenderRow<'a> {
    /// Absolute dataset index.
    pub index: usize,
    /// Stripe derived from the absolute index.
    pub stripe: RowStripe,
    pub row: &'a Row,
}

/// Virtualized view over a parsed dataset.
pub struct TableView {
    dataset: Arc<Dataset>,
    scroll: ScrollState,
}

impl TableView {
    /// Create a view at scroll origin for the given viewport height.
    pub fn new(dataset: Arc<Dataset>, viewport_height: f32) -> Self {
        Self {
            dataset,
            scroll: ScrollState::new(viewport_height),
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// The pinned header, independent of scroll offset.
    pub fn columns(&self) -> &[Column] {
        &self.dataset.columns
    }

    /// Handle a scroll event. The offset is clamped to the content extent.
    pub fn on_scroll(&mut self, offset_y: f32) {
        self.scroll.scroll_to(offset_y, self.dataset.row_count());
    }

    /// Handle a viewport resize event.
    pub fn on_resize(&mut self, viewport_height: f32) {
        self.scroll.set_viewport_height(viewport_height);
        // Re-clamp: a taller viewport leaves less room to scroll.
        let offset = self.scroll.offset_y;
        self.scroll.scroll_to(offset, self.dataset.row_count());
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset_y
    }

    /// Current window bounds, `None` for an empty dataset.
    pub fn window(&self) -> Option<ViewportWindow> {
        window_bounds(&self.scroll, self.dataset.row_count())
    }

    /// Materialize the rows inside the current window.
    ///
    /// Rows outside the window are represented only by the reserved extent
    /// of [`Self::total_content_height`]; they are never instantiated.
    pub fn rows_to_render(&self) -> Vec<RenderRow<'_>> {
        let Some(window) = self.window() else {
            return Vec::new();
        };

        self.dataset.rows[window.start_index..=window.end_index]
            .iter()
            .enumerate()
            .map(|(offset, row)| {
                let index = window.start_index + offset;
                RenderRow {
                    index,
                    stripe: RowStripe::of(index),
                    row,
                }
            })
            .collect()
    }

    /// Total scrollable extent in pixels.
    pub fn total_content_height(&self) -> f32 {
        ScrollState::content_height(self.dataset.row_count())
    }

    /// Scrollbar thumb position and size as fractions of the track.
    pub fn scrollbar(&self) -> (f32, f32) {
        let rows = self.dataset.row_count();
        (
            self.scroll.scrollbar_position(rows),
            self.scroll.scrollbar_thumb_size(rows),
        )
    }

    /// Position summary for a host footer, e.g. "Rows 1-50 of 1.2K".
    pub fn status_line(&self) -> String {
        match self.window() {
            Some(window) => {
                format_position(window.start_index, window.end_index + 1, self.dataset.row_count())
            }
            None => format_row_count(0),
        }
    }
}

/// Format row count for display (e.g., "1.2M rows")
pub fn format_row_count(count: usize) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M rows", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K rows", count as f64 / 1_000.0)
    } else {
        format!("{} rows", count)
    }
}

/// Format current position for display (e.g., "Rows 1-50 of 1.2K")
pub fn format_position(start: usize, end: usize, total: usize) -> String {
    let display_start = start + 1; // 1-indexed for users
    let display_end = end.min(total);

    if total >= 1_000_000 {
        format!(
            "Rows {}-{} of {:.1}M",
            display_start,
            display_end,
            total as f64 / 1_000_000.0
        )
    } else if total >= 1_000 {
        format!(
            "Rows {}-{} of {:.1}K",
            display_start,
            display_end,
            total as f64 / 1_000.0
        )
    } else {
        format!("Rows {}-{} of {}", display_start, display_end, total)
    }
}
