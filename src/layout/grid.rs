//! Two-column gallery geometry and the virtualized render window

use super::scale::Viewport;

/// Cards per gallery row
pub const COLUMNS: usize = 2;

/// Image block height as a fraction of card width
pub const IMAGE_ASPECT: f32 = 0.85;

/// Horizontal space not taken by cards: two outer paddings plus one column gap
pub const GUTTER: f32 = 48.0;

/// Left and right list padding (design units)
pub const OUTER_PADDING: f32 = 14.0;

/// Space between the two columns (design units)
pub const COLUMN_GAP: f32 = GUTTER - 2.0 * OUTER_PADDING;

/// Fixed height of the text block under each card image (design units)
pub const CARD_CONTENT_HEIGHT: f32 = 74.0;

/// Vertical space after each row (design units)
pub const ROW_SPACING: f32 = 14.0;

/// Space between the top of the scrollable content and the first row (design units)
pub const TOP_PADDING: f32 = 18.0;

/// Resolved card sizes for one viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    pub card_width: f32,
    pub image_height: f32,
    pub content_height: f32,
    pub outer_padding: f32,
    pub column_gap: f32,
    pub row_spacing: f32,
    pub top_padding: f32,
}

impl CardGeometry {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let mut geometry = Self {
            card_width: 0.0,
            image_height: 0.0,
            content_height: viewport.moderate_scale(CARD_CONTENT_HEIGHT),
            outer_padding: viewport.moderate_scale(OUTER_PADDING),
            column_gap: viewport.moderate_scale(COLUMN_GAP),
            row_spacing: viewport.moderate_scale(ROW_SPACING),
            top_padding: viewport.moderate_scale(TOP_PADDING),
        };

        geometry.card_width = ((viewport.width - geometry.gutter()) / COLUMNS as f32).max(0.0);
        geometry.image_height = geometry.card_width * IMAGE_ASPECT;
        geometry
    }

    /// Total horizontal gutter (paddings plus gap)
    pub fn gutter(&self) -> f32 {
        2.0 * self.outer_padding + self.column_gap
    }

    /// Height of a single card
    pub fn card_height(&self) -> f32 {
        self.image_height + self.content_height
    }

    /// Distance from the top of one row to the top of the next
    pub fn row_pitch(&self) -> f32 {
        self.card_height() + self.row_spacing
    }
}

/// Number of grid rows needed for `cards` items
pub fn row_count(cards: usize) -> usize {
    cards.div_ceil(COLUMNS)
}

/// Virtualization tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowTuning {
    /// Cards materialized before the first scroll report
    pub initial_num_to_render: usize,
    /// Maximum cards added beyond the previous window per update
    pub max_to_render_per_batch: usize,
    /// Materialized height, in viewport heights, centered on the visible area
    pub window_size: usize,
}

impl Default for WindowTuning {
    fn default() -> Self {
        Self {
            initial_num_to_render: 6,
            max_to_render_per_batch: 6,
            window_size: 5,
        }
    }
}

impl WindowTuning {
    fn batch_rows(&self) -> usize {
        row_count(self.max_to_render_per_batch).max(1)
    }
}

/// Scroll state of the gallery, measured from the top of the first row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    /// Distance from the first row's top edge to the top of the visible region
    pub offset: f32,
    /// Height of the visible region
    pub viewport_height: f32,
}

impl ScrollPosition {
    /// Convert a raw scrollable offset, which includes the content's top padding
    pub fn from_scrollable(offset: f32, viewport_height: f32, top_padding: f32) -> Self {
        Self {
            offset: offset - top_padding,
            viewport_height,
        }
    }
}

/// Half-open range of grid rows that are materialized as widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderWindow {
    pub first_row: usize,
    pub end_row: usize,
}

impl RenderWindow {
    /// Window used before any scroll position is known
    pub fn initial(total_rows: usize, tuning: &WindowTuning) -> Self {
        Self {
            first_row: 0,
            end_row: row_count(tuning.initial_num_to_render.max(1)).min(total_rows),
        }
    }

    /// Recompute the window for a new scroll position
    ///
    /// Rows under the visible region are always included. Look-ahead rows
    /// beyond the previous window grow by at most one batch per call.
    pub fn advance(
        &self,
        total_rows: usize,
        row_pitch: f32,
        scroll: ScrollPosition,
        tuning: &WindowTuning,
    ) -> Self {
        if total_rows == 0 {
            return Self { first_row: 0, end_row: 0 };
        }
        if row_pitch <= 0.0 || scroll.viewport_height <= 0.0 {
            return Self::initial(total_rows, tuning);
        }

        let offset = scroll.offset.max(0.0);
        let visible_first = ((offset / row_pitch).floor() as usize).min(total_rows - 1);
        let visible_end = (((offset + scroll.viewport_height) / row_pitch).ceil() as usize)
            .clamp(visible_first + 1, total_rows);

        let lookahead_px =
            tuning.window_size.saturating_sub(1) as f32 / 2.0 * scroll.viewport_height;
        let lookahead = (lookahead_px / row_pitch).ceil() as usize;

        let target_first = visible_first.saturating_sub(lookahead);
        let target_end = (visible_end + lookahead).min(total_rows);
        let batch = tuning.batch_rows();

        let end_row = if target_end > self.end_row {
            target_end.min(visible_end.max(self.end_row + batch))
        } else {
            target_end
        };
        let first_row = if target_first < self.first_row {
            target_first.max(visible_first.min(self.first_row.saturating_sub(batch)))
        } else {
            target_first
        };

        Self { first_row, end_row }
    }

    /// Number of rows in the window
    pub fn len(&self) -> usize {
        self.end_row.saturating_sub(self.first_row)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Range of card indices covered by the window
    pub fn card_range(&self, total_cards: usize) -> std::ops::Range<usize> {
        let start = (self.first_row * COLUMNS).min(total_cards);
        let end = (self.end_row * COLUMNS).min(total_cards);
        start..end
    }

    /// Spacer heights above and below the materialized rows
    pub fn spacers(&self, total_rows: usize, row_pitch: f32) -> (f32, f32) {
        let above = self.first_row as f32 * row_pitch;
        let below = total_rows.saturating_sub(self.end_row) as f32 * row_pitch;
        (above, below)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_and_gutter_fill_width() {
        for width in (200..=1600).step_by(7).map(|w| w as f32) {
            let viewport = Viewport::new(width, 800.0);
            let geometry = CardGeometry::for_viewport(&viewport);
            let total = 2.0 * geometry.card_width + geometry.gutter();
            assert!(
                (total - width).abs() <= 1.0,
                "width {} laid out as {}",
                width,
                total
            );
        }
    }

    #[test]
    fn test_image_height_tracks_card_width() {
        let geometry = CardGeometry::for_viewport(&Viewport::new(430.0, 932.0));
        assert!((geometry.image_height - geometry.card_width * IMAGE_ASPECT).abs() < 1e-4);
    }

    #[test]
    fn test_reference_screen_geometry() {
        let geometry = CardGeometry::for_viewport(&Viewport::default());
        assert!((geometry.card_width - 172.5).abs() < 1e-4);
        assert!((geometry.outer_padding - 14.0).abs() < 1e-4);
        assert!((geometry.column_gap - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_row_count() {
        assert_eq!(row_count(0), 0);
        assert_eq!(row_count(1), 1);
        assert_eq!(row_count(2), 1);
        assert_eq!(row_count(7), 4);
    }

    #[test]
    fn test_initial_window() {
        let tuning = WindowTuning::default();
        assert_eq!(RenderWindow::initial(10, &tuning), RenderWindow { first_row: 0, end_row: 3 });
        assert_eq!(RenderWindow::initial(2, &tuning), RenderWindow { first_row: 0, end_row: 2 });
        assert!(RenderWindow::initial(0, &tuning).is_empty());
    }

    #[test]
    fn test_window_covers_visible_rows_after_jump() {
        let tuning = WindowTuning::default();
        let start = RenderWindow::initial(100, &tuning);
        let scroll = ScrollPosition { offset: 5_000.0, viewport_height: 600.0 };
        let window = start.advance(100, 200.0, scroll, &tuning);

        // visible rows are 25..28
        assert!(window.first_row <= 25);
        assert!(window.end_row >= 28);
        assert!(window.end_row <= 100);
    }

    #[test]
    fn test_lookahead_grows_by_batches() {
        let tuning = WindowTuning {
            initial_num_to_render: 2,
            max_to_render_per_batch: 2,
            window_size: 21,
        };
        let scroll = ScrollPosition { offset: 0.0, viewport_height: 400.0 };
        let mut window = RenderWindow::initial(50, &tuning);
        assert_eq!(window.end_row, 1);

        window = window.advance(50, 100.0, scroll, &tuning);
        // visible rows end at 4, one batch row beyond the previous end is 2
        assert_eq!(window.end_row, 4);

        window = window.advance(50, 100.0, scroll, &tuning);
        assert_eq!(window.end_row, 5);
    }

    #[test]
    fn test_window_stays_in_bounds() {
        let tuning = WindowTuning::default();
        let mut window = RenderWindow::initial(5, &tuning);
        for offset in [0.0, 120.0, 900.0, 10_000.0, -50.0] {
            let scroll = ScrollPosition { offset, viewport_height: 300.0 };
            window = window.advance(5, 150.0, scroll, &tuning);
            assert!(window.first_row < window.end_row);
            assert!(window.end_row <= 5);
        }
    }

    #[test]
    fn test_spacers_preserve_scroll_extent() {
        let window = RenderWindow { first_row: 3, end_row: 7 };
        let (above, below) = window.spacers(10, 50.0);
        assert_eq!(above, 150.0);
        assert_eq!(below, 150.0);
        assert_eq!(above + below + window.len() as f32 * 50.0, 500.0);
    }

    #[test]
    fn test_top_padding_is_not_counted_as_rows() {
        let tuning = WindowTuning {
            initial_num_to_render: 2,
            max_to_render_per_batch: 2,
            window_size: 1,
        };
        // Row 0 spans 18..118 in content coordinates, so its bottom is still visible
        let scroll = ScrollPosition::from_scrollable(110.0, 300.0, 18.0);
        let window = RenderWindow { first_row: 0, end_row: 4 }.advance(20, 100.0, scroll, &tuning);

        assert_eq!(window.first_row, 0);
        assert!(window.end_row >= 4);
    }

    #[test]
    fn test_scroll_inside_top_padding_starts_at_first_row() {
        let scroll = ScrollPosition::from_scrollable(5.0, 300.0, 18.0);
        let window = RenderWindow::initial(20, &WindowTuning::default()).advance(
            20,
            100.0,
            scroll,
            &WindowTuning::default(),
        );
        assert_eq!(window.first_row, 0);
    }

    #[test]
    fn test_card_range_clamps_to_catalog() {
        let window = RenderWindow { first_row: 1, end_row: 3 };
        assert_eq!(window.card_range(5), 2..5);
    }
}
