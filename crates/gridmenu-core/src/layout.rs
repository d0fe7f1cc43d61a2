//! Grid geometry selected at startup.
//!
//! All pixel math for tiles, the highlight box and the large-art preview is
//! derived from one [`GridLayout`], so any grid shape can be instantiated at
//! runtime (and in tests) without rebuilding.

use crate::anim::Vec2;

/// Upper bound on `rows * columns`; sizes the per-frame tile buffer.
pub const MAX_VISIBLE_TILES: usize = 16;

/// Horizontal squeeze applied when rendering on a 4:3 surface.
pub const X_SCALE_4_3: f32 = 1.0;
/// Horizontal squeeze applied when a 16:9 layout is shown on a 4:3 surface.
pub const X_SCALE_16_9: f32 = 0.749_414_5;

/// Axis-aligned rectangle in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x / 2.0,
            self.origin.y + self.size.y / 2.0,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub screen_width: u16,
    pub screen_height: u16,
    pub x_scale: f32,
    pub tile_area_width: u16,
    pub tile_area_height: u16,
    pub columns: u8,
    pub rows: u8,
    pub horizontal_spacing: u16,
    pub vertical_spacing: u16,
    pub highlight_overhang: u16,
    /// Vertical anchor of the selected title line.
    pub title_baseline: u16,
    /// Horizontal margin kept free on both sides of the title line.
    pub title_margin: u16,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl GridLayout {
    /// 640x480, 3x3 tiles.
    pub const fn standard() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            x_scale: X_SCALE_4_3,
            tile_area_width: 440,
            tile_area_height: 380,
            columns: 3,
            rows: 3,
            horizontal_spacing: 40,
            vertical_spacing: 10,
            highlight_overhang: 4,
            title_baseline: 434,
            title_margin: 10,
        }
    }

    /// 854x480 squeezed onto a 4:3 surface, 4 columns by 3 rows.
    pub const fn widescreen() -> Self {
        Self {
            screen_width: 854,
            x_scale: X_SCALE_16_9,
            tile_area_width: 600,
            columns: 4,
            ..Self::standard()
        }
    }

    pub const fn with_grid(mut self, columns: u8, rows: u8) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    pub const fn with_tile_area(mut self, width: u16, height: u16) -> Self {
        self.tile_area_width = width;
        self.tile_area_height = height;
        self
    }

    pub const fn with_x_scale(mut self, x_scale: f32) -> Self {
        self.x_scale = x_scale;
        self
    }

    /// Clamp the grid shape to at least one cell and at most
    /// [`MAX_VISIBLE_TILES`] cells.
    pub fn sanitized(mut self) -> Self {
        let max = MAX_VISIBLE_TILES as u8;
        self.columns = self.columns.clamp(1, max);
        self.rows = self.rows.clamp(1, max / self.columns);
        if !(self.x_scale.is_finite() && self.x_scale > 0.0) {
            self.x_scale = X_SCALE_4_3;
        }
        self
    }

    pub const fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    fn gutter_side(&self) -> f32 {
        f32::from(self.screen_width.saturating_sub(self.tile_area_width) / 2)
    }

    fn gutter_top(&self) -> f32 {
        f32::from(self.screen_height.saturating_sub(self.tile_area_height) / 2)
    }

    /// Unscaled tile width in layout pixels.
    pub fn tile_width(&self) -> f32 {
        let columns = u16::from(self.columns.max(1));
        let spacing = (columns - 1).saturating_mul(self.horizontal_spacing);
        f32::from(self.tile_area_width.saturating_sub(spacing) / columns)
    }

    pub fn tile_height(&self) -> f32 {
        let rows = u16::from(self.rows.max(1));
        let spacing = (rows - 1).saturating_mul(self.vertical_spacing);
        f32::from(self.tile_area_height.saturating_sub(spacing) / rows)
    }

    pub fn tile_rect(&self, row: usize, column: usize) -> Rect {
        let x = self.gutter_side()
            + (f32::from(self.horizontal_spacing) + self.tile_width()) * column as f32;
        let y = self.gutter_top()
            + (f32::from(self.vertical_spacing) + self.tile_height()) * row as f32;

        Rect::new(
            Vec2::new(x * self.x_scale, y),
            Vec2::new(self.tile_width() * self.x_scale, self.tile_height()),
        )
    }

    /// Resting top-left corner of the highlight box around a cell.
    pub fn highlight_origin(&self, row: usize, column: usize) -> Vec2 {
        let tile = self.tile_rect(row, column);
        let overhang = f32::from(self.highlight_overhang);
        Vec2::new(
            tile.origin.x - overhang * self.x_scale,
            tile.origin.y - overhang,
        )
    }

    pub fn highlight_size(&self) -> Vec2 {
        let overhang = f32::from(self.highlight_overhang) * 2.0;
        Vec2::new(
            (self.tile_width() + overhang) * self.x_scale,
            self.tile_height() + overhang,
        )
    }

    /// Preview size while it still covers a single tile. Cover art is square.
    pub fn preview_start_size(&self) -> Vec2 {
        Vec2::new(self.tile_width() * self.x_scale, self.tile_width())
    }

    /// Center of the whole tile area, where the enlarged preview ends up.
    pub fn preview_end_center(&self) -> Vec2 {
        Vec2::new(
            (self.gutter_side() + f32::from(self.tile_area_width) / 2.0) * self.x_scale,
            self.gutter_top() + f32::from(self.tile_area_height) / 2.0,
        )
    }

    pub fn preview_end_size(&self) -> Vec2 {
        let overhang = f32::from(self.highlight_overhang) * 2.0;
        Vec2::new(
            (f32::from(self.tile_area_width) + overhang) * self.x_scale,
            f32::from(self.tile_area_height) + overhang,
        )
    }

    pub fn title_center_x(&self) -> f32 {
        f32::from(self.screen_width / 2) * self.x_scale
    }

    pub fn title_max_width(&self) -> f32 {
        f32::from(
            self.screen_width
                .saturating_sub(self.title_margin.saturating_mul(2)),
        ) * self.x_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tiles_are_120_square() {
        let layout = GridLayout::standard();
        assert_eq!(layout.tile_width(), 120.0);
        assert_eq!(layout.tile_height(), 120.0);

        let tile = layout.tile_rect(1, 2);
        assert_eq!(tile.origin, Vec2::new(100.0 + 160.0 * 2.0, 50.0 + 130.0));
        assert_eq!(tile.size, Vec2::new(120.0, 120.0));
    }

    #[test]
    fn highlight_wraps_tile_with_overhang() {
        let layout = GridLayout::standard();
        assert_eq!(layout.highlight_origin(0, 0), Vec2::new(96.0, 46.0));
        assert_eq!(layout.highlight_size(), Vec2::new(128.0, 128.0));
    }

    #[test]
    fn preview_ends_on_middle_cell_center() {
        let layout = GridLayout::standard();
        assert_eq!(layout.preview_end_center(), layout.tile_rect(1, 1).center());
        assert_eq!(layout.preview_end_size(), Vec2::new(448.0, 388.0));
    }

    #[test]
    fn widescreen_has_four_columns() {
        let layout = GridLayout::widescreen();
        assert_eq!(layout.columns, 4);
        assert_eq!(layout.rows, 3);
        assert_eq!(layout.tile_width(), 120.0);
        assert_eq!(layout.cell_count(), 12);
    }

    #[test]
    fn sanitize_clamps_grid_shape() {
        let layout = GridLayout::standard().with_grid(0, 0).sanitized();
        assert_eq!((layout.columns, layout.rows), (1, 1));

        let layout = GridLayout::standard().with_grid(8, 8).sanitized();
        assert_eq!((layout.columns, layout.rows), (8, 2));
        assert!(layout.cell_count() <= MAX_VISIBLE_TILES);

        let layout = GridLayout::standard().with_x_scale(f32::NAN).sanitized();
        assert_eq!(layout.x_scale, X_SCALE_4_3);
    }
}
