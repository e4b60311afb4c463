//! Grid sizing configuration.

/// Bounds used to pick grid dimensions for a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub min_rows: i32,
    pub max_rows: i32,
    pub min_cols: i32,
    pub max_cols: i32,
    /// Side length of one rendered cell, in pixels.
    pub cell_px: i32,
    /// Vertical space taken by surrounding chrome.
    pub reserved_height_px: i32,
    /// Horizontal space taken by surrounding chrome.
    pub reserved_width_px: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_rows: 8,
            max_rows: 15,
            min_cols: 12,
            max_cols: 20,
            cell_px: 45,
            reserved_height_px: 200,
            reserved_width_px: 100,
        }
    }
}

impl GridConfig {
    /// Grid dimensions `(rows, cols)` that fit a `width_px × height_px`
    /// viewport. The upper bound is applied first, so the lower bound wins
    /// on tiny viewports.
    pub fn dims_for_viewport(&self, width_px: i32, height_px: i32) -> (i32, i32) {
        let cell = self.cell_px.max(1);
        let rows = (height_px - self.reserved_height_px).div_euclid(cell);
        let cols = (width_px - self.reserved_width_px).div_euclid(cell);
        (
            rows.min(self.max_rows).max(self.min_rows),
            cols.min(self.max_cols).max(self.min_cols),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_viewport_hits_upper_bound() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.dims_for_viewport(3840, 2160), (15, 20));
    }

    #[test]
    fn small_viewport_hits_lower_bound() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.dims_for_viewport(320, 240), (8, 12));
        assert_eq!(cfg.dims_for_viewport(0, 0), (8, 12));
    }

    #[test]
    fn mid_viewport_divides_by_cell_size() {
        let cfg = GridConfig::default();
        // (650 - 200) / 45 = 10, (820 - 100) / 45 = 16
        assert_eq!(cfg.dims_for_viewport(820, 650), (10, 16));
    }
}
