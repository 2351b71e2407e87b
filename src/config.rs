use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Desk-grid layout and camera start distance. Defaults reproduce the
/// original room: three rows of three desks facing the front wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub desk_rows: usize,
    pub desk_cols: usize,
    /// Center-to-center spacing between desks in a row.
    pub desk_spacing: f32,
    /// Spacing between rows, going toward the back of the room.
    pub row_spacing: f32,
    /// Z of the row closest to the presentation wall.
    pub first_row_z: f32,
    pub initial_distance: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            desk_rows: 3,
            desk_cols: 3,
            desk_spacing: 2.5,
            row_spacing: 3.0,
            first_row_z: -2.0,
            initial_distance: 12.0,
        }
    }
}

impl LayoutConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read layout file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse layout file {}", path.display()))
    }

    /// X coordinate of a desk column, centered on the room axis.
    pub fn column_x(&self, col: usize) -> f32 {
        let center = (self.desk_cols as f32 - 1.0) * 0.5;
        (col as f32 - center) * self.desk_spacing
    }

    /// Z coordinate of a desk row.
    pub fn row_z(&self, row: usize) -> f32 {
        self.first_row_z + row as f32 * self.row_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_room() {
        let config = LayoutConfig::default();
        assert_eq!(config.desk_rows, 3);
        assert_eq!(config.desk_cols, 3);
        assert_eq!(config.desk_spacing, 2.5);
        assert_eq!(config.initial_distance, 12.0);
    }

    #[test]
    fn three_columns_are_centered() {
        let config = LayoutConfig::default();
        assert_eq!(config.column_x(0), -2.5);
        assert_eq!(config.column_x(1), 0.0);
        assert_eq!(config.column_x(2), 2.5);
    }

    #[test]
    fn rows_step_toward_the_back() {
        let config = LayoutConfig::default();
        assert_eq!(config.row_z(0), -2.0);
        assert_eq!(config.row_z(2), 4.0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{"desk_rows": 2}"#).unwrap();
        assert_eq!(config.desk_rows, 2);
        assert_eq!(config.desk_cols, 3);
    }
}
