//! Engine configuration types.
//!
//! Games configure their engines at construction:
//! - `LineGameConfig`: board size, win length and placement rule for the
//!   k-in-a-row games (Connect Four, Gomoku)
//! - `DotsAndBoxesConfig`: boxes per side
//!
//! Both carry the display names of the two seats. Configurations are
//! validated once at construction and never change afterwards.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::PlayerMap;
use super::position::Axis;

/// How a move chooses its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Moves name a column; the piece falls to the lowest empty row.
    Gravity,
    /// Moves name any empty cell directly.
    Direct,
}

/// Configuration for a k-in-a-row game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineGameConfig {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Contiguous cells needed to win.
    pub win_length: usize,

    /// Gravity drop or direct placement.
    pub placement: Placement,

    /// Order in which axes are checked for a win. When one move completes
    /// lines on two axes, the first in this order is recorded.
    pub scan_order: [Axis; 4],

    /// Display names, first player first.
    pub player_names: PlayerMap<String>,
}

impl LineGameConfig {
    /// Standard Connect Four: 6 rows, 7 columns, four in a row, Red first.
    #[must_use]
    pub fn connect_four() -> Self {
        Self {
            rows: 6,
            cols: 7,
            win_length: 4,
            placement: Placement::Gravity,
            scan_order: Axis::ALL,
            player_names: PlayerMap::pair("Red".to_string(), "Yellow".to_string()),
        }
    }

    /// Gomoku on a `size × size` board, five in a row, X first.
    #[must_use]
    pub fn gomoku(size: usize) -> Self {
        Self {
            rows: size,
            cols: size,
            win_length: 5,
            placement: Placement::Direct,
            scan_order: Axis::VERTICAL_FIRST,
            player_names: PlayerMap::pair("X".to_string(), "O".to_string()),
        }
    }

    /// Set the win length.
    #[must_use]
    pub fn with_win_length(mut self, win_length: usize) -> Self {
        self.win_length = win_length;
        self
    }

    /// Set the win-scan axis order.
    #[must_use]
    pub fn with_scan_order(mut self, scan_order: [Axis; 4]) -> Self {
        self.scan_order = scan_order;
        self
    }

    /// Set the display names.
    #[must_use]
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = PlayerMap::pair(first.into(), second.into());
        self
    }

    /// Total number of cells; a full board is a draw.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.win_length == 0 {
            return Err(ConfigError::ZeroWinLength);
        }
        if self.win_length > self.rows.max(self.cols) {
            return Err(ConfigError::WinLengthTooLong {
                win_length: self.win_length,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl Default for LineGameConfig {
    fn default() -> Self {
        Self::connect_four()
    }
}

/// Configuration for Dots-and-Boxes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotsAndBoxesConfig {
    /// Boxes per side; the board has `grid_size + 1` dots per side.
    pub grid_size: usize,

    /// Display names, first player first.
    pub player_names: PlayerMap<String>,
}

impl Default for DotsAndBoxesConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            player_names: PlayerMap::pair("Player 1".to_string(), "Player 2".to_string()),
        }
    }
}

impl DotsAndBoxesConfig {
    /// Set the number of boxes per side.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the display names.
    #[must_use]
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = PlayerMap::pair(first.into(), second.into());
        self
    }

    /// Number of lines on each axis of the logical edge grid.
    #[must_use]
    pub fn line_count(&self) -> usize {
        2 * self.grid_size + 1
    }

    /// Check the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyBoxGrid);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_connect_four_defaults() {
        let config = LineGameConfig::connect_four();

        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 7);
        assert_eq!(config.win_length, 4);
        assert_eq!(config.placement, Placement::Gravity);
        assert_eq!(config.scan_order[0], Axis::Horizontal);
        assert_eq!(config.cell_count(), 42);
        assert_eq!(config.player_names[PlayerId::FIRST], "Red");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_gomoku_config() {
        let config = LineGameConfig::gomoku(15);

        assert_eq!(config.cell_count(), 225);
        assert_eq!(config.win_length, 5);
        assert_eq!(config.placement, Placement::Direct);
        assert_eq!(config.scan_order, Axis::VERTICAL_FIRST);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_line_config_validation() {
        assert_eq!(
            LineGameConfig::gomoku(0).validate(),
            Err(ConfigError::EmptyBoard { rows: 0, cols: 0 })
        );
        assert_eq!(
            LineGameConfig::gomoku(4).validate(),
            Err(ConfigError::WinLengthTooLong { win_length: 5, rows: 4, cols: 4 })
        );
        assert_eq!(
            LineGameConfig::connect_four().with_win_length(0).validate(),
            Err(ConfigError::ZeroWinLength)
        );
    }

    #[test]
    fn test_dots_config() {
        let config = DotsAndBoxesConfig::default();
        assert_eq!(config.grid_size, 4);
        assert_eq!(config.line_count(), 9);
        assert!(config.validate().is_ok());

        let empty = DotsAndBoxesConfig::default().with_grid_size(0);
        assert_eq!(empty.validate(), Err(ConfigError::EmptyBoxGrid));
    }

    #[test]
    fn test_config_serialization() {
        let config = LineGameConfig::gomoku(9).with_player_names("Black", "White");
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: LineGameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
