use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Width of the reference screen the default board is derived from.
pub const REFERENCE_SCREEN_WIDTH_PX: u16 = 640;

/// Height of the reference screen the default board is derived from.
pub const REFERENCE_SCREEN_HEIGHT_PX: u16 = 480;

/// Edge length of one cell on the reference screen.
pub const CELL_SIZE_PX: u16 = 20;

/// Default board width in cells (32).
pub const DEFAULT_GRID_WIDTH: u16 = REFERENCE_SCREEN_WIDTH_PX / CELL_SIZE_PX;

/// Default board height in cells (24).
pub const DEFAULT_GRID_HEIGHT: u16 = REFERENCE_SCREEN_HEIGHT_PX / CELL_SIZE_PX;

/// Default simulation rate in ticks per second.
pub const DEFAULT_TICK_RATE_HZ: u32 = 20;

/// Highest accepted simulation rate.
pub const MAX_TICK_RATE_HZ: u32 = 120;

/// Smallest accepted board edge, in cells.
///
/// On narrower boards the head can wrap onto body segments 1..=3, which the
/// self-collision check skips, leaving duplicate cells in the body.
pub const MIN_GRID_EDGE: u16 = 4;

/// Terminal columns used to draw one cell, so cells look roughly square.
pub const CELL_COLUMNS: u16 = 2;

/// Glyph drawn for every occupied cell.
pub const GLYPH_CELL: &str = "██";

/// Glyph drawn for the food cell.
pub const GLYPH_FOOD: &str = "◖◗";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
}

/// Green snake and red apple on black with a cyan border.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::Rgb(93, 216, 228),
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    hud_score: Color::Cyan,
    hud_muted: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    hud_score: Color::Magenta,
    hud_muted: Color::DarkGray,
};

/// All available themes in lookup order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks up a bundled theme by case-insensitive name.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Thin rounded border around the play area.
pub const BORDER_PLAY_AREA: border::Set = border::ROUNDED;

#[cfg(test)]
mod tests {
    use super::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, GridSize, theme_by_name};

    #[test]
    fn default_board_matches_reference_screen() {
        assert_eq!(DEFAULT_GRID_WIDTH, 32);
        assert_eq!(DEFAULT_GRID_HEIGHT, 24);
        assert_eq!(
            GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            }
            .total_cells(),
            768
        );
    }

    #[test]
    fn themes_resolve_case_insensitively() {
        assert_eq!(theme_by_name("Ocean").map(|t| t.name), Some("ocean"));
        assert!(theme_by_name("missing").is_none());
    }
}
