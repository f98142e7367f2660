//! TUI constants: colors, timing, and layout sizes.

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Error line color.
pub(super) const ERROR: Color = Color::Rgb(239, 83, 80);

/// Bar colors: relevance (#4CAF50), formatting (#2196F3), overall (#FFC107).
pub(super) const BAR_COLORS: [Color; 3] = [
    Color::Rgb(76, 175, 80),
    Color::Rgb(33, 150, 243),
    Color::Rgb(255, 193, 7),
];

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys.
pub(crate) const SCROLL_LINES_ARROW: usize = 1;

/// Scroll amount for the mouse wheel.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Height of the score chart block, borders included.
pub(super) const CHART_HEIGHT: u16 = 12;

/// Widest a single score bar gets.
pub(super) const MAX_BAR_WIDTH: u16 = 14;

/// Minimalist logo when idle (single character).
pub(super) const LOGO_IDLE: &str = "◆";

/// Spinner frames while a request is in flight (braille pattern, 4 frames).
pub(super) const LOGO_BUSY: &[&str] = &["⠋", "⠙", "⠹", "⠸"];
