//! Color palette for the TUI

use ratatui::style::Color;

/// Border chrome around panes.
pub const BORDER: Color = Color::Rgb(100, 110, 130);

/// Primary body text.
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);

/// Secondary text (descriptions, hints).
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);

/// Lowest-emphasis text (key legends).
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

/// Warning accent, used for the failed-load note.
pub const ACCENT_WARNING: Color = Color::Rgb(200, 160, 80);
