use eframe::egui::{Color32, Visuals};

/// Colours used to paint the board.
///
/// Square colours are fixed per theme; highlight colours follow the active
/// visuals so probes match the rest of the UI.
#[derive(Debug, Clone)]
pub(crate) struct BoardPalette {
    pub(crate) square_light: Color32,
    pub(crate) square_dark: Color32,

    pub(crate) border: Color32,
    pub(crate) label_text: Color32,
    pub(crate) knight: Color32,

    pub(crate) highlight_placed: Color32,
    pub(crate) highlight_vacated: Color32,
    pub(crate) highlight_restored: Color32,
    pub(crate) highlight_removed: Color32,
}

impl BoardPalette {
    fn light(visuals: &Visuals) -> Self {
        Self {
            square_light: Color32::from_rgb(0xF0, 0xD9, 0xB5),
            square_dark: Color32::from_rgb(0xB5, 0x88, 0x63),
            knight: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            ..Self::from_visuals(visuals)
        }
    }

    fn dark(visuals: &Visuals) -> Self {
        Self {
            square_light: Color32::from_rgb(0x7A, 0x7F, 0x8C),
            square_dark: Color32::from_rgb(0x4A, 0x4E, 0x59),
            knight: Color32::from_rgb(0xF5, 0xF5, 0xF5),
            ..Self::from_visuals(visuals)
        }
    }

    fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            square_light: visuals.extreme_bg_color,
            square_dark: visuals.faint_bg_color,
            border: visuals.widgets.inactive.fg_stroke.color,
            label_text: visuals.weak_text_color(),
            knight: visuals.strong_text_color(),
            highlight_placed: visuals.selection.stroke.color,
            highlight_vacated: visuals.warn_fg_color,
            highlight_restored: visuals.error_fg_color,
            highlight_removed: visuals.weak_text_color(),
        }
    }

    /// Fill colour of the square at (`row`, `col`).
    #[must_use]
    pub(crate) fn square(&self, row: usize, col: usize) -> Color32 {
        if (row + col) % 2 == 0 {
            self.square_light
        } else {
            self.square_dark
        }
    }
}

/// Holds light/dark palettes and selects one based on current visuals.
#[derive(Debug, Clone)]
pub(crate) struct BoardTheme {
    pub(crate) light: BoardPalette,
    pub(crate) dark: BoardPalette,
}

impl BoardTheme {
    #[must_use]
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            light: BoardPalette::light(visuals),
            dark: BoardPalette::dark(visuals),
        }
    }

    #[must_use]
    pub(crate) fn palette_for(&self, visuals: &Visuals) -> &BoardPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}
