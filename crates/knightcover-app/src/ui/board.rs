use std::sync::Arc;

use eframe::egui::{Align2, Color32, FontId, Painter, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use knightcover_core::{BoardSize, Grid, Position};

use crate::ui::{
    board_theme::{BoardPalette, BoardTheme},
    icon,
    layout::{ComponentUnits, LayoutScale},
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct CellVisualState: u8 {
        const PLACED = 0b0000_0001;
        const VACATED = 0b0000_0010;
        const RESTORED = 0b0000_0100;
        const REMOVED = 0b0000_1000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BoardCell {
    pub(crate) occupied: bool,
    pub(crate) visual_state: CellVisualState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BoardViewModel {
    size: BoardSize,
    cells: Vec<BoardCell>,
}

impl BoardViewModel {
    #[must_use]
    pub(crate) fn from_grid(grid: &Grid) -> Self {
        let size = grid.size();
        let cells = size
            .positions()
            .map(|pos| BoardCell {
                occupied: grid.is_occupied(pos),
                visual_state: CellVisualState::empty(),
            })
            .collect();
        Self { size, cells }
    }

    #[must_use]
    pub(crate) fn size(&self) -> BoardSize {
        self.size
    }

    #[must_use]
    pub(crate) fn cell(&self, pos: Position) -> &BoardCell {
        &self.cells[self.size.index_of(pos)]
    }

    pub(crate) fn highlight(&mut self, pos: Position, state: CellVisualState) {
        let index = self.size.index_of(pos);
        self.cells[index].visual_state.insert(state);
    }
}

/// Width of the row and column label gutters, in cells.
const LABEL_UNITS: f32 = 1.0;
const BORDER_WIDTH_RATIO: f32 = 0.04;
const HIGHLIGHT_WIDTH_RATIO: f32 = 0.10;
const HIGHLIGHT_FILL_ALPHA: f32 = 0.45;
const KNIGHT_FONT_RATIO: f32 = 0.75;
const LABEL_FONT_RATIO: f32 = 0.35;

#[must_use]
#[expect(clippy::cast_precision_loss)]
pub(crate) fn required_units(size: BoardSize) -> ComponentUnits {
    ComponentUnits::new(
        size.cols() as f32 + LABEL_UNITS,
        size.rows() as f32 + LABEL_UNITS,
    )
}

pub(crate) fn show(ui: &mut Ui, vm: &BoardViewModel, scale: &LayoutScale) {
    let cell_size = scale.cell_size;
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let theme = BoardTheme::from_visuals(visuals);
    let palette = theme.palette_for(visuals);

    let units = required_units(vm.size());
    let (rect, _response) = ui.allocate_exact_size(
        Vec2::new(units.width, units.height) * cell_size,
        Sense::hover(),
    );
    let gutter = LABEL_UNITS * cell_size;
    let board_rect = Rect::from_min_max(rect.min + Vec2::splat(gutter), rect.max);

    let painter = ui.painter();
    let label_font = FontId::proportional(cell_size * LABEL_FONT_RATIO);
    for col in 0..vm.size().cols() {
        let center =
            board_rect.min + Vec2::new(offset(col, cell_size) + cell_size * 0.5, -gutter * 0.5);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            format!("c{}", col + 1),
            label_font.clone(),
            palette.label_text,
        );
    }
    for row in 0..vm.size().rows() {
        let center =
            board_rect.min + Vec2::new(-gutter * 0.5, offset(row, cell_size) + cell_size * 0.5);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            format!("r{}", row + 1),
            label_font.clone(),
            palette.label_text,
        );
    }

    for pos in vm.size().positions() {
        let cell_min = board_rect.min
            + Vec2::new(offset(pos.col(), cell_size), offset(pos.row(), cell_size));
        let cell_rect = Rect::from_min_size(cell_min, Vec2::splat(cell_size));
        draw_cell(painter, cell_rect, pos, vm.cell(pos), palette);
    }

    let border_width = f32::max(cell_size * BORDER_WIDTH_RATIO, 1.0);
    painter.rect_stroke(
        board_rect,
        0.0,
        Stroke::new(border_width, palette.border),
        StrokeKind::Outside,
    );
}

#[expect(clippy::cast_precision_loss)]
fn offset(index: usize, cell_size: f32) -> f32 {
    index as f32 * cell_size
}

fn draw_cell(
    painter: &Painter,
    rect: Rect,
    pos: Position,
    cell: &BoardCell,
    palette: &BoardPalette,
) {
    let cell_size = rect.width();
    painter.rect_filled(rect, 0.0, palette.square(pos.row(), pos.col()));

    let highlight = highlight_color(cell.visual_state, palette);
    if let Some(color) = highlight
        && cell
            .visual_state
            .intersects(CellVisualState::VACATED | CellVisualState::RESTORED)
    {
        painter.rect_filled(rect, 0.0, color.gamma_multiply(HIGHLIGHT_FILL_ALPHA));
    }

    let knight_font = FontId::proportional(cell_size * KNIGHT_FONT_RATIO);
    if cell.occupied {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            icon::KNIGHT,
            knight_font,
            palette.knight,
        );
    } else if cell.visual_state.contains(CellVisualState::REMOVED) {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            icon::KNIGHT,
            knight_font,
            palette.highlight_removed.gamma_multiply(HIGHLIGHT_FILL_ALPHA),
        );
    }

    if let Some(color) = highlight {
        let width = f32::max(cell_size * HIGHLIGHT_WIDTH_RATIO, 1.0);
        painter.rect_stroke(rect, 0.0, Stroke::new(width, color), StrokeKind::Inside);
    }
}

fn highlight_color(state: CellVisualState, palette: &BoardPalette) -> Option<Color32> {
    if state.contains(CellVisualState::RESTORED) {
        return Some(palette.highlight_restored);
    }
    if state.contains(CellVisualState::VACATED) {
        return Some(palette.highlight_vacated);
    }
    if state.contains(CellVisualState::REMOVED) {
        return Some(palette.highlight_removed);
    }
    if state.contains(CellVisualState::PLACED) {
        return Some(palette.highlight_placed);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_model_mirrors_grid_and_collects_highlights() {
        let grid: Grid = "N.\n.N".parse().unwrap();
        let mut vm = BoardViewModel::from_grid(&grid);
        assert!(vm.cell(Position::new(0, 0)).occupied);
        assert!(!vm.cell(Position::new(0, 1)).occupied);

        vm.highlight(Position::new(1, 1), CellVisualState::VACATED);
        vm.highlight(Position::new(1, 1), CellVisualState::RESTORED);
        let state = vm.cell(Position::new(1, 1)).visual_state;
        assert_eq!(state, CellVisualState::VACATED | CellVisualState::RESTORED);
    }

    #[test]
    fn restored_wins_over_vacated() {
        let palette = BoardTheme::from_visuals(&eframe::egui::Visuals::light()).light;
        assert_eq!(
            highlight_color(
                CellVisualState::VACATED | CellVisualState::RESTORED,
                &palette
            ),
            Some(palette.highlight_restored)
        );
        assert_eq!(highlight_color(CellVisualState::empty(), &palette), None);
    }

    #[test]
    fn labels_take_one_extra_unit() {
        let units = required_units(BoardSize::new(3, 5).unwrap());
        assert_eq!(units, ComponentUnits::new(6.0, 4.0));
    }
}
