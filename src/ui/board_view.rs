//! Board rendering for the Gess GUI

use crate::{Board, Game, Pos, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 24.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked intersection, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        game: &Game,
        selected: Option<Pos>,
        last_move: Option<(Pos, Pos)>,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_border_zone(&painter);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);

        if let Some(center) = selected {
            painter.rect_filled(self.footprint_rect(center), CornerRadius::same(3), selection_fill());
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));
        if !game.state().is_over() {
            if let Some(center) = hovered.filter(|p| p.is_interior() && Some(*p) != selected) {
                painter.rect_filled(self.footprint_rect(center), CornerRadius::same(3), hover_fill());
            }
        }

        self.draw_stones(&painter, game.board());
        self.draw_rings(&painter, game);

        if let Some((_, to)) = last_move {
            let center = self.board_to_screen(to);
            painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Shade the outer ring of intersections where stones are removed
    fn draw_border_zone(&self, painter: &Painter) {
        let half = self.cell_size * 0.5;
        let first = self.board_to_screen(Pos::new(BOARD_SIZE as u8 - 1, 0));
        let last = self.board_to_screen(Pos::new(0, BOARD_SIZE as u8 - 1));
        let outer = Rect::from_min_max(first, last).expand(half);
        let inner = outer.shrink(self.cell_size);
        painter.rect_filled(outer, CornerRadius::same(2), BORDER_ZONE);
        painter.rect_filled(inner, CornerRadius::ZERO, BOARD_BG);
    }

    /// Draw the 20x20 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw file letters (A-T) and ranks (1-20, rank 1 at the bottom)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);

        for col in 0..BOARD_SIZE as u8 {
            let x = self.board_to_screen(Pos::new(0, col)).x;
            let letter = (b'A' + col) as char;
            for y in [self.board_rect.min.y + 10.0, self.board_rect.max.y - 10.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
            }
        }

        for row in 0..BOARD_SIZE as u8 {
            let y = self.board_to_screen(Pos::new(row, 0)).y;
            let rank = format!("{}", row + 1);
            for x in [self.board_rect.min.x + 12.0, self.board_rect.max.x - 12.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, &rank, font.clone(), GRID_LINE);
            }
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for stone in [Stone::Black, Stone::White] {
            for pos in board.positions(stone) {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(1.5, 1.5);

        match stone {
            Stone::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    /// Mark every ring center
    fn draw_rings(&self, painter: &Painter, game: &Game) {
        let stroke = Stroke::new(2.0, RING_MARKER);
        let rings = game.rings();
        for center in rings.black.iter().chain(rings.white.iter()) {
            painter.circle_stroke(self.board_to_screen(*center), self.cell_size * 0.3, stroke);
        }
    }

    /// Screen rectangle covering the 3x3 footprint around `center`
    fn footprint_rect(&self, center: Pos) -> Rect {
        Rect::from_center_size(self.board_to_screen(center), Vec2::splat(self.cell_size * 3.0))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i32;
        let line = y.floor() as i32;
        let size = BOARD_SIZE as i32;

        if (0..size).contains(&col) && (0..size).contains(&line) {
            Some(Pos::new((size - 1 - line) as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let line = (BOARD_SIZE - 1) as f32 - pos.row as f32;
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + line * self.cell_size;
        Pos2::new(x, y)
    }
}
