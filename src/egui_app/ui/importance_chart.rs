//! Horizontal bar chart of the importance ranking, largest bar on top.

use super::style;
use crate::importance::ImportanceTable;
use eframe::egui::{self, Align2, CornerRadius, FontId, Rect, Sense, pos2, vec2};

const BAR_HEIGHT: f32 = 18.0;
const BAR_GAP: f32 = 4.0;
const LABEL_WIDTH: f32 = 180.0;
const VALUE_WIDTH: f32 = 72.0;

/// Fraction of the full bar length for `score`; empty when nothing is positive.
pub(super) fn bar_fraction(score: f64, max_score: f64) -> f32 {
    if max_score <= 0.0 || !score.is_finite() {
        return 0.0;
    }
    (score / max_score).clamp(0.0, 1.0) as f32
}

pub(super) fn render(ui: &mut egui::Ui, table: &ImportanceTable) {
    let palette = style::palette();
    if table.is_empty() {
        ui.label(egui::RichText::new("Tidak ada bobot variabel.").color(palette.text_muted));
        return;
    }
    let width = ui.available_width().min(720.0);
    let height = table.len() as f32 * (BAR_HEIGHT + BAR_GAP);
    let (rect, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_stroke(rect, CornerRadius::ZERO, style::section_stroke(), egui::StrokeKind::Inside);

    let bar_span = (width - LABEL_WIDTH - VALUE_WIDTH).max(0.0);
    let max_score = table.max_score();
    let font = FontId::proportional(12.0);
    for (idx, row) in table.rows().iter().enumerate() {
        let top = rect.top() + idx as f32 * (BAR_HEIGHT + BAR_GAP) + BAR_GAP * 0.5;
        let center_y = top + BAR_HEIGHT * 0.5;
        painter.text(
            pos2(rect.left() + LABEL_WIDTH - 6.0, center_y),
            Align2::RIGHT_CENTER,
            &row.feature,
            font.clone(),
            palette.text_primary,
        );
        let bar_left = rect.left() + LABEL_WIDTH;
        let bar_width = bar_span * bar_fraction(row.score, max_score);
        let bar = Rect::from_min_size(pos2(bar_left, top), vec2(bar_width, BAR_HEIGHT));
        painter.rect_filled(bar, CornerRadius::ZERO, palette.bar);
        painter.text(
            pos2(bar_left + bar_width + 6.0, center_y),
            Align2::LEFT_CENTER,
            format!("{:.4}", row.score),
            font.clone(),
            palette.text_muted,
        );
    }
}
