use crate::theme::*;
use eframe::egui::{self, Align2, FontId, Sense, Stroke};
use lumina_core::PricePoint;

const CHART_HEIGHT: f32 = 220.0;
const MARGIN_X: f32 = 52.0;
const MARGIN_Y: f32 = 28.0;
const GRID_ROWS: usize = 4;

/// Hand-painted six-month price trend: gridlines, axis labels, polyline,
/// and point markers, with a value readout for the hovered point.
pub fn draw(ui: &mut egui::Ui, points: &[PricePoint]) {
    if points.is_empty() {
        return;
    }

    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), CHART_HEIGHT),
        Sense::hover(),
    );
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 8.0, COL_SURFACE);
    painter.rect_stroke(rect, 8.0, Stroke::new(1.0, COL_BORDER), egui::StrokeKind::Outside);

    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.min.x + MARGIN_X, rect.min.y + MARGIN_Y),
        egui::pos2(rect.max.x - 16.0, rect.max.y - MARGIN_Y),
    );

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in points {
        min = min.min(p.price);
        max = max.max(p.price);
    }
    // Pad the range so the line never hugs the frame.
    let pad = ((max - min) * 0.15).max(1.0);
    let (min, max) = (min - pad, max + pad);
    let span = max - min;

    let x_at = |i: usize| {
        let t = if points.len() > 1 {
            i as f32 / (points.len() - 1) as f32
        } else {
            0.5
        };
        plot.min.x + t * plot.width()
    };
    let y_at = |price: f64| {
        let t = ((price - min) / span) as f32;
        plot.max.y - t * plot.height()
    };

    // Gridlines and price labels
    for row in 0..=GRID_ROWS {
        let value = min + span * f64::from(row as u32) / GRID_ROWS as f64;
        let y = y_at(value);
        painter.line_segment(
            [egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)],
            Stroke::new(1.0, COL_BORDER),
        );
        painter.text(
            egui::pos2(plot.min.x - 6.0, y),
            Align2::RIGHT_CENTER,
            format!("${value:.0}"),
            FontId::proportional(10.0),
            COL_TEXT_DIM,
        );
    }

    // Month labels
    for (i, p) in points.iter().enumerate() {
        painter.text(
            egui::pos2(x_at(i), plot.max.y + 6.0),
            Align2::CENTER_TOP,
            p.label,
            FontId::proportional(10.0),
            COL_TEXT_DIM,
        );
    }

    // Polyline
    for i in 1..points.len() {
        painter.line_segment(
            [
                egui::pos2(x_at(i - 1), y_at(points[i - 1].price)),
                egui::pos2(x_at(i), y_at(points[i].price)),
            ],
            Stroke::new(2.5, COL_ACCENT),
        );
    }

    // Markers
    for (i, p) in points.iter().enumerate() {
        let center = egui::pos2(x_at(i), y_at(p.price));
        painter.circle_filled(center, 4.0, COL_ACCENT);
        painter.circle_stroke(center, 4.0, Stroke::new(2.0, COL_SURFACE));
    }

    // Hover readout for the nearest point
    if let Some(pointer) = response.hover_pos() {
        let nearest = (0..points.len())
            .min_by(|&a, &b| {
                let da = (x_at(a) - pointer.x).abs();
                let db = (x_at(b) - pointer.x).abs();
                da.total_cmp(&db)
            })
            .unwrap_or(0);
        let p = &points[nearest];
        let center = egui::pos2(x_at(nearest), y_at(p.price));
        painter.circle_filled(center, 6.0, COL_ACCENT);
        painter.text(
            egui::pos2(center.x, center.y - 10.0),
            Align2::CENTER_BOTTOM,
            format!("${:.2}", p.price),
            FontId::proportional(11.0),
            COL_TEXT,
        );
    }
}
