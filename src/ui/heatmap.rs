use eframe::egui::{
    Align2, Color32, FontId, Rect, ScrollArea, Sense, Stroke, StrokeKind, Ui, Vec2, pos2,
};

use crate::color::{Colormap, text_color_for};
use crate::data::stats::CorrMatrix;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Correlation / heatmap tabs – annotated matrix rendering
// ---------------------------------------------------------------------------

/// Correlation tab: the matrix on a diverging blue–red scale.
pub fn correlation_tab(ui: &mut Ui, state: &AppState) {
    matrix_tab(ui, state, Colormap::CoolWarm, "Correlation matrix");
}

/// Heatmap tab: the same numeric data on a sequential Viridis scale.
pub fn heatmap_tab(ui: &mut Ui, state: &AppState) {
    matrix_tab(ui, state, Colormap::Viridis, "Heatmap of numeric data");
}

fn matrix_tab(ui: &mut Ui, state: &AppState, map: Colormap, title: &str) {
    let Some(corr) = &state.corr else {
        empty_hint(ui, "Open a file to view charts  (File → Open…)");
        return;
    };
    if corr.is_empty() {
        empty_hint(ui, "The selected dataset has no numeric columns.");
        return;
    }

    ui.heading(title);
    ui.add_space(4.0);
    ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            annotated_matrix(ui, corr, map);
        });
}

fn empty_hint(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading(text);
    });
}

/// Paint the matrix as a grid of coloured, value-annotated cells with row
/// labels on the left and column labels underneath.
fn annotated_matrix(ui: &mut Ui, corr: &CorrMatrix, map: Colormap) {
    let n = corr.len();
    let font = FontId::proportional(11.0);

    let label_gutter =
        corr.labels.iter().map(|l| l.len()).max().unwrap_or(0) as f32 * 7.0 + 8.0;
    let bottom = 20.0;

    let avail = ui.available_size();
    let cell = ((avail.x - label_gutter) / n as f32)
        .min((avail.y - bottom) / n as f32)
        .clamp(28.0, 72.0);

    let desired = Vec2::new(
        label_gutter + cell * n as f32,
        cell * n as f32 + bottom,
    );
    let (response, painter) = ui.allocate_painter(desired, Sense::hover());
    let origin = response.rect.min;
    let grid = Rect::from_min_size(
        pos2(origin.x + label_gutter, origin.y),
        Vec2::splat(cell * n as f32),
    );

    for i in 0..n {
        for j in 0..n {
            let rect = Rect::from_min_size(
                pos2(grid.min.x + j as f32 * cell, grid.min.y + i as f32 * cell),
                Vec2::splat(cell),
            );
            let v = corr.value(i, j).unwrap_or(f64::NAN);
            let (fill, label) = if v.is_nan() {
                (Color32::DARK_GRAY, "–".to_string())
            } else {
                (map.sample((v + 1.0) / 2.0), format!("{v:.2}"))
            };
            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(
                rect,
                0.0,
                Stroke::new(0.5, Color32::from_gray(30)),
                StrokeKind::Inside,
            );
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                label,
                font.clone(),
                text_color_for(fill),
            );
        }
    }

    let text_color = ui.visuals().text_color();
    for (i, label) in corr.labels.iter().enumerate() {
        painter.text(
            pos2(grid.min.x - 6.0, grid.min.y + (i as f32 + 0.5) * cell),
            Align2::RIGHT_CENTER,
            label,
            font.clone(),
            text_color,
        );
        painter.text(
            pos2(grid.min.x + (i as f32 + 0.5) * cell, grid.max.y + 4.0),
            Align2::CENTER_TOP,
            label,
            font.clone(),
            text_color,
        );
    }

    // Hover readout with the unrounded value.
    if let Some(pos) = response.hover_pos() {
        if grid.contains(pos) {
            let j = ((pos.x - grid.min.x) / cell) as usize;
            let i = ((pos.y - grid.min.y) / cell) as usize;
            if i < n && j < n {
                let v = corr.value(i, j).unwrap_or(f64::NAN);
                let text = if v.is_nan() {
                    format!("{} vs {}: n/a", corr.labels[i], corr.labels[j])
                } else {
                    format!("{} vs {}: {v:.4}", corr.labels[i], corr.labels[j])
                };
                response.on_hover_text(text);
            }
        }
    }
}
