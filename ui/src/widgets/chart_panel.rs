//! API usage chart: tabs, duration selector and a painter-drawn line chart.

use egui::{Align2, Color32, FontId, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, vec2};
use turbo_business::{
    ChartTab, FetchUsageMetricsCommand, MetricsDuration, UsageMetricsCompute, UsageMetricsInput,
    UsagePoint,
};
use turbo_states::StateCtx;

use crate::utils::colors::{COLOR_BLUE, COLOR_RED};

const CHART_HEIGHT: f32 = 260.0;
const AXIS_LEFT: f32 = 56.0;
const AXIS_BOTTOM: f32 = 24.0;
const GRID_LINES: u64 = 4;
const MAX_DATE_LABELS: usize = 7;

pub const TOTAL_HITS_LABEL: &str = "Total API Hits";
pub const SUCCESSFUL_HITS_LABEL: &str = "Successful API Hits";

/// Renders the usage panel. Changing the tab or duration refetches.
pub fn chart_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let metrics = state_ctx.compute::<UsageMetricsCompute>().clone();
    let input = *state_ctx.state::<UsageMetricsInput>();
    if metrics.is_idle() {
        state_ctx.dispatch::<FetchUsageMetricsCommand>();
    }

    let mut selected = input;
    let mut retry = false;

    let response = ui
        .vertical(|ui| {
            ui.heading("API Usage");
            ui.horizontal(|ui| {
                for tab in ChartTab::ALL {
                    if ui.selectable_label(selected.tab == tab, tab.label()).clicked() {
                        selected.tab = tab;
                    }
                }
                ui.separator();
                egui::ComboBox::from_id_salt("metrics_duration")
                    .selected_text(selected.duration.label())
                    .show_ui(ui, |ui| {
                        for duration in MetricsDuration::ALL {
                            ui.selectable_value(&mut selected.duration, duration, duration.label());
                        }
                    });
            });

            ui.add_space(8.0);

            if metrics.is_loading() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading usage...");
                });
            } else if let Some(error) = metrics.error() {
                ui.horizontal(|ui| {
                    ui.colored_label(COLOR_RED, format!("Error: {error}"));
                    retry = ui.button("Retry").clicked();
                });
            } else if let Some(points) = metrics.points() {
                ui.horizontal(|ui| {
                    legend_entry(ui, COLOR_BLUE, TOTAL_HITS_LABEL);
                    ui.add_space(12.0);
                    legend_entry(ui, COLOR_RED, SUCCESSFUL_HITS_LABEL);
                });
                usage_chart(ui, points);
            }
        })
        .response;

    if selected != input {
        state_ctx.update::<UsageMetricsInput>(|current| *current = selected);
        state_ctx.dispatch::<FetchUsageMetricsCommand>();
    } else if retry {
        state_ctx.dispatch::<FetchUsageMetricsCommand>();
    }

    response
}

fn legend_entry(ui: &mut Ui, color: Color32, label: &str) {
    let (rect, _) = ui.allocate_exact_size(vec2(10.0, 10.0), Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.label(label);
}

/// Draws both series over a shared y axis starting at zero.
///
/// Hovering shows the values of the closest date.
pub fn usage_chart(ui: &mut Ui, points: &[UsagePoint]) -> Response {
    let (rect, response) = ui.allocate_exact_size(
        vec2(ui.available_width().max(200.0), CHART_HEIGHT),
        Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let text_color = ui.visuals().weak_text_color();
    let grid_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    let font = FontId::proportional(11.0);

    if points.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No usage in this period",
            FontId::proportional(14.0),
            text_color,
        );
        return response;
    }

    let plot = Rect::from_min_max(
        rect.min + vec2(AXIS_LEFT, 8.0),
        rect.max - vec2(8.0, AXIS_BOTTOM),
    );
    let max = axis_max(points);

    for tick in y_ticks(max) {
        let y = value_to_y(tick, max, plot);
        painter.hline(plot.x_range(), y, Stroke::new(1.0, grid_color));
        painter.text(
            Pos2::new(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            tick.to_string(),
            font.clone(),
            text_color,
        );
    }

    let step = date_label_step(points.len());
    for (index, point) in points.iter().enumerate().step_by(step) {
        painter.text(
            Pos2::new(index_to_x(index, points.len(), plot), plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            &point.date,
            font.clone(),
            text_color,
        );
    }

    draw_series(&painter, points, plot, max, COLOR_BLUE, |p| p.total);
    draw_series(&painter, points, plot, max, COLOR_RED, |p| p.successful);

    let hovered = response
        .hover_pos()
        .filter(|pos| plot.x_range().contains(pos.x))
        .and_then(|pos| nearest_index(pos.x, points.len(), plot))
        .and_then(|index| points.get(index).map(|point| (index, point)));
    let Some((index, point)) = hovered else {
        return response;
    };

    painter.vline(
        index_to_x(index, points.len(), plot),
        plot.y_range(),
        Stroke::new(1.0, text_color),
    );
    response.on_hover_ui_at_pointer(|ui| {
        ui.strong(&point.date);
        ui.colored_label(COLOR_BLUE, format!("{TOTAL_HITS_LABEL}: {}", point.total));
        ui.colored_label(
            COLOR_RED,
            format!("{SUCCESSFUL_HITS_LABEL}: {}", point.successful),
        );
    })
}

fn draw_series(
    painter: &egui::Painter,
    points: &[UsagePoint],
    plot: Rect,
    max: u64,
    color: Color32,
    value: impl Fn(&UsagePoint) -> u64,
) {
    let line: Vec<Pos2> = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            Pos2::new(
                index_to_x(index, points.len(), plot),
                value_to_y(value(point), max, plot),
            )
        })
        .collect();
    if let [single] = line.as_slice() {
        painter.circle_filled(*single, 3.0, color);
    } else {
        painter.add(Shape::line(line, Stroke::new(2.0, color)));
    }
}

/// Top of the y axis: the largest value rounded up to a multiple of the grid.
fn axis_max(points: &[UsagePoint]) -> u64 {
    let largest = points
        .iter()
        .map(|p| p.total.max(p.successful))
        .max()
        .unwrap_or(0)
        .max(1);
    largest.div_ceil(GRID_LINES).saturating_mul(GRID_LINES)
}

fn y_ticks(max: u64) -> impl Iterator<Item = u64> {
    (0..=GRID_LINES).map(move |i| max / GRID_LINES * i)
}

fn value_to_y(value: u64, max: u64, plot: Rect) -> f32 {
    let ratio = value.min(max) as f32 / max.max(1) as f32;
    plot.bottom() - ratio * plot.height()
}

fn index_to_x(index: usize, len: usize, plot: Rect) -> f32 {
    if len <= 1 {
        return plot.center().x;
    }
    plot.left() + plot.width() * index as f32 / (len - 1) as f32
}

/// Index of the point whose x position is closest to `x`.
fn nearest_index(x: f32, len: usize, plot: Rect) -> Option<usize> {
    match len {
        0 => None,
        1 => Some(0),
        _ => {
            let ratio = ((x - plot.left()) / plot.width()).clamp(0.0, 1.0);
            Some((ratio * (len - 1) as f32).round() as usize)
        }
    }
}

fn date_label_step(len: usize) -> usize {
    len.div_ceil(MAX_DATE_LABELS).max(1)
}
