// Describes what goes on screen for each pipeline: panel grid, titles, limits and colors.
// Pure data; the window code in `app` only reads it.

// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use clarkepark_algo::animation::{render_frame, Frame, Series};
use clarkepark_algo::signal::TimeGrid;
use clarkepark_algo::{ClarkeParkSystem, ThreePhaseSystem};
use egui::Color32;

const PHASE_COLORS: [Color32; 3] = [
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 128, 0),
    Color32::from_rgb(0, 0, 255),
];
const PAIR_COLORS: [Color32; 2] = [PHASE_COLORS[0], PHASE_COLORS[2]];

/// 16 x 9 inch at 120 dpi
const WINDOW_SIZE: [f32; 2] = [1920.0, 1080.0];
const FIGURE_BACKGROUND: Color32 = Color32::from_gray(204);
const PANEL_BACKGROUND: Color32 = Color32::from_gray(230);
const LINE_WIDTH: f32 = 2.0;
const X_TICKS: f64 = 10.0;
/// X span assumed for a single-sample grid.
const MIN_X_SPAN: f64 = 1.0;

#[derive(Clone, Debug)]
pub struct PanelTrace {
    pub label: String,
    pub color: Color32,
    pub values: Vec<f64>,
}

#[derive(Clone, Debug)]
pub struct Panel {
    pub title: String,
    /// Y axis spans `-y_limit..=y_limit`
    pub y_limit: f64,
    pub legend: bool,
    pub traces: Vec<PanelTrace>,
}

impl Panel {
    fn new(title: &str, y_limit: f64, legend: bool) -> Self {
        Self {
            title: title.to_owned(),
            y_limit,
            legend,
            traces: Vec::new(),
        }
    }

    fn with_series(mut self, series: &[Series<'_>], colors: &[Color32]) -> Self {
        for (s, &color) in series.iter().zip(colors) {
            self.traces.push(PanelTrace {
                label: s.label.to_owned(),
                color,
                values: s.values.to_vec(),
            });
        }
        self
    }

    /// Visible part of every trace, same order as `traces`.
    pub fn frame(&self, time: &TimeGrid, prefix_length: usize) -> Frame {
        let series: Vec<Series<'_>> = self
            .traces
            .iter()
            .map(|t| Series::new(&t.label, &t.values))
            .collect();
        render_frame(time, &series, prefix_length)
    }
}

/// One window. Rows are stacked top to bottom, panels in a row share its width.
#[derive(Clone, Debug)]
pub struct Figure {
    pub title: String,
    pub size: [f32; 2],
    pub background: Color32,
    pub panel_background: Color32,
    pub line_width: f32,
    pub x_tick_step: f64,
    pub time: TimeGrid,
    pub rows: Vec<Vec<Panel>>,
}

impl Figure {
    fn new(title: &str, time: &TimeGrid, rows: Vec<Vec<Panel>>) -> Self {
        Self {
            title: title.to_owned(),
            size: WINDOW_SIZE,
            background: FIGURE_BACKGROUND,
            panel_background: PANEL_BACKGROUND,
            line_width: LINE_WIDTH,
            x_tick_step: x_span(time) / X_TICKS,
            time: time.clone(),
            rows,
        }
    }

    /// X axis range, never empty.
    pub fn x_range(&self) -> (f64, f64) {
        let start = self.time.start();
        (start, start + x_span(&self.time))
    }

    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.rows.iter().flatten()
    }
}

fn x_span(time: &TimeGrid) -> f64 {
    let span = time.end() - time.start();
    if span > 0.0 {
        span
    } else {
        MIN_X_SPAN
    }
}

/// Combined view on top, one panel per phase below.
pub fn three_phase_figure(system: &ThreePhaseSystem) -> Figure {
    const Y_LIMIT: f64 = 60.0;
    let series = system.series();

    let combined = Panel::new("Three Phase System", Y_LIMIT, true).with_series(&series, &PHASE_COLORS);
    let singles = series
        .iter()
        .zip(PHASE_COLORS)
        .map(|(s, color)| Panel::new(s.label, Y_LIMIT, false).with_series(&[*s], &[color]))
        .collect();

    Figure::new("Three Phase System", &system.time, vec![vec![combined], singles])
}

/// Three stacked panels: abc, alpha-beta, d-q.
pub fn clarke_park_figure(system: &ClarkeParkSystem) -> Figure {
    const Y_LIMIT: f64 = 100.0;

    let phases = Panel::new("Three Phase System", Y_LIMIT, true)
        .with_series(&system.phase_series(), &PHASE_COLORS);
    let clarke = Panel::new("Clarke Transform (Iabc -> Iab)", Y_LIMIT, true)
        .with_series(&system.stationary_series(), &PAIR_COLORS);
    let park = Panel::new("Park Transform (Iab -> Idq)", Y_LIMIT, true)
        .with_series(&system.rotating_series(), &PAIR_COLORS);

    Figure::new(
        "Clarke and Park Transforms",
        &system.time,
        vec![vec![phases], vec![clarke], vec![park]],
    )
}
