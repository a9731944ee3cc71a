// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use std::time::{Duration, Instant};

use clarkepark_algo::animation::Playback;
use eframe::{run_native, App, NativeOptions};
use egui::RichText;
use egui_plot::{uniform_grid_spacer, Corner, Legend, Line, Plot, PlotPoints};

use crate::layout::{Figure, Panel};

/// Space reserved above each plot for its title.
const TITLE_HEIGHT: f32 = 24.0;

pub enum PlotMode {
    /// Reveals one more sample per frame interval, looping.
    Animated(Playback),
    /// Full sequences, drawn once.
    Static,
}

/// Stateless apart from the animation start time: every repaint derives the
/// visible prefix from the elapsed time.
pub struct PlotApp {
    figure: Figure,
    mode: PlotMode,
    started: Instant,
}

impl PlotApp {
    pub fn new(figure: Figure, mode: PlotMode) -> Self {
        Self {
            figure,
            mode,
            started: Instant::now(),
        }
    }

    /// Samples visible now and the delay until the next change, if any.
    fn prefix_length(&self) -> (usize, Option<Duration>) {
        match &self.mode {
            PlotMode::Animated(playback) => {
                let elapsed = self.started.elapsed();
                (playback.frame_at(elapsed), Some(playback.until_next(elapsed)))
            }
            PlotMode::Static => (self.figure.time.len(), None),
        }
    }

    fn draw_panel(&self, ui: &mut egui::Ui, panel: &Panel, height: f32, prefix_length: usize) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&panel.title).strong());
        });

        let step = self.figure.x_tick_step;
        let (x_min, x_max) = self.figure.x_range();
        let mut plot = Plot::new(&panel.title)
            .height((height - TITLE_HEIGHT).max(40.0))
            .include_x(x_min)
            .include_x(x_max)
            .include_y(-panel.y_limit)
            .include_y(panel.y_limit)
            .x_grid_spacer(uniform_grid_spacer(move |_| [step / 5.0, step, step * 5.0]))
            .x_axis_label("Time (s)")
            .y_axis_label("Amplitude (V)")
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false);
        if panel.legend {
            plot = plot.legend(Legend::default().position(Corner::RightTop));
        }

        let frame = panel.frame(&self.figure.time, prefix_length);
        plot.show(ui, |plot_ui| {
            for (trace, style) in frame.traces.into_iter().zip(&panel.traces) {
                plot_ui.line(
                    Line::new(PlotPoints::from(trace.points))
                        .color(style.color)
                        .width(self.figure.line_width)
                        .name(trace.label),
                );
            }
        });
    }
}

impl App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (prefix_length, next_frame) = self.prefix_length();

        let background = egui::Frame::central_panel(&ctx.style()).fill(self.figure.background);
        egui::CentralPanel::default().frame(background).show(ctx, |ui| {
            ui.visuals_mut().extreme_bg_color = self.figure.panel_background;

            let rows = self.figure.rows.len().max(1) as f32;
            let spacing = ui.spacing().item_spacing.y;
            let row_height = (ui.available_height() - spacing * (rows - 1.0)) / rows;

            for row in &self.figure.rows {
                if row.len() == 1 {
                    self.draw_panel(ui, &row[0], row_height, prefix_length);
                } else {
                    ui.columns(row.len(), |columns| {
                        for (column, panel) in columns.iter_mut().zip(row) {
                            self.draw_panel(column, panel, row_height, prefix_length);
                        }
                    });
                }
            }
        });

        if let Some(delay) = next_frame {
            ctx.request_repaint_after(delay);
        }
    }
}

/// Opens a window for `figure` and blocks until it is closed.
pub fn show(figure: Figure, mode: PlotMode) -> anyhow::Result<()> {
    let title = figure.title.clone();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(figure.size)
            .with_title(&title),
        ..Default::default()
    };

    tracing::debug!(window = %title, "opening plot window");
    run_native(
        &title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(PlotApp::new(figure, mode)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("plot window `{title}` failed: {e}"))?;
    tracing::debug!(window = %title, "plot window closed");
    Ok(())
}
