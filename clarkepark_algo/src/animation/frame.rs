// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use crate::signal::TimeGrid;

/// A named sequence sampled on the grid.
#[derive(Clone, Copy, Debug)]
pub struct Series<'a> {
    pub label: &'a str,
    pub values: &'a [f64],
}

impl<'a> Series<'a> {
    pub fn new(label: &'a str, values: &'a [f64]) -> Self {
        Self { label, values }
    }
}

/// Visible part of one series as `[t, value]` points.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Number of samples revealed per trace.
    pub prefix_length: usize,
    pub traces: Vec<Trace>,
}

/// Reveals samples `[0, prefix_length)` of every series.
///
/// `prefix_length` is clamped to the grid, so `time.len()` gives the static plot.
/// A series shorter than the grid is cut at its own end.
pub fn render_frame(time: &TimeGrid, series: &[Series<'_>], prefix_length: usize) -> Frame {
    let prefix_length = prefix_length.min(time.len());
    let t = &time.as_slice()[..prefix_length];

    let traces = series
        .iter()
        .map(|s| Trace {
            label: s.label.to_owned(),
            points: t.iter().zip(s.values).map(|(&t, &v)| [t, v]).collect(),
        })
        .collect();

    Frame {
        prefix_length,
        traces,
    }
}
