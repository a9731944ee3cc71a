// Sequence-level stages of both pipelines. Each stage reads immutable inputs and
// returns new immutable sequences of the grid length.

// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

mod rotating;
mod stationary;
mod three_phase;
mod time_grid;

pub use rotating::{RotatingAngle, RotatingSignal};
pub use stationary::StationarySignal;
pub use three_phase::PhaseSignal;
pub use time_grid::TimeGrid;
