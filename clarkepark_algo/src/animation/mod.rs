// Display-independent side of the animation: which part of every sequence is visible
// at a given frame, and which frame is due at a given moment.

// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

mod frame;
mod playback;

pub use frame::{render_frame, Frame, Series, Trace};
pub use playback::Playback;
