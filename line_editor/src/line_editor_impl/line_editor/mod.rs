// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`LineEditor`] read loop, split by responsibility:
//!
//! | Module           | Responsibility                                            |
//! |------------------|-----------------------------------------------------------|
//! | `core`           | [`LineEditor`] struct, session start, commit, end of input |
//! | `event_handlers` | Key binding lookup and one handler per [`crate::EditAction`] |
//! | `render`         | Repaint with padding, hardware cursor placement           |

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules organized by functional responsibility.
mod core;
mod event_handlers;
mod render;

// Public re-exports (expose stable API).
pub use self::core::*;
