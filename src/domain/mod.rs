//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the validated parameter tuple (`ParamTuple`)
//! - the square viewing window (`Viewport`)
//! - work-unit and configuration structs (`RenderJob`, `RunConfig`)

pub mod types;

pub use types::*;
