//! CLI command implementations.

mod inspect;
mod payload;
mod render;
mod templatize;

pub use inspect::{run_inspect, InspectArgs};
pub use render::{run_render, RenderArgs};
pub use templatize::{run_templatize, TemplatizeArgs};
