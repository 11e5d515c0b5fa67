//! Dashboard orchestration and the rendering capability it drives

mod orchestrator;
mod render;

pub(crate) use orchestrator::Dashboard;
pub(crate) use render::Canvas;
