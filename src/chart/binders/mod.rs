//! Binders: one pure function per slot, from a derived view to a slot spec

mod activity;
mod cost;
mod models;
mod quality;
mod tools;
mod usage;
mod workflow;

pub(crate) use activity::{activity, hourly, overview};
pub(crate) use cost::{cache, cost_by_model, cost_over_time};
pub(crate) use models::{model_tokens, tokens_over_time};
pub(crate) use quality::{durations, errors};
pub(crate) use tools::{mcp_servers, mcp_tools, subagents, tool_success, tools};
pub(crate) use usage::{commands, projects};
pub(crate) use workflow::{depth, file_edits, plans, tasks, thinking};
