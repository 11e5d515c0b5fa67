//! Display names for model and tool identifiers

/// Model families checked in order; the first substring match wins
const MODEL_FAMILIES: [(&str, &str); 3] = [("opus", "Opus"), ("sonnet", "Sonnet"), ("haiku", "Haiku")];

/// "claude-3-5-sonnet-20241022" -> "Sonnet". Unknown models keep the last
/// dash-separated segment of their identifier.
pub(crate) fn model_display_name(model: &str) -> String {
    let lower = model.to_ascii_lowercase();
    for (needle, name) in MODEL_FAMILIES {
        if lower.contains(needle) {
            return name.to_string();
        }
    }
    model.rsplit('-').next().unwrap_or(model).to_string()
}

/// An MCP tool identifier (`mcp__server__tool`) split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct McpToolName {
    pub(crate) server: String,
    pub(crate) tool: String,
}

impl McpToolName {
    /// Positional split on `__`. Missing components fall back to the raw identifier.
    pub(crate) fn parse(id: &str) -> Self {
        let parts: Vec<&str> = id.split("__").collect();
        let server = if parts.len() >= 2 { parts[1] } else { id };
        let tool = if parts.len() >= 3 { parts[2] } else { id };
        McpToolName {
            server: server.to_string(),
            tool: tool.to_string(),
        }
    }
}

/// "in_progress" -> "In Progress"
pub(crate) fn humanize(key: &str) -> String {
    key.split(['_', '-'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Last path component of a project path
pub(crate) fn path_tail(path: &str) -> &str {
    path.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(path)
}
