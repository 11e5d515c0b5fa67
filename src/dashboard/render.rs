//! Rendering capability consumed by the dashboard
//!
//! A renderer turns a slot spec into a live instance and hands back an opaque
//! handle. The dashboard owns every handle and destroys it before the slot is
//! rendered again.

use std::collections::BTreeMap;

use crate::chart::{Slot, SlotSpec};
use crate::error::RenderError;

pub(crate) trait Renderer {
    type Handle;

    /// Create a rendering instance for one slot
    fn render(&mut self, slot: Slot, spec: &SlotSpec) -> Result<Self::Handle, RenderError>;

    /// Release an instance created by `render`
    fn destroy(&mut self, handle: Self::Handle);

    /// Replace the whole dashboard with a fixed failure notice
    fn show_failure(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct CanvasHandle(u64);

/// In-memory renderer; keeps the live specs so they can be printed or inspected
#[derive(Debug, Default)]
pub(crate) struct Canvas {
    instances: BTreeMap<CanvasHandle, (Slot, SlotSpec)>,
    next_id: u64,
    created: usize,
    destroyed: usize,
    failure: Option<String>,
}

impl Canvas {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Live specs in slot order
    pub(crate) fn live(&self) -> Vec<(Slot, &SlotSpec)> {
        let mut live: Vec<(Slot, &SlotSpec)> = self
            .instances
            .values()
            .map(|(slot, spec)| (*slot, spec))
            .collect();
        live.sort_by_key(|(slot, _)| *slot);
        live
    }

    pub(crate) fn live_count(&self) -> usize {
        self.instances.len()
    }

    #[cfg(test)]
    pub(crate) fn live_for(&self, slot: Slot) -> usize {
        self.instances.values().filter(|(s, _)| *s == slot).count()
    }

    pub(crate) fn created(&self) -> usize {
        self.created
    }

    pub(crate) fn destroyed(&self) -> usize {
        self.destroyed
    }

    pub(crate) fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}

/// Every series must line up with the labels
fn validate(slot: Slot, spec: &SlotSpec) -> Result<(), RenderError> {
    let Some(chart) = spec.as_chart() else {
        return Ok(());
    };
    if let Some(series) = chart
        .series
        .iter()
        .find(|s| s.data.len() != chart.labels.len())
    {
        return Err(RenderError::Rejected {
            slot: slot.id(),
            reason: format!(
                "series \"{}\" has {} points for {} labels",
                series.label,
                series.data.len(),
                chart.labels.len()
            ),
        });
    }
    Ok(())
}

impl Renderer for Canvas {
    type Handle = CanvasHandle;

    fn render(&mut self, slot: Slot, spec: &SlotSpec) -> Result<CanvasHandle, RenderError> {
        validate(slot, spec)?;
        let handle = CanvasHandle(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.instances.insert(handle, (slot, spec.clone()));
        Ok(handle)
    }

    fn destroy(&mut self, handle: CanvasHandle) {
        if self.instances.remove(&handle).is_some() {
            self.destroyed += 1;
        }
    }

    fn show_failure(&mut self, message: &str) {
        self.instances.clear();
        self.failure = Some(message.to_string());
    }
}
