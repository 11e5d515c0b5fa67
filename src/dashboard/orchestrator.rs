//! Dashboard state machine
//!
//! `Unloaded` until a snapshot arrives, then `Loaded` for the rest of the
//! session. A failed load is terminal. Each range change recomputes the
//! derived view and replaces every slot's rendering instance.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use super::render::Renderer;
use crate::chart::Slot;
use crate::consts::LOAD_FAILURE_MESSAGE;
use crate::core::{DateBounds, DateRange, recalculate};
use crate::error::LoadError;
use crate::snapshot::StatisticsSnapshot;

#[derive(Debug)]
enum State {
    Unloaded { failed: bool },
    Loaded(Loaded),
}

#[derive(Debug)]
struct Loaded {
    original: StatisticsSnapshot,
    range: DateRange,
    bounds: Option<DateBounds>,
    view: StatisticsSnapshot,
}

pub(crate) struct Dashboard<R: Renderer> {
    renderer: R,
    state: State,
    handles: BTreeMap<Slot, R::Handle>,
}

impl<R: Renderer> Dashboard<R> {
    pub(crate) fn new(renderer: R) -> Self {
        Self {
            renderer,
            state: State::Unloaded { failed: false },
            handles: BTreeMap::new(),
        }
    }

    /// Take the outcome of the one snapshot acquisition.
    ///
    /// Only the first call has an effect. A failure is shown through the
    /// renderer and handed back to the caller.
    pub(crate) fn load(
        &mut self,
        result: Result<StatisticsSnapshot, LoadError>,
    ) -> Result<(), LoadError> {
        match &self.state {
            State::Unloaded { failed: false } => {}
            State::Unloaded { failed: true } => {
                debug!("ignoring load after failure");
                return Ok(());
            }
            State::Loaded(_) => {
                debug!("ignoring load, dashboard already loaded");
                return Ok(());
            }
        }

        match result {
            Ok(original) => {
                let range = DateRange::full();
                let bounds = DateBounds::from_activity(&original.daily_activity);
                let view = recalculate(&original, range);
                info!(
                    days = original.daily_activity.len(),
                    "rendering full range"
                );
                self.state = State::Loaded(Loaded {
                    original,
                    range,
                    bounds,
                    view,
                });
                self.render_all();
                Ok(())
            }
            Err(e) => {
                warn!("failed to load statistics: {e}");
                self.renderer.show_failure(LOAD_FAILURE_MESSAGE);
                self.state = State::Unloaded { failed: true };
                Err(e)
            }
        }
    }

    /// Range-change event. The view covers exactly the requested range; the
    /// bounds only describe which days the snapshot has.
    pub(crate) fn set_range(&mut self, range: DateRange) {
        let State::Loaded(loaded) = &mut self.state else {
            debug!("ignoring range change before load");
            return;
        };
        if let Some(bounds) = &loaded.bounds
            && !bounds.covers(range)
        {
            debug!(min = %bounds.min, max = %bounds.max, "range reaches past available days");
        }
        debug!(start = ?range.start, end = ?range.end, "range changed");
        loaded.range = range;
        loaded.view = recalculate(&loaded.original, range);
        self.render_all();
    }

    /// Back to the full range
    #[cfg(test)]
    pub(crate) fn reset_range(&mut self) {
        self.set_range(DateRange::full());
    }

    #[cfg(test)]
    pub(crate) fn is_loaded(&self) -> bool {
        matches!(self.state, State::Loaded(_))
    }

    pub(crate) fn view(&self) -> Option<&StatisticsSnapshot> {
        match &self.state {
            State::Loaded(loaded) => Some(&loaded.view),
            State::Unloaded { .. } => None,
        }
    }

    pub(crate) fn range(&self) -> Option<DateRange> {
        match &self.state {
            State::Loaded(loaded) => Some(loaded.range),
            State::Unloaded { .. } => None,
        }
    }

    pub(crate) fn bounds(&self) -> Option<DateBounds> {
        match &self.state {
            State::Loaded(loaded) => loaded.bounds,
            State::Unloaded { .. } => None,
        }
    }

    pub(crate) fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Bind and replace every slot. A slot that fails to render is left blank.
    fn render_all(&mut self) {
        let State::Loaded(loaded) = &self.state else {
            return;
        };
        for slot in Slot::ALL {
            let spec = slot.bind(&loaded.view);
            if let Some(old) = self.handles.remove(&slot) {
                debug!(slot = slot.id(), "destroying previous instance");
                self.renderer.destroy(old);
            }
            match self.renderer.render(slot, &spec) {
                Ok(handle) => {
                    debug!(slot = slot.id(), empty = spec.is_empty(), "rendered");
                    self.handles.insert(slot, handle);
                }
                Err(e) => warn!("{e}"),
            }
        }
    }
}
