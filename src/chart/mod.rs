//! Chart specs and the binders that produce them

mod binders;
mod format;
mod names;
mod palette;
mod slot;
mod spec;

pub(crate) use slot::Slot;
pub(crate) use spec::{ChartKind, SlotSpec};

#[cfg(test)]
pub(crate) use format::ValueFormat;
#[cfg(test)]
pub(crate) use spec::ChartSpec;
