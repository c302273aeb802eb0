//! flasc - fluent timelines over answer sets.
//!
//! Loads a logic program, has clingo enumerate its stable models, and
//! slices the time-indexed `holds`/`occurs` atoms (fluents) out of them:
//! grouped by time step, filtered by their active/inactive tag, printed
//! or rendered as a chart.
#![deny(clippy::all)]

pub mod plotting;
pub mod queries;
pub mod solving;

pub(crate) const HOLDS: &str = "holds";
pub(crate) const OCCURS: &str = "occurs";
pub(crate) const ACTIVE: &str = "active";
pub(crate) const INACTIVE: &str = "inactive";
