//! Simulation observer trait for progress reporting and data collection.

use sp_core::{Facility, PlanId};
use sp_plan::Plan;

use crate::PlanSummary;

/// Callbacks invoked by [`Simulation`][crate::Simulation] while stepping and
/// closing.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Callbacks only fire for steps that commit;
/// a step rejected by a selection failure produces no events.
///
/// # Example — completion printer
///
/// ```rust,ignore
/// struct CompletionPrinter;
///
/// impl SimObserver for CompletionPrinter {
///     fn on_facility_completed(&mut self, step: u64, plan: PlanId, facility: &Facility) {
///         println!("step {step}: plan {plan} finished {}", facility.name());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before any plan advances.  `step` is 1-based.
    fn on_step_start(&mut self, _step: u64) {}

    /// Called once for every facility that becomes operational.
    fn on_facility_completed(&mut self, _step: u64, _plan: PlanId, _facility: &Facility) {}

    /// Called after every plan has advanced, with read-only access to all of
    /// them so output writers can record per-plan state.
    fn on_step_end(&mut self, _step: u64, _plans: &[Plan]) {}

    /// Called when the simulation closes, with the final per-plan summaries.
    fn on_close(&mut self, _summaries: &[PlanSummary]) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
