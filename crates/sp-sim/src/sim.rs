//! The `Simulation` struct and its step loop.

use sp_core::{FacilityType, PlanId, Settlement};
use sp_plan::Plan;
use sp_policy::SelectionPolicy;
use tracing::{debug, info};

use crate::{ActionRecord, NoopObserver, PlanSummary, SimError, SimObserver, SimResult};

// ── SimState ──────────────────────────────────────────────────────────────────

/// Everything a backup captures.
///
/// A plain value type: cloning it duplicates every settlement, facility type,
/// plan (policy memory and facilities included) and log record.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SimState {
    /// Registered settlements, in registration order.  Names are unique.
    pub settlements:  Vec<Settlement>,
    /// The facility catalog.  Names are unique.
    pub catalog:      Vec<FacilityType>,
    /// Plans in creation (= id) order.
    pub plans:        Vec<Plan>,
    /// Append-only record of executed commands.
    pub actions_log:  Vec<ActionRecord>,
    /// Id handed to the next plan.
    pub next_plan_id: PlanId,
    /// Number of committed simulation steps.
    pub current_step: u64,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// The top-level simulation.
///
/// Owns the live [`SimState`], the running flag and a single backup slot.
/// Every operation either succeeds or leaves the simulation exactly as it was.
#[derive(Debug, Default)]
pub struct Simulation {
    state:   SimState,
    running: bool,
    backup:  Option<SimState>,
}

impl Simulation {
    /// An empty, not-yet-running simulation.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Start accepting steps.  Fails if already running.
    pub fn open(&mut self) -> SimResult<()> {
        if self.running {
            return Err(SimError::AlreadyRunning);
        }
        self.running = true;
        info!("simulation started");
        Ok(())
    }

    /// Stop the simulation and return each plan's final scores.
    pub fn close(&mut self) -> SimResult<Vec<PlanSummary>> {
        self.close_with(&mut NoopObserver)
    }

    /// Like [`close`](Self::close) but reports the summaries to `observer`.
    pub fn close_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Vec<PlanSummary>> {
        if !self.running {
            return Err(SimError::NotRunning);
        }
        let summaries = self.summaries();
        for s in &summaries {
            info!(
                plan = %s.id,
                settlement = %s.settlement,
                life_quality = s.scores.life_quality,
                economy = s.scores.economy,
                environment = s.scores.environment,
                "final plan scores"
            );
        }
        self.running = false;
        observer.on_close(&summaries);
        info!(steps = self.state.current_step, "simulation closed");
        Ok(summaries)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register a settlement.  Fails if the name is taken.
    pub fn add_settlement(&mut self, settlement: Settlement) -> SimResult<()> {
        if self.settlement(settlement.name()).is_ok() {
            return Err(SimError::SettlementExists(settlement.name().to_owned()));
        }
        debug!(name = settlement.name(), kind = %settlement.kind(), "settlement added");
        self.state.settlements.push(settlement);
        Ok(())
    }

    /// Append a facility type to the catalog.  Fails if the name is taken.
    ///
    /// Existing plans keep the catalog they were created with and never see
    /// the new type.
    pub fn add_facility(&mut self, facility: FacilityType) -> SimResult<()> {
        if self.state.catalog.iter().any(|f| f.name() == facility.name()) {
            return Err(SimError::FacilityTypeExists(facility.name().to_owned()));
        }
        debug!(name = facility.name(), category = %facility.category(), "facility type added");
        self.state.catalog.push(facility);
        Ok(())
    }

    /// Create a plan for `settlement_name` driven by `policy`, snapshotting
    /// the current catalog.  Returns the new plan's id.
    pub fn add_plan(&mut self, settlement_name: &str, policy: SelectionPolicy) -> SimResult<PlanId> {
        let settlement = self.settlement(settlement_name)?.clone();
        let id = self.state.next_plan_id;
        debug!(plan = %id, settlement = settlement_name, policy = %policy, "plan added");
        self.state
            .plans
            .push(Plan::new(id, settlement, policy, self.state.catalog.clone()));
        self.state.next_plan_id = id.next();
        Ok(id)
    }

    /// Give plan `id` an independent copy of `policy`.
    pub fn change_plan_policy(&mut self, id: PlanId, policy: &SelectionPolicy) -> SimResult<()> {
        let plan = self
            .state
            .plans
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(SimError::PlanNotFound(id))?;
        debug!(plan = %id, from = %plan.policy(), to = %policy, "policy changed");
        plan.set_selection_policy(policy);
        Ok(())
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance every plan by one step.
    pub fn step(&mut self) -> SimResult<()> {
        self.step_n_with(1, &mut NoopObserver)
    }

    /// Advance `n` steps.  All-or-nothing: if any plan fails at any of the
    /// `n` steps, nothing changes.
    pub fn step_n(&mut self, n: u64) -> SimResult<()> {
        self.step_n_with(n, &mut NoopObserver)
    }

    /// Advance one step, reporting to `observer`.
    pub fn step_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.step_n_with(1, observer)
    }

    /// Advance `n` steps, reporting to `observer`.
    pub fn step_n_with<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        if !self.running {
            return Err(SimError::NotRunning);
        }

        // ── Phase 1: dry run on scratch plans ─────────────────────────────
        //
        // Plans are deterministic, so if the scratch copies survive `n`
        // steps the live plans will too.
        let order = self.step_order();
        let mut scratch = self.state.plans.clone();
        for _ in 0..n {
            for &i in &order {
                scratch[i].step()?;
            }
        }

        // ── Phase 2: commit ───────────────────────────────────────────────
        for _ in 0..n {
            let step = self.state.current_step + 1;
            observer.on_step_start(step);

            for &i in &order {
                let plan = &mut self.state.plans[i];
                let completed = plan.step()?;
                let facilities = plan.facilities();
                for facility in &facilities[facilities.len() - completed..] {
                    observer.on_facility_completed(step, plan.id(), facility);
                }
            }

            self.state.current_step = step;
            observer.on_step_end(step, &self.state.plans);
            debug!(step, plans = self.state.plans.len(), "step complete");
        }
        Ok(())
    }

    /// Plan indices in stepping order: by settlement registration, then by
    /// creation within one settlement.
    fn step_order(&self) -> Vec<usize> {
        let settlements = &self.state.settlements;
        let plans = &self.state.plans;
        let rank = |i: usize| {
            let name = plans[i].settlement().name();
            settlements.iter().position(|s| s.name() == name).unwrap_or(usize::MAX)
        };
        let mut order: Vec<usize> = (0..plans.len()).collect();
        order.sort_by_key(|&i| rank(i));
        order
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn plan(&self, id: PlanId) -> SimResult<&Plan> {
        self.state
            .plans
            .iter()
            .find(|p| p.id() == id)
            .ok_or(SimError::PlanNotFound(id))
    }

    pub fn settlement(&self, name: &str) -> SimResult<&Settlement> {
        self.state
            .settlements
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| SimError::SettlementNotFound(name.to_owned()))
    }

    #[inline]
    pub fn settlements(&self) -> &[Settlement] {
        &self.state.settlements
    }

    #[inline]
    pub fn catalog(&self) -> &[FacilityType] {
        &self.state.catalog
    }

    #[inline]
    pub fn plans(&self) -> &[Plan] {
        &self.state.plans
    }

    #[inline]
    pub fn current_step(&self) -> u64 {
        self.state.current_step
    }

    /// Read-only view of the whole live state.
    #[inline]
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Current scores of every plan, in creation order.
    pub fn summaries(&self) -> Vec<PlanSummary> {
        self.state.plans.iter().map(PlanSummary::from).collect()
    }

    // ── Action log ────────────────────────────────────────────────────────

    #[inline]
    pub fn actions_log(&self) -> &[ActionRecord] {
        &self.state.actions_log
    }

    /// Append a record to the action log.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.state.actions_log.push(record);
    }

    // ── Backup / restore ──────────────────────────────────────────────────

    /// Snapshot the live state into the backup slot, replacing any earlier
    /// snapshot.
    pub fn backup(&mut self) {
        self.backup = Some(self.state.clone());
        info!(step = self.state.current_step, "backup taken");
    }

    /// Replace the live state with a copy of the backup.
    ///
    /// The backup stays in place and can be restored again.  The running flag
    /// is not part of the snapshot and is left as is.
    pub fn restore(&mut self) -> SimResult<()> {
        let backup = self.backup.as_ref().ok_or(SimError::NoBackup)?;
        self.state = backup.clone();
        info!(step = self.state.current_step, "backup restored");
        Ok(())
    }

    #[inline]
    pub fn has_backup(&self) -> bool {
        self.backup.is_some()
    }

    /// Read-only view of the backup slot.
    #[inline]
    pub fn backup_state(&self) -> Option<&SimState> {
        self.backup.as_ref()
    }
}
