//! Structured search diagnostics.
//!
//! Runners report progress as [`SearchEvent`] values. What happens to them is
//! up to the [`SearchObserver`] passed in: [`NoOpObserver`] drops them,
//! [`EventLog`] keeps them for later analysis (e.g. writing CSV), and
//! [`LogObserver`] forwards them to the `log` facade.

/// One diagnostic record emitted by a metaheuristic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// End of one simulated-annealing cooling stage.
    Annealing {
        stage: usize,
        temperature: f64,
        generated: usize,
        accepted: usize,
        current_cost: i64,
        best_cost: i64,
    },
    /// One tabu-search iteration.
    Tabu {
        iteration: usize,
        current_cost: i64,
        best_cost: i64,
        moved: bool,
        aspiration: bool,
        restarted: bool,
    },
    /// One GRASP construction + local search.
    Grasp {
        iteration: usize,
        constructed_cost: i64,
        refined_cost: i64,
        /// Hamming distance to the incumbent before this iteration; `None`
        /// on the first iteration.
        distance_to_incumbent: Option<usize>,
        improved: bool,
        best_cost: i64,
    },
    /// One ILS perturbation round.
    Ils {
        round: usize,
        candidate_cost: i64,
        incumbent_cost: i64,
        distance_to_incumbent: usize,
        accepted: bool,
    },
    /// One VNS shake + local search.
    Vns {
        step: usize,
        round: usize,
        k: usize,
        candidate_cost: i64,
        current_cost: i64,
        improved: bool,
    },
    /// A random-search sample that improved the best cost.
    RandomSample { sample: usize, best_cost: i64 },
}

impl SearchEvent {
    /// Best-so-far cost carried by the event, when it has one.
    pub fn best_cost(&self) -> Option<i64> {
        match *self {
            SearchEvent::Annealing { best_cost, .. }
            | SearchEvent::Tabu { best_cost, .. }
            | SearchEvent::Grasp { best_cost, .. }
            | SearchEvent::RandomSample { best_cost, .. } => Some(best_cost),
            SearchEvent::Ils {
                incumbent_cost,
                candidate_cost,
                accepted,
                ..
            } => Some(if accepted {
                candidate_cost
            } else {
                incumbent_cost
            }),
            SearchEvent::Vns {
                current_cost,
                candidate_cost,
                improved,
                ..
            } => Some(if improved {
                candidate_cost
            } else {
                current_cost
            }),
        }
    }
}

/// Receives diagnostic events from a running search.
pub trait SearchObserver {
    /// Called once per event, in emission order.
    fn on_event(&mut self, event: &SearchEvent);
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl SearchObserver for NoOpObserver {
    #[inline(always)]
    fn on_event(&mut self, _event: &SearchEvent) {}
}

/// Observer that stores every event in memory.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<SearchEvent>,
}

impl EventLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in arrival order.
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// Consumes the log, returning its events.
    pub fn into_events(self) -> Vec<SearchEvent> {
        self.events
    }

    /// Best-so-far cost after each event that carries one.
    pub fn best_cost_history(&self) -> Vec<i64> {
        self.events.iter().filter_map(SearchEvent::best_cost).collect()
    }
}

impl SearchObserver for EventLog {
    fn on_event(&mut self, event: &SearchEvent) {
        self.events.push(event.clone());
    }
}

/// Observer that forwards events to the `log` crate at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_event(&mut self, event: &SearchEvent) {
        log::trace!("{event:?}");
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_event(&mut self, event: &SearchEvent) {
        (**self).on_event(event)
    }
}
