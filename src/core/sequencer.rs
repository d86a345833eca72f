use glam::Vec2;

/// Percent-based node positions forming the constellation (a heart outline).
pub const STAR_POINTS: [Vec2; 6] = [
    Vec2::new(50.0, 30.0), // top center dip
    Vec2::new(35.0, 15.0), // top left hump
    Vec2::new(15.0, 30.0), // left side
    Vec2::new(50.0, 80.0), // bottom tip
    Vec2::new(85.0, 30.0), // right side
    Vec2::new(65.0, 15.0), // top right hump
];

/// Required click order; the first node repeats at the end to close the
/// shape.
pub const DRAW_SEQUENCE: [usize; 7] = [0, 1, 2, 3, 4, 5, 0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Constellation,
    Transition,
    Orbit,
}

/// Result of offering a node click to the sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not the expected node (and not an opening click), or wrong phase.
    /// No state changed.
    Ignored,
    /// The click registered. `from` is the previously confirmed node (None
    /// for the opening click); `completed` is set on the final click.
    Connected {
        from: Option<usize>,
        to: usize,
        completed: bool,
    },
}

/// State machine driving Constellation → Transition → Orbit.
///
/// Phases are strictly ordered and never re-entered; both phase advances are
/// one-shot and report whether they actually fired.
pub struct PhaseSequencer {
    phase: Phase,
    sequence: Vec<usize>,
    current_step: usize,
    last_confirmed: Option<usize>,
    connected: Vec<bool>,
}

impl PhaseSequencer {
    pub fn new(node_count: usize) -> Self {
        Self::with_sequence(node_count, DRAW_SEQUENCE.to_vec())
    }

    pub fn with_sequence(node_count: usize, sequence: Vec<usize>) -> Self {
        Self {
            phase: Phase::Constellation,
            sequence,
            current_step: 0,
            last_confirmed: None,
            connected: vec![false; node_count],
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Node the sequencer expects next; None once the sequence is complete.
    pub fn expected_node(&self) -> Option<usize> {
        self.sequence.get(self.current_step).copied()
    }

    pub fn is_connected(&self, node: usize) -> bool {
        self.connected.get(node).copied().unwrap_or(false)
    }

    pub fn is_complete(&self) -> bool {
        self.current_step >= self.sequence.len()
    }

    /// Offer a node click. Any node may open the sequence; after that only
    /// the exact expected node advances it. Everything else is ignored with
    /// no side effects.
    pub fn handle_click(&mut self, node: usize) -> ClickOutcome {
        if self.phase != Phase::Constellation || self.is_complete() || node >= self.connected.len()
        {
            return ClickOutcome::Ignored;
        }
        let expected = self.sequence[self.current_step];
        if node != expected && self.current_step != 0 {
            return ClickOutcome::Ignored;
        }
        let from = self.last_confirmed;
        self.connected[node] = true;
        self.last_confirmed = Some(node);
        self.current_step += 1;
        ClickOutcome::Connected {
            from,
            to: node,
            completed: self.is_complete(),
        }
    }

    /// One-shot move into the transition animation; false once past it.
    pub fn begin_transition(&mut self) -> bool {
        if self.phase == Phase::Constellation && self.is_complete() {
            self.phase = Phase::Transition;
            true
        } else {
            false
        }
    }

    /// One-shot arrival in the terminal orbit phase.
    pub fn enter_orbit(&mut self) -> bool {
        if self.phase == Phase::Transition {
            self.phase = Phase::Orbit;
            true
        } else {
            false
        }
    }
}
