/// Coil levels for one step, indexed by output line (IN4, IN3, IN2, IN1).
pub type CoilRow = [bool; 4];

pub const PHASE_COUNT: usize = 4;

/// Two-phase-on commutation table. Every row energizes two adjacent coils and
/// each row hands one coil over to the next.
pub const PHASE_TABLE: [CoilRow; PHASE_COUNT] = [
    [true, false, false, true],
    [true, true, false, false],
    [false, true, true, false],
    [false, false, true, true],
];

/// Row of [`PHASE_TABLE`]. Always in `0..PHASE_COUNT`.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct StepIndex(u8);

impl StepIndex {
    /// Panics if `index` is not a row of the table; callers reduce first.
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < PHASE_COUNT, "step index out of range");
        Self(index)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn row(self) -> CoilRow {
        PHASE_TABLE[self.0 as usize]
    }
}

pub const fn row_of(index: StepIndex) -> CoilRow {
    index.row()
}
