use crate::phase::{PHASE_COUNT, StepIndex};

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Contribution of one step to the signed position.
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// Row to energize on the `counter`-th step of a move.
///
/// Clockwise walks the table 0,1,2,3,0,... and counter-clockwise walks it
/// 0,3,2,1,0,... Every move starts on row 0.
pub const fn next_index(counter: u32, direction: Direction) -> StepIndex {
    let phase = (counter % PHASE_COUNT as u32) as u8;

    match direction {
        Direction::Clockwise => StepIndex::new(phase),
        Direction::CounterClockwise => {
            StepIndex::new((PHASE_COUNT as u8 - phase) % PHASE_COUNT as u8)
        }
    }
}

/// One move as an iterator of rows, so a caller can act between steps.
#[derive(Debug, Clone)]
pub struct StepSequence {
    direction: Direction,
    counter: u32,
    count: u32,
}

pub const fn steps(direction: Direction, count: u32) -> StepSequence {
    StepSequence {
        direction,
        counter: 0,
        count,
    }
}

impl StepSequence {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn remaining(&self) -> u32 {
        self.count - self.counter
    }
}

impl Iterator for StepSequence {
    type Item = StepIndex;

    fn next(&mut self) -> Option<StepIndex> {
        if self.counter >= self.count {
            return None;
        }

        let index = next_index(self.counter, self.direction);
        self.counter += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StepSequence {}
