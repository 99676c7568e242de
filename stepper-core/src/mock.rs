use std::{cell::RefCell, collections::VecDeque, convert::Infallible, rc::Rc};

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::{motion::Uln2003, phase::CoilRow};

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Event {
    Coil(usize, bool),
    Delay(u32),
    Sample(&'static str, bool),
}

/// Everything the doubles did, in order.
#[derive(Debug, Default, Clone)]
pub struct Trace(Rc<RefCell<Vec<Event>>>);

impl Trace {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn delays(&self) -> Vec<u32> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Delay(ms) => Some(ms),
                _ => None,
            })
            .collect()
    }

    pub fn coil_writes(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Coil(..)))
            .count()
    }

    /// Groups the coil writes into full rows, IN4 first.
    pub fn rows(&self) -> Vec<CoilRow> {
        let mut rows = Vec::new();
        let mut row = [false; 4];
        for event in self.events() {
            if let Event::Coil(line, level) = event {
                row[line] = level;
                if line == 3 {
                    rows.push(row);
                }
            }
        }
        rows
    }
}

pub struct MockCoil {
    line: usize,
    trace: Trace,
}

impl ErrorType for MockCoil {
    type Error = Infallible;
}

impl OutputPin for MockCoil {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.trace.push(Event::Coil(self.line, true));
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.trace.push(Event::Coil(self.line, false));
        Ok(())
    }
}

pub struct MockDelay {
    trace: Trace,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.trace.push(Event::Delay(ns / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.trace.push(Event::Delay(ms));
    }
}

/// Active-low button that replays scripted "pressed" samples, then reads
/// released forever.
pub struct MockButton {
    name: &'static str,
    pressed: VecDeque<bool>,
    trace: Trace,
}

impl MockButton {
    pub fn new(name: &'static str, pressed: &[bool], trace: &Trace) -> Self {
        Self {
            name,
            pressed: pressed.iter().copied().collect(),
            trace: trace.clone(),
        }
    }

    fn sample(&mut self) -> bool {
        let pressed = self.pressed.pop_front().unwrap_or(false);
        self.trace.push(Event::Sample(self.name, pressed));
        pressed
    }
}

impl ErrorType for MockButton {
    type Error = Infallible;
}

impl InputPin for MockButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.sample())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.sample())
    }
}

/// Pin that always fails, for the error paths.
pub struct BrokenPin;

#[derive(Debug)]
pub struct BrokenPinError;

impl embedded_hal::digital::Error for BrokenPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl ErrorType for BrokenPin {
    type Error = BrokenPinError;
}

impl OutputPin for BrokenPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(BrokenPinError)
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(BrokenPinError)
    }
}

impl InputPin for BrokenPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(BrokenPinError)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(BrokenPinError)
    }
}

pub fn motor(trace: &Trace, step_delay_ms: u32) -> Uln2003<MockCoil, MockDelay> {
    let coils = [0, 1, 2, 3].map(|line| MockCoil {
        line,
        trace: trace.clone(),
    });
    Uln2003::new(
        coils,
        MockDelay {
            trace: trace.clone(),
        },
        step_delay_ms,
    )
}

pub fn broken_motor(trace: &Trace) -> Uln2003<BrokenPin, MockDelay> {
    Uln2003::new(
        [BrokenPin, BrokenPin, BrokenPin, BrokenPin],
        MockDelay {
            trace: trace.clone(),
        },
        2,
    )
}
