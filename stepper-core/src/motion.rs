use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal_async::delay::DelayNs;

use crate::{
    error::DriveError,
    phase::StepIndex,
    sequencer::{self, Direction},
};

/// ULN2003 board driving a 4-phase unipolar motor.
///
/// Owns the four coil outputs (ordered IN4, IN3, IN2, IN1) and the delay used
/// for every wait of the drive, so nothing else ever touches the coils.
pub struct Uln2003<P, D> {
    coils: [P; 4],
    delay: D,
    /// delay after each row (ms)
    step_delay_ms: u32,
    /// steps since boot, clockwise positive
    position: i32,
}

impl<P, D> Uln2003<P, D> {
    pub fn new(coils: [P; 4], delay: D, step_delay_ms: u32) -> Self {
        Self {
            coils,
            delay,
            step_delay_ms,
            position: 0,
        }
    }

    pub fn set_step_delay_ms(&mut self, step_delay_ms: u32) {
        self.step_delay_ms = step_delay_ms;
    }

    pub fn step_delay_ms(&self) -> u32 {
        self.step_delay_ms
    }

    pub fn position(&self) -> i32 {
        self.position
    }
}

impl<P, D> Uln2003<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    pub fn initialize_io(&mut self) -> Result<(), DriveError> {
        self.position = 0;
        self.release()
    }

    /// Drops all coils. The shaft is free to turn afterwards.
    pub fn release(&mut self) -> Result<(), DriveError> {
        self.write_row([false; 4])
    }

    pub fn energize(&mut self, index: StepIndex) -> Result<(), DriveError> {
        self.write_row(index.row())
    }

    /// Runs `steps` rows in `direction`, waiting the step delay after each.
    /// Always completes the whole move unless the future is dropped.
    pub async fn rotate(&mut self, direction: Direction, steps: u32) -> Result<(), DriveError> {
        log::debug!("rotate {:?} by {} steps", direction, steps);

        for index in sequencer::steps(direction, steps) {
            self.energize(index)?;
            self.position = self.position.wrapping_add(direction.sign());
            self.delay.delay_ms(self.step_delay_ms).await;
        }

        Ok(())
    }

    pub async fn pause(&mut self, ms: u32) {
        self.delay.delay_ms(ms).await;
    }

    fn write_row(&mut self, row: [bool; 4]) -> Result<(), DriveError> {
        for (coil, level) in self.coils.iter_mut().zip(row) {
            coil.set_state(PinState::from(level))
                .map_err(|_e| DriveError::Coil)?;
        }
        Ok(())
    }
}
