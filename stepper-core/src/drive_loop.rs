use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::{config::DriveConfig, error::DriveError, motion::Uln2003, sequencer::Direction};

/// Back-and-forth without any input: one revolution clockwise, rest, one
/// revolution counter-clockwise, rest, forever.
pub struct DriveLoop {
    steps_per_revolution: u32,
    pause_ms: u32,
}

impl DriveLoop {
    pub fn new(config: &DriveConfig) -> Self {
        Self {
            steps_per_revolution: config.steps_per_revolution,
            pause_ms: config.reverse_pause_ms,
        }
    }

    pub async fn cycle<P, D>(&self, motor: &mut Uln2003<P, D>) -> Result<(), DriveError>
    where
        P: OutputPin,
        D: DelayNs,
    {
        for direction in [Direction::Clockwise, Direction::CounterClockwise] {
            motor.rotate(direction, self.steps_per_revolution).await?;
            motor.pause(self.pause_ms).await;
        }
        Ok(())
    }

    pub async fn run<P, D>(&self, motor: &mut Uln2003<P, D>) -> Result<(), DriveError>
    where
        P: OutputPin,
        D: DelayNs,
    {
        log::info!(
            "alternating {} steps each way, {} ms rest",
            self.steps_per_revolution,
            self.pause_ms
        );

        loop {
            self.cycle(motor).await?;
        }
    }
}
