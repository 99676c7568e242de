use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::{config::DriveConfig, error::DriveError, motion::Uln2003, sequencer::Direction};

/// Two active-low push-buttons, each asking for one full revolution.
///
/// Both buttons are expected to have their pull-up enabled, so a pressed
/// button reads low. A move holds the loop until its button is let go; a
/// button held forever keeps the loop waiting forever.
pub struct InputPolicy<B> {
    cw: B,
    ccw: B,
    steps_per_revolution: u32,
    poll_interval_ms: u32,
}

impl<B> InputPolicy<B>
where
    B: InputPin,
{
    pub fn new(cw: B, ccw: B, config: &DriveConfig) -> Self {
        Self {
            cw,
            ccw,
            steps_per_revolution: config.steps_per_revolution,
            poll_interval_ms: config.poll_interval_ms,
        }
    }

    /// Samples the buttons once. Clockwise is checked first and wins when
    /// both are down; counter-clockwise is only sampled if clockwise is up.
    pub fn command(&mut self) -> Result<Option<Direction>, DriveError> {
        if pressed(&mut self.cw)? {
            Ok(Some(Direction::Clockwise))
        } else if pressed(&mut self.ccw)? {
            Ok(Some(Direction::CounterClockwise))
        } else {
            Ok(None)
        }
    }

    /// One idle iteration: run whatever the buttons ask for, wait for the
    /// release, then rest for one poll interval.
    pub async fn poll<P, D>(
        &mut self,
        motor: &mut Uln2003<P, D>,
    ) -> Result<Option<Direction>, DriveError>
    where
        P: OutputPin,
        D: DelayNs,
    {
        let command = self.command()?;

        if let Some(direction) = command {
            motor.rotate(direction, self.steps_per_revolution).await?;
            self.wait_release(direction, motor).await?;
        }

        motor.pause(self.poll_interval_ms).await;

        Ok(command)
    }

    pub async fn run<P, D>(&mut self, motor: &mut Uln2003<P, D>) -> Result<(), DriveError>
    where
        P: OutputPin,
        D: DelayNs,
    {
        log::info!(
            "waiting for buttons, {} steps per press",
            self.steps_per_revolution
        );

        loop {
            self.poll(motor).await?;
        }
    }

    async fn wait_release<P, D>(
        &mut self,
        direction: Direction,
        motor: &mut Uln2003<P, D>,
    ) -> Result<(), DriveError>
    where
        P: OutputPin,
        D: DelayNs,
    {
        let button = match direction {
            Direction::Clockwise => &mut self.cw,
            Direction::CounterClockwise => &mut self.ccw,
        };

        while pressed(button)? {
            log::trace!("{:?} button still held", direction);
            motor.pause(self.poll_interval_ms).await;
        }

        Ok(())
    }
}

fn pressed<B: InputPin>(button: &mut B) -> Result<bool, DriveError> {
    button.is_low().map_err(|_e| DriveError::Button)
}
