/// Delay between two phase rows. 28BYJ-48 stalls much below this.
pub const STEP_DELAY_MS: u32 = 2;

/// Button sampling period, also used while waiting for a release.
pub const POLL_INTERVAL_MS: u32 = 10;

/// Rest between the two halves of an autonomous back-and-forth.
pub const REVERSE_PAUSE_MS: u32 = 400;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum InputMode {
    /// Two active-low push-buttons request one revolution each.
    Buttons,
    /// No input, alternate revolutions forever.
    Autonomous,
}

/// One deployment of the engine. Both boards share the sequencing code and
/// only differ in these numbers.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct DriveConfig {
    pub steps_per_revolution: u32,
    pub step_delay_ms: u32,
    pub poll_interval_ms: u32,
    pub reverse_pause_ms: u32,
    pub input_mode: InputMode,
}

impl DriveConfig {
    pub const BUTTON_PANEL: Self = Self {
        steps_per_revolution: 512,
        step_delay_ms: STEP_DELAY_MS,
        poll_interval_ms: POLL_INTERVAL_MS,
        reverse_pause_ms: REVERSE_PAUSE_MS,
        input_mode: InputMode::Buttons,
    };

    pub const AUTONOMOUS: Self = Self {
        steps_per_revolution: 1024,
        step_delay_ms: STEP_DELAY_MS,
        poll_interval_ms: POLL_INTERVAL_MS,
        reverse_pause_ms: REVERSE_PAUSE_MS,
        input_mode: InputMode::Autonomous,
    };

    pub const fn with_input_mode(self, input_mode: InputMode) -> Self {
        Self { input_mode, ..self }
    }

    pub const fn with_steps_per_revolution(self, steps_per_revolution: u32) -> Self {
        Self {
            steps_per_revolution,
            ..self
        }
    }
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self::BUTTON_PANEL
    }
}
