#![no_std]
#![no_main]

use assign_resources::assign_resources;
use embassy_executor::{Executor, Spawner};
use embassy_futures::select::{Either, select};
use embassy_rp::{
    bind_interrupts,
    gpio::{Input, Level, Output, Pull},
    peripherals::{self, USB as pUSB},
};
use embassy_time::{Delay, Duration, Ticker};
use panic_probe as _;
use static_cell::StaticCell;
use stepper_core::{DriveConfig, DriveError, DriveLoop, InputMode, InputPolicy, Uln2003};

mod receiver;

use receiver::{START_SIGNAL, STOP_SIGNAL};

#[cfg(not(feature = "autonomous"))]
const CONFIG: DriveConfig = DriveConfig::BUTTON_PANEL;
#[cfg(feature = "autonomous")]
const CONFIG: DriveConfig = DriveConfig::AUTONOMOUS;

static EXECUTOR0: StaticCell<Executor> = StaticCell::new();

type Motor = Uln2003<Output<'static>, Delay>;
type Buttons = InputPolicy<Input<'static>>;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<pUSB>;
});

assign_resources! {
    usb: UsbResources {
        usb: USB,
        led: PIN_25,
    }

    // ULN2003 inputs, wired in reverse order
    motor: MotorResources {
        in4: PIN_0,
        in3: PIN_1,
        in2: PIN_2,
        in1: PIN_3,
    }

    buttons: ButtonResources {
        cw: PIN_4,
        ccw: PIN_5,
    }
}

#[cortex_m_rt::entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());
    let r = split_resources!(p);

    let executor0 = EXECUTOR0.init(Executor::new());
    executor0.run(move |spawner| spawner.spawn(core0_main(r, spawner)).unwrap());
}

#[embassy_executor::task]
async fn core0_main(r: AssignedResources, spawner: Spawner) {
    let usb_driver = embassy_rp::usb::Driver::new(r.usb.usb, Irqs);
    spawner.spawn(receiver::usb_comm_task(usb_driver)).unwrap();
    spawner.spawn(drive_task(r.motor, r.buttons)).unwrap();

    let mut led = Output::new(r.usb.led, Level::Low);

    let mut ticker = Ticker::every(Duration::from_millis(500));
    loop {
        led.toggle();

        ticker.next().await;
    }
}

#[embassy_executor::task]
async fn drive_task(m: MotorResources, b: ButtonResources) {
    let coils = [
        Output::new(m.in4, Level::Low),
        Output::new(m.in3, Level::Low),
        Output::new(m.in2, Level::Low),
        Output::new(m.in1, Level::Low),
    ];
    let mut motor: Motor = Uln2003::new(coils, Delay, CONFIG.step_delay_ms);

    let mut buttons: Option<Buttons> = match CONFIG.input_mode {
        InputMode::Buttons => Some(InputPolicy::new(
            Input::new(b.cw, Pull::Up),
            Input::new(b.ccw, Pull::Up),
            &CONFIG,
        )),
        InputMode::Autonomous => None,
    };

    log::info!("Drive mode: {:?}", CONFIG.input_mode);

    loop {
        match motor.initialize_io() {
            Ok(()) => {
                let outcome = select(drive(&mut motor, buttons.as_mut()), STOP_SIGNAL.wait()).await;

                match outcome {
                    Either::First(Ok(())) => {}
                    Either::First(Err(e)) => {
                        log::error!("Drive failed: {}", e);
                    }
                    Either::Second(()) => {
                        log::info!("Motion stopped at step {}", motor.position());
                    }
                }
            }
            Err(e) => {
                log::error!("Coil init failed: {}", e);
            }
        }

        if let Err(e) = motor.release() {
            log::error!("Coil release failed: {}", e);
        }

        START_SIGNAL.reset();
        START_SIGNAL.wait().await;
        STOP_SIGNAL.reset();
        log::info!("Motion resumed");
    }
}

async fn drive(motor: &mut Motor, buttons: Option<&mut Buttons>) -> Result<(), DriveError> {
    match buttons {
        Some(buttons) => buttons.run(motor).await,
        None => DriveLoop::new(&CONFIG).run(motor).await,
    }
}
