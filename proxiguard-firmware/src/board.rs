//! NUCLEO-L4R5ZI board wiring
//!
//! | Function  | Pin  | Peripheral           |
//! |-----------|------|----------------------|
//! | sensor    | PC9  | EXTI9, pull-down     |
//! | trigger   | PC13 | EXTI13 (user button) |
//! | indicator | PB7  | LD2                  |
//! | buzzer    | PE9  | TIM1_CH1 PWM         |
//!
//! GPIO port clocks are enabled by `embassy_stm32::init`.

use defmt::*;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, OutputType, Pull, Speed};
use embassy_stm32::peripherals::{EXTI13, EXTI9, IWDG, PB7, PC13, PC9, PE9, TIM1};
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::low_level::CountingMode;
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm, SimplePwmChannel};
use embassy_stm32::Peri;

use proxiguard_core::config::SystemConfig;
use proxiguard_core::dispatch::Dispatcher;
use proxiguard_drivers::buzzer::PwmBuzzer;
use proxiguard_hal_stm32::{EdgeInput, IwdgWatchdog, Stm32Output};

use crate::Irqs;

pub type Buzzer = PwmBuzzer<SimplePwmChannel<'static, TIM1>>;
pub type Indicator = Stm32Output<'static>;
pub type BoardWatchdog = IwdgWatchdog<'static, IWDG>;
pub type BoardDispatcher = Dispatcher<Buzzer, Indicator, BoardWatchdog>;

/// Peripherals the board hands to the application
pub struct Board {
    pub sensor: EdgeInput<'static>,
    pub trigger: EdgeInput<'static>,
    pub buzzer: Buzzer,
    pub indicator: Indicator,
}

/// Pins and peripherals consumed by [`Board::init`]
pub struct BoardPeripherals {
    pub tim1: Peri<'static, TIM1>,
    pub buzzer_pin: Peri<'static, PE9>,
    pub indicator_pin: Peri<'static, PB7>,
    pub sensor_pin: Peri<'static, PC9>,
    pub sensor_exti: Peri<'static, EXTI9>,
    pub trigger_pin: Peri<'static, PC13>,
    pub trigger_exti: Peri<'static, EXTI13>,
}

impl Board {
    /// Configure every pin once, before any edge task runs
    ///
    /// Leaves the buzzer suspended and the indicator low.
    pub fn init(p: BoardPeripherals, config: &SystemConfig) -> Self {
        let pwm = SimplePwm::new(
            p.tim1,
            Some(PwmPin::new(p.buzzer_pin, OutputType::PushPull)),
            None,
            None,
            None,
            Hertz(config.buzzer.frequency_hz),
            CountingMode::EdgeAlignedUp,
        );
        let mut channel = pwm.split().ch1;
        channel.enable();
        let buzzer = PwmBuzzer::new(channel, config.buzzer.duty_percent);

        let indicator = Stm32Output::new(Output::new(p.indicator_pin, Level::Low, Speed::Low));

        let sensor = EdgeInput::new(ExtiInput::new(p.sensor_pin, p.sensor_exti, Pull::Down, Irqs));
        let trigger = EdgeInput::new(ExtiInput::new(p.trigger_pin, p.trigger_exti, Pull::None, Irqs));

        info!(
            "Board ready: buzzer {} Hz at {}% duty",
            config.buzzer.frequency_hz, config.buzzer.duty_percent
        );

        Self {
            sensor,
            trigger,
            buzzer,
            indicator,
        }
    }
}
