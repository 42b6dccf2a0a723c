//! Proxiguard - IR Proximity Buzzer Firmware
//!
//! Main firmware binary for the NUCLEO-L4R5ZI. An IR obstacle sensor drives
//! a PWM buzzer, a user button toggles it by hand, and the independent
//! watchdog resets the board unless the object leaves in time.
//!
//! Startup order: watchdog, pins, tasks, idle loop.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::{bind_interrupts, exti, interrupt};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use proxiguard_core::dispatch::Dispatcher;
use proxiguard_core::safety::WatchdogSupervisor;
use proxiguard_hal_stm32::IwdgWatchdog;

use crate::board::{Board, BoardPeripherals};
use crate::config::SYSTEM_CONFIG;

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(pub struct Irqs {
    EXTI9_5 => exti::InterruptHandler<interrupt::typelevel::EXTI9_5>;
    EXTI15_10 => exti::InterruptHandler<interrupt::typelevel::EXTI15_10>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Proxiguard firmware starting...");

    let config = SYSTEM_CONFIG;
    // build.rs rejects these already; the IWDG would assert on a bad timeout
    if let Err(e) = config.validate() {
        defmt::panic!("Invalid configuration: {:?}", e);
    }

    let p = embassy_stm32::init(Default::default());

    // Watchdog first, so a hang during bring-up still resets the board
    let mut supervisor = WatchdogSupervisor::new(IwdgWatchdog::new(p.IWDG));
    supervisor.start(config.watchdog.timeout_us).unwrap();
    info!("Watchdog armed: {} us", config.watchdog.timeout_us);

    let board = Board::init(
        BoardPeripherals {
            tim1: p.TIM1,
            buzzer_pin: p.PE9,
            indicator_pin: p.PB7,
            sensor_pin: p.PC9,
            sensor_exti: p.EXTI9,
            trigger_pin: p.PC13,
            trigger_exti: p.EXTI13,
        },
        &config,
    );

    let dispatcher = Dispatcher::new(&config, board.buzzer, board.indicator, supervisor);

    // Dispatcher first so no edge is queued without a consumer
    spawner.spawn(tasks::dispatcher_task(dispatcher)).unwrap();
    spawner.spawn(tasks::sensor_task(board.sensor)).unwrap();
    spawner.spawn(tasks::trigger_task(board.trigger)).unwrap();

    info!("All tasks spawned");

    // Idle loop. Not a watchdog feeder: only a clear edge kicks.
    loop {
        Timer::after_millis(config.idle.interval_ms as u64).await;
        trace!("idle");
    }
}
