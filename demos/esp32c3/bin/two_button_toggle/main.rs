//! Two-Button Toggle Example
//!
//! Wires two push buttons to two indicator LEDs through the debounce
//! pipeline. Each confirmed press toggles its LED; chatter and sub-window
//! glitches are filtered out.
//!
//! Board wiring (ESP32-C3 devkit):
//! - GPIO9  (BOOT button) / GPIO10: buttons to GND, internal pull-ups
//! - GPIO8  (onboard LED) / GPIO7:  LEDs, active low

#![no_std]
#![no_main]

use core::cell::RefCell;

use button_pipeline::{ChannelId, PipelineBuilder};
use defmt::info;
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::timer::timg::TimerGroup;
use static_cell::StaticCell;
use {esp_backtrace as _, esp_println as _};

esp_bootloader_esp_idf::esp_app_desc!();

mod edge_task;
mod service_task;
mod types;
mod worker_task;

use esp32c3_demo::lines::{ActiveLowButton, ActiveLowLed};
use esp32c3_demo::time_wrapper::EmbassyDuration;

use edge_task::edge_task;
use service_task::service_task;
use types::{EVENT_QUEUE, NUM_CHANNELS, SharedStage, TIME_SOURCE};
use worker_task::worker_task;

static STAGE: StaticCell<SharedStage> = StaticCell::new();

fn button_config() -> InputConfig {
    InputConfig::default().with_pull(Pull::Up)
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::max()));

    let sw_int = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0, sw_int.software_interrupt0);
    info!("Embassy initialized!");

    // Each button pin gets two drivers: one awaits edges in its edge task,
    // the other stays inside the stage for the level re-check at expiry.
    let sampler0 = Input::new(unsafe { peripherals.GPIO9.clone_unchecked() }, button_config());
    let waiter0 = Input::new(peripherals.GPIO9, button_config());
    let sampler1 = Input::new(unsafe { peripherals.GPIO10.clone_unchecked() }, button_config());
    let waiter1 = Input::new(peripherals.GPIO10, button_config());

    // LEDs off (active low)
    let led0 = Output::new(peripherals.GPIO8, Level::High, OutputConfig::default());
    let led1 = Output::new(peripherals.GPIO7, Level::High, OutputConfig::default());

    let (input_stage, worker) = defmt::unwrap!(
        PipelineBuilder::<ActiveLowButton, ActiveLowLed, EmbassyDuration, NUM_CHANNELS>::new()
            .channel(
                ChannelId(0),
                ActiveLowButton::new(sampler0),
                ActiveLowLed::new(led0),
            )
            .channel(
                ChannelId(1),
                ActiveLowButton::new(sampler1),
                ActiveLowLed::new(led1),
            )
            .build(&TIME_SOURCE, &EVENT_QUEUE)
    );

    let stage: &'static SharedStage = STAGE.init(Mutex::new(RefCell::new(input_stage)));

    spawner.must_spawn(edge_task(waiter0, ChannelId(0), stage));
    spawner.must_spawn(edge_task(waiter1, ChannelId(1), stage));
    spawner.must_spawn(service_task(stage));
    spawner.must_spawn(worker_task(worker));

    info!("Ready!");

    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
