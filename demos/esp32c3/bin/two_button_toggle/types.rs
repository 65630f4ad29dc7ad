use core::cell::RefCell;

use button_pipeline::{EventQueue, InputStage, ToggleWorker};
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use esp32c3_demo::lines::{ActiveLowButton, ActiveLowLed};
use esp32c3_demo::time_wrapper::{EmbassyInstant, EmbassyTimeSource};

/// Number of button/indicator pairs on this board
pub const NUM_CHANNELS: usize = 2;

/// Outstanding validated presses the queue can hold
pub const QUEUE_CAPACITY: usize = button_pipeline::DEFAULT_QUEUE_CAPACITY;

pub type DemoStage = InputStage<
    'static,
    'static,
    EmbassyInstant,
    ActiveLowButton,
    EmbassyTimeSource,
    CriticalSectionRawMutex,
    NUM_CHANNELS,
    QUEUE_CAPACITY,
>;

pub type DemoWorker =
    ToggleWorker<'static, ActiveLowLed, CriticalSectionRawMutex, NUM_CHANNELS, QUEUE_CAPACITY>;

/// The input stage, shared between the edge tasks and the service task.
/// Both entry points take `&mut`, so the stage sits behind a blocking mutex.
pub type SharedStage = Mutex<CriticalSectionRawMutex, RefCell<DemoStage>>;

/// The single synchronization point between the pipeline halves
pub static EVENT_QUEUE: EventQueue<CriticalSectionRawMutex, QUEUE_CAPACITY> = EventQueue::new();

/// Clock for the debounce countdowns
pub static TIME_SOURCE: EmbassyTimeSource = EmbassyTimeSource;

/// Signal from the edge tasks to the service task when a countdown is armed
pub static SERVICE_WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
