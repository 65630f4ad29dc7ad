//! Worker half of the pipeline: the single consumer that applies toggle
//! semantics and drives the output lines.
//!
//! Provides [`ToggleWorker`] which blocks on the event queue and flips one
//! toggle-state bit per channel, plus the [`OutputLine`] trait for hardware
//! abstraction.

use crate::queue::EventReceiver;
use crate::types::{ChannelId, ConfigError, PressEvent};
use embassy_sync::blocking_mutex::raw::RawMutex;

/// Trait for abstracting a driven digital output.
///
/// Implement this for your indicator hardware (GPIO, port expander, etc.).
/// `set_active` receives the *logical* on/off state; active-low wiring is
/// the implementation's concern. Handle any hardware errors internally -
/// this method cannot fail.
pub trait OutputLine {
    /// Drives the output to the given logical state.
    fn set_active(&mut self, active: bool);
}

struct OutputSlot<L: OutputLine> {
    line: L,
    on: bool,
}

/// The pipeline's only consumer: toggles per-channel state on each event.
///
/// Owns every output line together with its toggle-state bit, indexed by
/// [`ChannelId`] in a fixed-size table. No other component reads or writes
/// the toggle bits, so they need no locking. Events are processed strictly
/// one at a time in receipt order; ordering across channels is
/// FIFO-by-arrival.
///
/// Per-channel state machine: **Off ⇄ On**, toggled on every validated
/// event, initial state Off, no terminal state.
///
/// # Type Parameters
/// * `'q` - Lifetime of the event queue
/// * `L` - Output line implementation type
/// * `M` - Raw mutex type of the event queue
/// * `MAX_CHANNELS` - Maximum number of channels this worker can hold
/// * `CAP` - Event queue capacity
pub struct ToggleWorker<'q, L: OutputLine, M: RawMutex, const MAX_CHANNELS: usize, const CAP: usize>
{
    slots: [Option<OutputSlot<L>>; MAX_CHANNELS],
    events: EventReceiver<'q, M, CAP>,
}

impl<'q, L, M, const MAX_CHANNELS: usize, const CAP: usize>
    ToggleWorker<'q, L, M, MAX_CHANNELS, CAP>
where
    L: OutputLine,
    M: RawMutex,
{
    /// Creates an empty worker consuming from the given queue.
    pub fn new(events: EventReceiver<'q, M, CAP>) -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
            events,
        }
    }

    /// Adds a channel with the specified ID, driving its output to Off.
    ///
    /// The output line is moved into the worker. Setup-time operation only.
    ///
    /// # Errors
    /// * `DuplicateChannel` - A channel with this ID already exists
    /// * `ChannelOutOfBounds` - The ID exceeds the table's capacity
    pub fn add_channel(&mut self, id: ChannelId, mut line: L) -> Result<(), ConfigError> {
        let idx = id.0;

        if idx >= MAX_CHANNELS {
            return Err(ConfigError::ChannelOutOfBounds {
                id,
                capacity: MAX_CHANNELS,
            });
        }

        if self.slots[idx].is_some() {
            return Err(ConfigError::DuplicateChannel(id));
        }

        line.set_active(false);
        self.slots[idx] = Some(OutputSlot { line, on: false });
        Ok(())
    }

    /// Runs the worker loop for the lifetime of the process.
    ///
    /// Blocks awaiting queue items; this is the only context in the pipeline
    /// allowed to wait indefinitely.
    pub async fn run(mut self) -> ! {
        loop {
            self.step().await;
        }
    }

    /// Receives and applies exactly one event.
    ///
    /// Returns the channel and its new toggle state. Events naming an
    /// unconfigured channel (impossible when both halves are built from one
    /// [`PipelineBuilder`](crate::pipeline::PipelineBuilder)) are discarded
    /// and reported as `None`; no error crosses the queue boundary.
    pub async fn step(&mut self) -> Option<(ChannelId, bool)> {
        let event = self.events.receive().await;
        self.apply(event)
    }

    fn apply(&mut self, event: PressEvent) -> Option<(ChannelId, bool)> {
        let slot = self.slots.get_mut(event.channel.0).and_then(Option::as_mut)?;

        slot.on = !slot.on;
        slot.line.set_active(slot.on);
        Some((event.channel, slot.on))
    }

    /// Returns the current toggle state of the specified channel.
    ///
    /// # Errors
    /// Returns `UnknownChannel` if the channel does not exist in the table.
    pub fn toggle_state(&self, id: ChannelId) -> Result<bool, ConfigError> {
        self.slots
            .get(id.0)
            .and_then(Option::as_ref)
            .map(|slot| slot.on)
            .ok_or(ConfigError::UnknownChannel(id))
    }

    /// Returns true if the worker contains a channel with the given ID.
    pub fn contains(&self, id: ChannelId) -> bool {
        let idx = id.0;
        idx < MAX_CHANNELS && self.slots[idx].is_some()
    }

    /// Returns the number of channels currently in the worker.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true if the worker contains no channels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
