//! Input half of the pipeline: edge detection, per-channel debounce, and
//! validated-event submission.
//!
//! Provides [`InputStage`] which owns every monitored input line together
//! with its debounce countdown, indexed by [`ChannelId`] in a fixed-size
//! table. Also defines the [`InputLine`] trait for hardware abstraction.

use crate::debounce::Debounce;
use crate::queue::EventSender;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{ChannelId, ConfigError, PressEvent};
use embassy_sync::blocking_mutex::raw::RawMutex;

/// Trait for abstracting a monitored digital input.
///
/// Implement this for your input hardware (GPIO, port expander, etc.).
/// `is_asserted` reports the *logical* pressed state; active-low wiring is
/// the implementation's concern. Sampling must be cheap and non-blocking -
/// it runs in latency-sensitive context.
pub trait InputLine {
    /// Samples the input's current logical level.
    fn is_asserted(&self) -> bool;
}

struct InputSlot<I: TimeInstant, L: InputLine> {
    line: L,
    debounce: Debounce<I>,
}

/// Owns the input lines and debounce countdowns for all channels.
///
/// Two entry points, one per execution context:
///
/// * [`edge`](InputStage::edge) - called once per qualifying electrical
///   transition, from interrupt context. Bounded work: restarts the firing
///   channel's countdown.
/// * [`service`](InputStage::service) - called from timer-expiry context at
///   or after the hint returned by the previous call. Confirms expired
///   countdowns against the current input level and submits validated events.
///
/// Both take `&mut self`; a host that runs them from different contexts
/// wraps the stage in its platform's blocking mutex.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `'q` - Lifetime of the event queue
/// * `I` - Time instant type
/// * `L` - Input line implementation type
/// * `T` - Time source implementation type
/// * `M` - Raw mutex type of the event queue
/// * `MAX_CHANNELS` - Maximum number of channels this stage can hold
/// * `CAP` - Event queue capacity
pub struct InputStage<
    't,
    'q,
    I: TimeInstant,
    L: InputLine,
    T: TimeSource<I>,
    M: RawMutex,
    const MAX_CHANNELS: usize,
    const CAP: usize,
> {
    slots: [Option<InputSlot<I, L>>; MAX_CHANNELS],
    time_source: &'t T,
    events: EventSender<'q, M, CAP>,
    dropped: u32,
}

impl<'t, 'q, I, L, T, M, const MAX_CHANNELS: usize, const CAP: usize>
    InputStage<'t, 'q, I, L, T, M, MAX_CHANNELS, CAP>
where
    I: TimeInstant,
    L: InputLine,
    T: TimeSource<I>,
    M: RawMutex,
{
    /// Creates an empty stage submitting into the given queue.
    pub fn new(time_source: &'t T, events: EventSender<'q, M, CAP>) -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
            time_source,
            events,
            dropped: 0,
        }
    }

    /// Adds a channel with the specified ID and debounce duration.
    ///
    /// The input line is moved into the stage. The set of channels is fixed
    /// once the pipeline starts; this is a setup-time operation only.
    ///
    /// # Errors
    /// * `DuplicateChannel` - A channel with this ID already exists
    /// * `ChannelOutOfBounds` - The ID exceeds the table's capacity
    pub fn add_channel(
        &mut self,
        id: ChannelId,
        line: L,
        debounce_duration: I::Duration,
    ) -> Result<(), ConfigError> {
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

        self.slots[idx] = Some(InputSlot {
            line,
            debounce: Debounce::new(debounce_duration),
        });
        Ok(())
    }

    /// Handles a qualifying electrical transition on the given channel.
    ///
    /// Restarts the channel's debounce countdown from the full duration,
    /// discarding any in-flight countdown (most-recent-edge-wins). Bounded,
    /// allocation-free work; safe from interrupt context.
    ///
    /// # Errors
    /// Returns `UnknownChannel` for an ID that names no configured channel.
    /// Under correct interrupt wiring this cannot occur; callers treat it as
    /// a fatal configuration error.
    pub fn edge(&mut self, id: ChannelId) -> Result<(), ConfigError> {
        let slot = self
            .slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(ConfigError::UnknownChannel(id))?;

        slot.debounce.restart(self.time_source.now());
        Ok(())
    }

    /// Confirms expired countdowns and returns the next service hint.
    ///
    /// For every countdown that has expired since the last call, the input
    /// level is re-sampled. Still asserted: a validated [`PressEvent`] is
    /// submitted to the queue (dropped silently if the queue is full).
    /// Returned to unasserted: the edge was transient and is discarded -
    /// an expected filtering outcome, not an error.
    ///
    /// Channels are visited in ascending ID order, so countdowns that
    /// expired between two service calls submit in that order.
    ///
    /// # Returns
    /// * `Some(duration)` - Time until the earliest pending expiry. Call
    ///   `service` again at or after this delay.
    /// * `None` - All countdowns idle. No servicing needed until the next
    ///   edge arrives.
    pub fn service(&mut self) -> Option<I::Duration> {
        let now = self.time_source.now();
        let mut next: Option<I::Duration> = None;

        for (idx, slot_opt) in self.slots.iter_mut().enumerate() {
            let Some(slot) = slot_opt else { continue };

            if slot.debounce.poll(now) && slot.line.is_asserted() {
                let event = PressEvent::new(ChannelId(idx));
                if self.events.submit(event).is_err() {
                    self.dropped = self.dropped.saturating_add(1);
                }
            }

            if let Some(remaining) = slot.debounce.time_remaining(now) {
                next = Some(match next {
                    None => remaining,
                    Some(current) if remaining.as_millis() < current.as_millis() => remaining,
                    Some(current) => current,
                });
            }
        }

        next
    }

    /// Returns the number of events dropped on a full queue so far.
    ///
    /// Purely diagnostic; dropped events are never retried.
    pub fn dropped_events(&self) -> u32 {
        self.dropped
    }

    /// Returns true if the stage contains a channel with the given ID.
    pub fn contains(&self, id: ChannelId) -> bool {
        let idx = id.0;
        idx < MAX_CHANNELS && self.slots[idx].is_some()
    }

    /// Returns the number of channels currently in the stage.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true if the stage contains no channels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
