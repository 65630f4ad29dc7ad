//! Bounded FIFO event queue bridging producer contexts to the worker task.
//!
//! Provides [`EventQueue`], a thin domain wrapper around
//! [`embassy_sync::channel::Channel`] fixing the element type to
//! [`PressEvent`] and the submission policy to reject-newest-when-full.
//! The queue is the single synchronization point of the pipeline: up to one
//! producer per channel on the submit side, exactly one consumer on the
//! receive side.

use crate::types::{PressEvent, SubmitError};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

/// A bounded, order-preserving queue of validated press events.
///
/// Capacity is fixed at creation via the `CAP` const generic (reference
/// behavior uses 10 outstanding events). Construction is `const`, so the
/// queue can live in a `static` and outlive every task that touches it.
///
/// # Type Parameters
/// * `M` - Raw mutex type guarding the queue. Use a critical-section based
///   mutex when submissions come from interrupt-adjacent context.
/// * `CAP` - Maximum number of outstanding events.
pub struct EventQueue<M: RawMutex, const CAP: usize> {
    inner: Channel<M, PressEvent, CAP>,
}

impl<M: RawMutex, const CAP: usize> EventQueue<M, CAP> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Channel::new(),
        }
    }

    /// Returns a submit handle for the producer side.
    pub fn sender(&self) -> EventSender<'_, M, CAP> {
        EventSender {
            inner: self.inner.sender(),
        }
    }

    /// Returns the receive handle for the worker task.
    pub fn receiver(&self) -> EventReceiver<'_, M, CAP> {
        EventReceiver {
            inner: self.inner.receiver(),
        }
    }

    /// Returns the fixed capacity of the queue.
    pub fn capacity(&self) -> usize {
        CAP
    }
}

impl<M: RawMutex, const CAP: usize> Default for EventQueue<M, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle: non-blocking submission of validated events.
#[derive(Clone, Copy)]
pub struct EventSender<'q, M: RawMutex, const CAP: usize> {
    inner: Sender<'q, M, PressEvent, CAP>,
}

impl<'q, M: RawMutex, const CAP: usize> EventSender<'q, M, CAP> {
    /// Submits an event without blocking.
    ///
    /// On a full queue the event is rejected and dropped; the caller must not
    /// retry or stall, as submission happens in latency-sensitive context.
    pub fn submit(&self, event: PressEvent) -> Result<(), SubmitError> {
        self.inner
            .try_send(event)
            .map_err(|_| SubmitError::QueueFull)
    }
}

/// Consumer handle: suspending receive for the worker task.
#[derive(Clone, Copy)]
pub struct EventReceiver<'q, M: RawMutex, const CAP: usize> {
    inner: Receiver<'q, M, PressEvent, CAP>,
}

impl<'q, M: RawMutex, const CAP: usize> EventReceiver<'q, M, CAP> {
    /// Receives the next event in FIFO order, suspending until one arrives.
    ///
    /// The wait is indefinite; the debounce duration is the only timeout in
    /// the pipeline.
    pub async fn receive(&self) -> PressEvent {
        self.inner.receive().await
    }

    /// Receives the next event if one is already queued.
    pub fn try_receive(&self) -> Option<PressEvent> {
        self.inner.try_receive().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChannelId;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn submissions_come_out_in_fifo_order() {
        let queue = EventQueue::<NoopRawMutex, 10>::new();
        let sender = queue.sender();
        let receiver = queue.receiver();

        sender.submit(PressEvent::new(ChannelId(1))).unwrap();
        sender.submit(PressEvent::new(ChannelId(0))).unwrap();
        sender.submit(PressEvent::new(ChannelId(1))).unwrap();

        assert_eq!(receiver.try_receive(), Some(PressEvent::new(ChannelId(1))));
        assert_eq!(receiver.try_receive(), Some(PressEvent::new(ChannelId(0))));
        assert_eq!(receiver.try_receive(), Some(PressEvent::new(ChannelId(1))));
        assert_eq!(receiver.try_receive(), None);
    }

    #[test]
    fn full_queue_rejects_newest_without_blocking() {
        let queue = EventQueue::<NoopRawMutex, 3>::new();
        let sender = queue.sender();

        for _ in 0..3 {
            sender.submit(PressEvent::new(ChannelId(0))).unwrap();
        }

        // Consumer stalled: excess submissions are dropped, not queued
        for _ in 0..5 {
            assert_eq!(
                sender.submit(PressEvent::new(ChannelId(1))),
                Err(SubmitError::QueueFull)
            );
        }

        // Only the events within capacity survive, in order
        let receiver = queue.receiver();
        for _ in 0..3 {
            assert_eq!(receiver.try_receive(), Some(PressEvent::new(ChannelId(0))));
        }
        assert_eq!(receiver.try_receive(), None);
    }

    #[test]
    fn receive_resolves_for_queued_event() {
        let queue = EventQueue::<NoopRawMutex, 10>::new();
        queue.sender().submit(PressEvent::new(ChannelId(7))).unwrap();

        let event = block_on(queue.receiver().receive());
        assert_eq!(event.channel, ChannelId(7));
    }

    #[test]
    fn capacity_reports_const_generic() {
        let queue = EventQueue::<NoopRawMutex, 10>::new();
        assert_eq!(queue.capacity(), 10);
    }
}
