//! Core types shared across the pipeline.

/// An identifier for one monitored input/output pair.
///
/// This is a simple wrapper around `usize` that provides type safety for
/// channel identifiers. Users specify channel IDs when adding channels to a
/// pipeline, and the same IDs index both halves of the built pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelId(pub usize);

impl From<usize> for ChannelId {
    fn from(id: usize) -> Self {
        ChannelId(id)
    }
}

impl From<ChannelId> for usize {
    fn from(id: ChannelId) -> Self {
        id.0
    }
}

/// A validated button press, confirmed by the debounce re-check.
///
/// Carries no payload beyond the channel identity. The worker derives the
/// toggle action from its own per-channel state, not from event content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressEvent {
    /// The channel whose input was confirmed asserted.
    pub channel: ChannelId,
}

impl PressEvent {
    /// Creates a press event for the given channel.
    #[inline]
    pub fn new(channel: ChannelId) -> Self {
        Self { channel }
    }
}

/// Errors that can occur while wiring up or addressing the pipeline.
///
/// All of these are startup-time configuration failures. A pipeline that
/// fails to build must not be run partially initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The specified channel ID does not exist in the table.
    UnknownChannel(ChannelId),

    /// Attempted to add a channel with an ID that already exists.
    DuplicateChannel(ChannelId),

    /// The channel ID exceeds the table's capacity.
    ChannelOutOfBounds { id: ChannelId, capacity: usize },

    /// The pipeline was built with no channels.
    EmptyPipeline,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::UnknownChannel(id) => {
                write!(f, "channel ID {} does not exist", id.0)
            }
            ConfigError::DuplicateChannel(id) => {
                write!(f, "channel ID {} already exists", id.0)
            }
            ConfigError::ChannelOutOfBounds { id, capacity } => {
                write!(
                    f,
                    "channel ID {} exceeds table capacity of {}",
                    id.0, capacity
                )
            }
            ConfigError::EmptyPipeline => {
                write!(f, "pipeline must have at least one channel")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Errors that can occur when submitting an event to the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubmitError {
    /// The queue is at capacity; the event was dropped.
    ///
    /// Not fatal: the toggle is idempotent and the user can press again.
    QueueFull,
}

impl core::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SubmitError::QueueFull => {
                write!(f, "event queue is full, event dropped")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SubmitError {}
