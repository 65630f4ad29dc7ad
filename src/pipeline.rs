//! Pipeline construction: one validated channel list producing both halves.
//!
//! Provides [`PipelineBuilder`], the single source of truth for the channel
//! set. Building yields the [`InputStage`] and the [`ToggleWorker`] with
//! identical channel tables, so events can never name a channel the worker
//! does not know.

use crate::DEFAULT_DEBOUNCE_MS;
use crate::detector::{InputLine, InputStage};
use crate::queue::EventQueue;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{ChannelId, ConfigError};
use crate::worker::{OutputLine, ToggleWorker};
use embassy_sync::blocking_mutex::raw::RawMutex;
use heapless::Vec;

/// One monitored input paired with one driven output.
#[derive(Debug)]
pub struct ChannelConfig<In: InputLine, Out: OutputLine> {
    /// Identifier indexing this channel in both halves of the pipeline.
    pub id: ChannelId,

    /// The monitored input line.
    pub input: In,

    /// The driven output line.
    pub output: Out,
}

impl<In: InputLine, Out: OutputLine> ChannelConfig<In, Out> {
    /// Creates a channel configuration.
    #[inline]
    pub fn new(id: ChannelId, input: In, output: Out) -> Self {
        Self { id, input, output }
    }
}

/// Builder for constructing a validated pipeline.
///
/// The set of channels is fixed at build time and never grows or shrinks
/// afterwards. The debounce duration applies to every channel and defaults
/// to [`DEFAULT_DEBOUNCE_MS`].
#[derive(Debug)]
pub struct PipelineBuilder<In: InputLine, Out: OutputLine, D: TimeDuration, const MAX_CHANNELS: usize>
{
    channels: Vec<ChannelConfig<In, Out>, MAX_CHANNELS>,
    debounce_duration: D,
}

impl<In: InputLine, Out: OutputLine, D: TimeDuration, const MAX_CHANNELS: usize>
    PipelineBuilder<In, Out, D, MAX_CHANNELS>
{
    /// Creates an empty builder with the default debounce duration.
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
            debounce_duration: D::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }

    /// Adds a channel to the pipeline.
    ///
    /// # Panics
    /// Panics if more than `MAX_CHANNELS` channels are added.
    pub fn channel(mut self, id: ChannelId, input: In, output: Out) -> Self {
        if self
            .channels
            .push(ChannelConfig::new(id, input, output))
            .is_err()
        {
            panic!("channel capacity exceeded");
        }
        self
    }

    /// Sets the debounce duration applied to every channel.
    ///
    /// Default is [`DEFAULT_DEBOUNCE_MS`] milliseconds.
    pub fn debounce_duration(mut self, duration: D) -> Self {
        self.debounce_duration = duration;
        self
    }

    /// Builds and validates both halves of the pipeline.
    ///
    /// The input stage and the worker are populated from the same channel
    /// list, then handed to the host: the stage goes wherever edges and
    /// service calls come from, the worker into its long-lived task.
    ///
    /// # Errors
    /// * `EmptyPipeline` - No channels were added
    /// * `DuplicateChannel` - Two channels share an ID
    /// * `ChannelOutOfBounds` - An ID exceeds `MAX_CHANNELS`
    #[allow(clippy::type_complexity)]
    pub fn build<'t, 'q, I, T, M, const CAP: usize>(
        self,
        time_source: &'t T,
        queue: &'q EventQueue<M, CAP>,
    ) -> Result<
        (
            InputStage<'t, 'q, I, In, T, M, MAX_CHANNELS, CAP>,
            ToggleWorker<'q, Out, M, MAX_CHANNELS, CAP>,
        ),
        ConfigError,
    >
    where
        I: TimeInstant<Duration = D>,
        T: TimeSource<I>,
        M: RawMutex,
    {
        if self.channels.is_empty() {
            return Err(ConfigError::EmptyPipeline);
        }

        let mut input_stage = InputStage::new(time_source, queue.sender());
        let mut worker = ToggleWorker::new(queue.receiver());

        for config in self.channels {
            input_stage.add_channel(config.id, config.input, self.debounce_duration)?;
            worker.add_channel(config.id, config.output)?;
        }

        Ok((input_stage, worker))
    }
}

impl<In: InputLine, Out: OutputLine, D: TimeDuration, const MAX_CHANNELS: usize> Default
    for PipelineBuilder<In, Out, D, MAX_CHANNELS>
{
    fn default() -> Self {
        Self::new()
    }
}
