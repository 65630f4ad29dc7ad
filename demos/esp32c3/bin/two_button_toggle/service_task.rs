use defmt::debug;
use embassy_futures::select::select;
use embassy_time::{Duration, Timer};

use crate::types::{SERVICE_WAKE, SharedStage};

/// How long to sleep when no countdown is armed. An edge wakes us early
/// through SERVICE_WAKE, so this is just a ceiling.
const IDLE_SLEEP: Duration = Duration::from_secs(3600);

/// Task: run the debounce confirmations at the pace the stage asks for.
///
/// The stage reports the time until its earliest pending expiry after every
/// service pass; we sleep exactly that long, unless a fresh edge re-arms a
/// countdown and signals us first.
#[embassy_executor::task]
pub async fn service_task(stage: &'static SharedStage) {
    let mut next_delay = IDLE_SLEEP;

    loop {
        select(SERVICE_WAKE.wait(), Timer::after(next_delay)).await;

        next_delay = match stage.lock(|stage| stage.borrow_mut().service()) {
            Some(remaining) => remaining.0,
            None => IDLE_SLEEP,
        };

        debug!("Next service in {}ms", next_delay.as_millis());
    }
}
