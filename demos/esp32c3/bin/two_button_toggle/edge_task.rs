use button_pipeline::ChannelId;
use defmt::debug;
use esp_hal::gpio::Input;

use crate::types::{SERVICE_WAKE, SharedStage};

/// Task: forward qualifying edges into the input stage.
///
/// One instance per channel. The waiter pin is a second driver on the same
/// GPIO as the sampler owned by the stage; this task only awaits edges and
/// never reads the level itself.
#[embassy_executor::task(pool_size = 2)]
pub async fn edge_task(mut waiter: Input<'static>, id: ChannelId, stage: &'static SharedStage) {
    loop {
        // Press (high->low transition); bounce produces a burst of these
        waiter.wait_for_falling_edge().await;
        debug!("Edge on channel {}", id.0);

        // IDs were validated at build time, so arming cannot fail
        stage.lock(|stage| {
            defmt::unwrap!(stage.borrow_mut().edge(id));
        });

        // Kick the service task in case it was sleeping with nothing armed
        SERVICE_WAKE.signal(());
    }
}
