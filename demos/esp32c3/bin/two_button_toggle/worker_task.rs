use defmt::info;

use crate::types::DemoWorker;

/// Task: the pipeline's single consumer.
///
/// Blocks on the event queue for the lifetime of the process; every
/// validated press toggles its channel's indicator.
#[embassy_executor::task]
pub async fn worker_task(worker: DemoWorker) {
    info!("Worker task started");
    worker.run().await
}
