use std::future::Future;
use std::rc::Rc;

use dioxus::logger::tracing::info;
use futures::future::{AbortHandle, Abortable};
use futures::{FutureExt, Stream, StreamExt};

use crate::api::SensorApi;
use crate::poller::{DashboardPoller, RenderPort};

/// Handle to a running poll loop. Clones share the same loop.
#[derive(Debug, Clone)]
pub struct RepeatingTask {
    handle: AbortHandle,
}

impl RepeatingTask {
    /// Cancels the loop along with any requests it still has in flight. Idempotent.
    pub fn stop(&self) {
        if !self.is_stopped() {
            info!("[scheduler] stopping poll loop");
            self.handle.abort();
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.handle.is_aborted()
    }
}

/// Runs `startup` once, then a full `tick` for every item of `ticks`.
///
/// Ticks are not serialized: a tick whose requests are still pending does not delay the
/// next one. The returned future finishes when `ticks` ends or the task is stopped.
pub fn repeating<A, R, S>(
    poller: Rc<DashboardPoller<A, R>>,
    ticks: S,
) -> (RepeatingTask, impl Future<Output = ()>)
where
    A: SensorApi + 'static,
    R: RenderPort + 'static,
    S: Stream<Item = ()> + 'static,
{
    let (handle, registration) = AbortHandle::new_pair();
    let work = async move {
        let poller = &*poller;
        futures::join!(
            poller.startup(),
            ticks.for_each_concurrent(None, move |()| poller.tick())
        );
    };
    let run = Abortable::new(work, registration).map(|res| match res {
        Ok(()) => info!("[scheduler] tick source ended"),
        Err(_) => info!("[scheduler] poll loop aborted"),
    });
    (RepeatingTask { handle }, run)
}

/// Fires every `period_ms`; the first tick comes one period after the call.
#[cfg(feature = "web")]
pub fn interval_ticks(period_ms: u32) -> impl Stream<Item = ()> {
    gloo_timers::future::IntervalStream::new(period_ms)
}

/// Fires every `period_ms`; the first tick comes one period after the first poll.
#[cfg(not(feature = "web"))]
pub fn interval_ticks(period_ms: u32) -> impl Stream<Item = ()> {
    use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};

    let period = Duration::from_millis(period_ms.max(1) as u64);
    // built on first poll so it binds to the runtime that drives it
    futures::stream::unfold(None::<Interval>, move |state| async move {
        let mut interval = state.unwrap_or_else(|| {
            let mut i = interval_at(Instant::now() + period, period);
            i.set_missed_tick_behavior(MissedTickBehavior::Skip);
            i
        });
        interval.tick().await;
        Some(((), Some(interval)))
    })
}

#[cfg(feature = "web")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(feature = "web"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}
