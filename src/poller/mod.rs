//! Decides what the dashboard shows. The poller fetches readings through a [`SensorApi`]
//! and pushes the results through a [`RenderPort`]. It never sees the DOM.
//!
//! All state sits in `Cell`/`RefCell` because both fetches of a tick run concurrently on
//! one thread. Borrows are never held across an `.await`.

pub mod chart;
pub mod generation;
pub mod render;
pub mod table;

#[cfg(test)]
pub mod testing;

use std::cell::{Cell, RefCell};

use dioxus::logger::tracing::{debug, info, warn};

use crate::api::SensorApi;
use crate::config::DashboardConfig;
use crate::shared::types::Reading;
use generation::Generations;

pub use chart::ChartSeries;
pub use render::{ConnectivityStatus, RenderPort};
pub use table::{DisplayTable, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// Arrived after a newer response and was dropped (`DiscardStale` only).
    Discarded,
}

pub struct DashboardPoller<A, R> {
    config: DashboardConfig,
    api: A,
    port: R,
    table: RefCell<DisplayTable>,
    latest_gen: Generations,
    history_gen: Generations,
    next_row_id: Cell<u64>,
}

impl<A: SensorApi, R: RenderPort> DashboardPoller<A, R> {
    pub fn new(config: DashboardConfig, api: A, port: R) -> Self {
        let table = DisplayTable::new(config.table_capacity);
        Self {
            config,
            api,
            port,
            table: RefCell::new(table),
            latest_gen: Generations::default(),
            history_gen: Generations::default(),
            next_row_id: Cell::new(0),
        }
    }

    /// First load: history is requested before latest, both run concurrently.
    pub async fn startup(&self) {
        info!(
            "[poller] starting for device {} (every {} ms)",
            self.config.device_id, self.config.poll_interval_ms
        );
        futures::join!(self.fetch_history(), self.fetch_latest());
    }

    /// One polling cycle. The two fetches are not ordered relative to each other.
    pub async fn tick(&self) {
        futures::join!(self.fetch_latest(), self.fetch_history());
    }

    pub async fn fetch_latest(&self) -> FetchOutcome {
        let generation = self.latest_gen.issue();
        let result = self.api.latest(&self.config.device_id).await;
        if !self
            .latest_gen
            .accept(generation, self.config.stale_responses)
        {
            debug!("[poller] discarding stale latest response #{}", generation);
            return FetchOutcome::Discarded;
        }
        match result {
            Ok(reading) => {
                self.apply_latest(&reading);
                FetchOutcome::Applied
            }
            Err(e) => {
                warn!("[poller] failed to fetch live data ({:?}): {}", e.kind(), e);
                self.port.set_connectivity(ConnectivityStatus::Offline);
                FetchOutcome::Failed
            }
        }
    }

    pub async fn fetch_history(&self) -> FetchOutcome {
        let generation = self.history_gen.issue();
        let result = self.api.history(&self.config.device_id).await;
        if !self
            .history_gen
            .accept(generation, self.config.stale_responses)
        {
            debug!("[poller] discarding stale history response #{}", generation);
            return FetchOutcome::Discarded;
        }
        match result {
            Ok(readings) => {
                let series = ChartSeries::from_readings(&readings);
                debug!("[poller] history: {} points", series.len());
                self.port.replace_chart_series(series);
                FetchOutcome::Applied
            }
            Err(e) => {
                warn!("[poller] failed to fetch history ({:?}): {}", e.kind(), e);
                FetchOutcome::Failed
            }
        }
    }

    fn apply_latest(&self, reading: &Reading) {
        self.port.set_connectivity(ConnectivityStatus::Online);
        let id = self.next_row_id.get();
        self.next_row_id.set(id + 1);
        let row = TableRow::from_reading(id, reading);
        let evicted = self.table.borrow_mut().push_newest(row.clone());
        if let Some(oldest) = evicted {
            debug!("[poller] dropping oldest row {}", oldest.id);
            self.port.evict_oldest_row();
        }
        self.port.append_row(row);
    }

    #[cfg(test)]
    pub fn table_rows(&self) -> Vec<TableRow> {
        self.table.borrow().rows().cloned().collect()
    }

    #[cfg(test)]
    pub fn port(&self) -> &R {
        &self.port
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }
}
