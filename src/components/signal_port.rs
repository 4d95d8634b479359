use dioxus::prelude::*;

use crate::poller::{ChartSeries, ConnectivityStatus, RenderPort, TableRow};

/// `RenderPort` backed by component signals. Without a status signal the
/// connectivity updates are dropped.
#[derive(Clone, Copy)]
pub struct SignalPort {
    pub rows: Signal<Vec<TableRow>>,
    pub status: Option<Signal<Option<ConnectivityStatus>>>,
    pub series: Signal<ChartSeries>,
}

impl RenderPort for SignalPort {
    fn append_row(&self, row: TableRow) {
        let mut rows = self.rows;
        rows.write().insert(0, row);
    }

    fn evict_oldest_row(&self) {
        let mut rows = self.rows;
        rows.write().pop();
    }

    fn set_connectivity(&self, status: ConnectivityStatus) {
        if let Some(mut badge) = self.status {
            badge.set(Some(status));
        }
    }

    fn replace_chart_series(&self, series: ChartSeries) {
        let mut chart = self.series;
        chart.set(series);
    }
}
