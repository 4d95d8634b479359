use crate::poller::chart::ChartSeries;
use crate::poller::table::TableRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityStatus {
    Online,
    Offline,
}

impl ConnectivityStatus {
    pub fn label(self) -> &'static str {
        match self {
            ConnectivityStatus::Online => "Online",
            ConnectivityStatus::Offline => "Offline",
        }
    }
}

/// Where the poller's decisions end up: a DOM, signals, or a test recorder.
pub trait RenderPort {
    /// Put `row` at the top of the table.
    fn append_row(&self, row: TableRow);
    /// Drop the bottom (oldest) row.
    fn evict_oldest_row(&self);
    fn set_connectivity(&self, status: ConnectivityStatus);
    /// Swap the chart contents and redraw.
    fn replace_chart_series(&self, series: ChartSeries);
}
