//! Scripted API and recording port for driving the poller without a network or UI.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::api::SensorApi;
use crate::error::FetchError;
use crate::poller::chart::ChartSeries;
use crate::poller::render::{ConnectivityStatus, RenderPort};
use crate::poller::table::TableRow;
use crate::shared::types::Reading;

type Pending<T> = oneshot::Receiver<Result<T, FetchError>>;

#[derive(Default)]
pub struct ScriptedApi {
    latest: RefCell<VecDeque<Pending<Reading>>>,
    history: RefCell<VecDeque<Pending<Vec<Reading>>>>,
    pub calls: RefCell<Vec<(&'static str, String)>>,
}

impl ScriptedApi {
    pub fn push_latest(&self, result: Result<Reading, FetchError>) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        self.latest.borrow_mut().push_back(rx);
    }

    pub fn push_history(&self, result: Result<Vec<Reading>, FetchError>) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        self.history.borrow_mut().push_back(rx);
    }

    /// Next latest request stays pending until the returned sender fires.
    pub fn gate_latest(&self) -> oneshot::Sender<Result<Reading, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.latest.borrow_mut().push_back(rx);
        tx
    }

    pub fn gate_history(&self) -> oneshot::Sender<Result<Vec<Reading>, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.history.borrow_mut().push_back(rx);
        tx
    }

    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls.borrow().iter().map(|(name, _)| *name).collect()
    }
}

#[async_trait(?Send)]
impl SensorApi for ScriptedApi {
    async fn latest(&self, device_id: &str) -> Result<Reading, FetchError> {
        self.calls
            .borrow_mut()
            .push(("latest", device_id.to_string()));
        let rx = self
            .latest
            .borrow_mut()
            .pop_front()
            .expect("no scripted latest response");
        rx.await.expect("latest gate dropped")
    }

    async fn history(&self, device_id: &str) -> Result<Vec<Reading>, FetchError> {
        self.calls
            .borrow_mut()
            .push(("history", device_id.to_string()));
        let rx = self
            .history
            .borrow_mut()
            .pop_front()
            .expect("no scripted history response");
        rx.await.expect("history gate dropped")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PortCall {
    Append(u64),
    Evict,
    Connectivity(ConnectivityStatus),
    Chart(usize),
}

/// Mirrors what a view would show and logs every call in order.
#[derive(Default)]
pub struct RecordingPort {
    calls: RefCell<Vec<PortCall>>,
    rows: RefCell<Vec<TableRow>>,
    status: Cell<Option<ConnectivityStatus>>,
    chart: RefCell<ChartSeries>,
}

impl RecordingPort {
    pub fn calls(&self) -> Vec<PortCall> {
        self.calls.borrow().clone()
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.rows.borrow().clone()
    }

    pub fn row_ids(&self) -> Vec<u64> {
        self.rows.borrow().iter().map(|r| r.id).collect()
    }

    /// `None` until the first latest fetch has finished.
    pub fn status(&self) -> Option<ConnectivityStatus> {
        self.status.get()
    }

    pub fn chart(&self) -> ChartSeries {
        self.chart.borrow().clone()
    }
}

impl RenderPort for RecordingPort {
    fn append_row(&self, row: TableRow) {
        self.calls.borrow_mut().push(PortCall::Append(row.id));
        self.rows.borrow_mut().insert(0, row);
    }

    fn evict_oldest_row(&self) {
        self.calls.borrow_mut().push(PortCall::Evict);
        self.rows.borrow_mut().pop();
    }

    fn set_connectivity(&self, status: ConnectivityStatus) {
        self.calls.borrow_mut().push(PortCall::Connectivity(status));
        self.status.set(Some(status));
    }

    fn replace_chart_series(&self, series: ChartSeries) {
        self.calls.borrow_mut().push(PortCall::Chart(series.len()));
        *self.chart.borrow_mut() = series;
    }
}

pub fn reading(timestamp: i64, temperature: f64, humidity: f64, is_anomaly: bool) -> Reading {
    Reading {
        timestamp,
        device_id: "sensor_002".into(),
        temperature,
        humidity,
        is_anomaly,
    }
}

pub fn history(n: usize) -> Vec<Reading> {
    (0..n)
        .map(|i| {
            reading(
                1_718_000_000 + i as i64 * 60,
                20.0 + i as f64,
                50.0 - i as f64,
                false,
            )
        })
        .collect()
}

pub fn app_error() -> FetchError {
    FetchError::Application {
        status: "error".into(),
        message: "No data found".into(),
    }
}

pub fn http_error(status: u16) -> FetchError {
    FetchError::HttpStatus {
        url: "http://127.0.0.1:8000/api/v1/latest_data".into(),
        status,
        message: None,
    }
}
