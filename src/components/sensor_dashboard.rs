use std::rc::Rc;

use dioxus::prelude::*;

use crate::api::HttpSensorApi;
use crate::components::{HistoryChart, ReadingsTable, SignalPort, StatusBadge};
use crate::config::DashboardConfig;
use crate::poller::{ChartSeries, ConnectivityStatus, DashboardPoller, TableRow};
use crate::scheduler::{interval_ticks, repeating};

/// Live table + history chart for one device. Owns its poll loop.
#[allow(non_snake_case)]
#[component]
pub fn SensorDashboard(
    config: DashboardConfig,
    #[props(default = true)] show_status: bool,
) -> Element {
    let rows = use_signal(Vec::<TableRow>::new);
    let status = use_signal(|| Option::<ConnectivityStatus>::None);
    let series = use_signal(ChartSeries::default);

    let device_id = config.device_id.clone();

    // Started once per mount; later prop changes do not restart it
    let task = use_hook(move || {
        let port = SignalPort {
            rows,
            status: show_status.then_some(status),
            series,
        };
        let api = HttpSensorApi::new(&config);
        let ticks = interval_ticks(config.poll_interval_ms);
        let poller = Rc::new(DashboardPoller::new(config, api, port));
        let (task, run) = repeating(poller, ticks);
        spawn(run);
        task
    });

    // teardown on unmount
    use_drop(move || task.stop());

    rsx! {
        div { class: "space-y-6",
            div { class: "rounded-2xl border border-gray-200 bg-white shadow p-6 space-y-4",
                div { class: "flex items-center justify-between",
                    h2 { class: "text-lg font-semibold text-gray-800", "Live readings" }
                    div { class: "flex items-center gap-3 text-sm text-gray-500",
                        span { "{device_id}" }
                        if show_status {
                            StatusBadge { status: status() }
                        }
                    }
                }
                ReadingsTable { rows: rows() }
            }
            div { class: "rounded-2xl border border-gray-200 bg-white shadow p-6 space-y-4",
                h2 { class: "text-lg font-semibold text-gray-800", "History" }
                HistoryChart { series: series() }
            }
        }
    }
}
