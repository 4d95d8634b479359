use dioxus::prelude::*;

use crate::poller::ConnectivityStatus;

#[allow(non_snake_case)]
#[component]
pub fn StatusBadge(status: Option<ConnectivityStatus>) -> Element {
    let label = status
        .map(ConnectivityStatus::label)
        .unwrap_or("Connecting");
    let color = match status {
        Some(ConnectivityStatus::Online) => "bg-green-500",
        Some(ConnectivityStatus::Offline) => "bg-red-500",
        None => "bg-slate-500",
    };
    rsx! {
        span {
            id: "connection-status",
            class: "px-2 py-1 text-xs font-bold text-white rounded-full {color}",
            "{label}"
        }
    }
}
