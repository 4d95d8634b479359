use dioxus::prelude::*;

use crate::poller::TableRow;
use crate::scheduler::sleep_ms;

const FLASH_MS: u32 = 500;

#[allow(non_snake_case)]
#[component]
pub fn ReadingsTable(rows: Vec<TableRow>) -> Element {
    rsx! {
        div { class: "overflow-x-auto",
            table { class: "min-w-full text-sm text-left text-slate-600",
                thead { class: "text-xs uppercase bg-gray-50 text-slate-500",
                    tr {
                        th { class: "py-3 px-4", "Time" }
                        th { class: "py-3 px-4", "Device" }
                        th { class: "py-3 px-4", "Temperature" }
                        th { class: "py-3 px-4", "Humidity" }
                        th { class: "py-3 px-4", "Status" }
                    }
                }
                tbody { id: "sensor-table-body",
                    if rows.is_empty() {
                        tr {
                            td { class: "py-6 px-4 text-center text-slate-400", colspan: "5", "Waiting for data..." }
                        }
                    }
                    for row in rows.iter() {
                        ReadingRow { key: "{row.id}", row: row.clone() }
                    }
                }
            }
        }
    }
}

/// Flashes once when mounted; keyed rows keep their state as newer rows arrive.
#[allow(non_snake_case)]
#[component]
fn ReadingRow(row: TableRow) -> Element {
    let mut flash = use_signal(|| true);
    use_hook(move || {
        spawn(async move {
            sleep_ms(FLASH_MS).await;
            flash.set(false);
        });
    });
    let highlight = if flash() { "bg-blue-50" } else { "" };

    rsx! {
        tr { class: "border-b hover:bg-gray-50 transition-colors {highlight}",
            td { class: "py-3 px-4", "{row.time}" }
            td { class: "py-3 px-4 font-medium text-gray-900", "{row.device_id}" }
            td { class: "py-3 px-4 text-blue-600 font-bold", "{row.temperature}" }
            td { class: "py-3 px-4 text-green-600 font-bold", "{row.humidity}" }
            td { class: "py-3 px-4",
                span { class: row.badge.class(), "{row.badge.label()}" }
            }
        }
    }
}
