use dioxus::prelude::*;

use crate::components::SensorDashboard;
use crate::config::DashboardConfig;

// Tailwind utility classes, compiled in the browser
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    // native shells provide an env-derived config; the browser uses defaults
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();

    rsx! {
        document::Title { "Sensor Dashboard" }
        document::Script { src: TAILWIND_CDN }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        // Page container
        div { class: "min-h-screen bg-gray-100 text-gray-900 p-6",
            div { class: "w-full max-w-5xl mx-auto space-y-6",
                h1 { class: "text-2xl font-semibold tracking-tight text-gray-800", "Sensor Dashboard" }
                SensorDashboard { config }
            }
        }
    }
}
