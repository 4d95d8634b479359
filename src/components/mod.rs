pub mod history_chart;
pub mod readings_table;
pub mod sensor_dashboard;
pub mod signal_port;
pub mod status_badge;

pub use history_chart::HistoryChart;
pub use readings_table::ReadingsTable;
pub use sensor_dashboard::SensorDashboard;
pub use signal_port::SignalPort;
pub use status_badge::StatusBadge;
