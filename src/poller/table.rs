use std::collections::VecDeque;

use crate::shared::types::Reading;
use crate::utils::format::{format_celsius, format_clock, format_percent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Normal,
    Danger,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::Normal => "Normal",
            Badge::Danger => "Danger",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Badge::Normal => "px-2 py-1 text-xs text-white bg-green-500 rounded-full",
            Badge::Danger => "px-2 py-1 text-xs text-white bg-red-500 rounded-full",
        }
    }
}

/// A reading formatted for the live table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: u64,
    pub time: String,
    pub device_id: String,
    pub temperature: String,
    pub humidity: String,
    pub badge: Badge,
}

impl TableRow {
    pub fn from_reading(id: u64, reading: &Reading) -> Self {
        Self {
            id,
            time: format_clock(reading.timestamp),
            device_id: reading.device_id.clone(),
            temperature: format_celsius(reading.temperature),
            humidity: format_percent(reading.humidity),
            badge: if reading.is_anomaly {
                Badge::Danger
            } else {
                Badge::Normal
            },
        }
    }
}

/// Newest-first rows, never longer than `capacity`.
#[derive(Debug, Clone)]
pub struct DisplayTable {
    rows: VecDeque<TableRow>,
    capacity: usize,
}

impl DisplayTable {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            rows: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Inserts `row` at the top. When full, the oldest row is removed first and returned.
    pub fn push_newest(&mut self, row: TableRow) -> Option<TableRow> {
        let evicted = if self.rows.len() >= self.capacity {
            self.rows.pop_back()
        } else {
            None
        };
        self.rows.push_front(row);
        evicted
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter()
    }
}
