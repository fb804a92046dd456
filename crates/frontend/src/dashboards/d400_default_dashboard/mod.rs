//! Reservation approval dashboard: date-filtered, paginated approval table
//! with spreadsheet export.

pub mod api;
pub mod columns;
pub mod export;
pub mod state;
pub mod ui;
