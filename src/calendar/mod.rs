//! Appointment calendar core.
//!
//! Layout computation only: the time grid, appointment placement and the
//! view controller know nothing about how they are drawn. The egui layer in
//! `ui_egui` is one consumer.

pub mod controller;
pub mod grid;
pub mod placement;

pub use controller::{CalendarHost, ViewController, ViewState};
pub use grid::{hour_label, GridCell, HourRange, TimeGrid, TimeSlot};
pub use placement::{find_overlaps, place_appointments, Overlap, PlacedAppointment, Placement};
