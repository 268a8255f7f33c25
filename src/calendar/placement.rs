//! Appointment placement onto a time grid.
//!
//! Maps every slot of a [`TimeGrid`] to the appointments occupying it.
//! Placement never resolves conflicts: when several appointments share a
//! slot they are all kept and flagged `compact` so the view can draw
//! abbreviated cards.

use chrono::{NaiveDate, NaiveDateTime};

use super::grid::{GridCell, TimeGrid, TimeSlot};
use crate::models::appointment::Appointment;

/// An appointment as it appears inside one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedAppointment<'a> {
    pub appointment: &'a Appointment,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// More than one appointment occupies this slot
    pub compact: bool,
    /// The appointment begins inside this slot (otherwise it continues
    /// from an earlier one)
    pub starts_here: bool,
}

/// Slot -> appointments mapping for one visible range.
#[derive(Debug, Clone)]
pub struct Placement<'a> {
    grid: &'a TimeGrid,
    cells: Vec<Vec<PlacedAppointment<'a>>>,
    skipped: usize,
}

impl<'a> Placement<'a> {
    pub fn grid(&self) -> &'a TimeGrid {
        self.grid
    }

    /// Appointments occupying the slot at `cell`, in start-then-id order.
    pub fn appointments_in(&self, cell: GridCell) -> &[PlacedAppointment<'a>] {
        self.grid
            .index_of(cell)
            .and_then(|index| self.cells.get(index))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Appointments occupying the slot for (date, hour). The hour is clipped
    /// into the visible range; a date that is not shown yields nothing.
    pub fn get(&self, date: NaiveDate, hour: u32) -> &[PlacedAppointment<'a>] {
        match self.grid.cell_for(date, hour) {
            Some(cell) => self.appointments_in(cell),
            None => &[],
        }
    }

    /// Every slot with its occupants, in grid order.
    pub fn iter<'s>(&'s self) -> impl Iterator<Item = (&'a TimeSlot, &'s [PlacedAppointment<'a>])> + 's {
        self.grid
            .slots()
            .iter()
            .zip(self.cells.iter().map(Vec::as_slice))
    }

    /// Ids of all appointments present anywhere in the mapping, ascending.
    pub fn placed_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self
            .cells
            .iter()
            .flatten()
            .map(|placed| placed.appointment.id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn contains(&self, id: i64) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|placed| placed.appointment.id == id)
    }

    /// Number of malformed records left out of the mapping.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Vec::is_empty)
    }
}

/// Valid appointments with their windows, sorted by start time then id.
fn valid_windows(appointments: &[Appointment]) -> (Vec<(&Appointment, NaiveDateTime, NaiveDateTime)>, usize) {
    let mut skipped = 0;
    let mut windows: Vec<_> = appointments
        .iter()
        .filter_map(|appointment| match appointment.window() {
            Ok((start, end)) => Some((appointment, start, end)),
            Err(err) => {
                log::warn!("Skipping malformed appointment: {}", err);
                skipped += 1;
                None
            }
        })
        .collect();
    windows.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.id.cmp(&b.0.id)));
    (windows, skipped)
}

/// Assign appointments to the slots of `grid`.
///
/// An appointment occupies every slot whose interval intersects
/// `[start, start + duration)`. Appointments starting outside the visible
/// window are left out of the mapping; the source slice is untouched.
pub fn place_appointments<'a>(appointments: &'a [Appointment], grid: &'a TimeGrid) -> Placement<'a> {
    let (windows, skipped) = valid_windows(appointments);
    let mut cells: Vec<Vec<PlacedAppointment<'a>>> = vec![Vec::new(); grid.slots().len()];

    let mut placed = 0;
    for (appointment, start, end) in windows {
        if !grid.contains(start) {
            continue;
        }
        placed += 1;

        // Occupancy stays in the start date's column
        for (slot, cell) in grid.slots().iter().zip(cells.iter_mut()) {
            if slot.date == start.date() && slot.overlaps(start, end) {
                cell.push(PlacedAppointment {
                    appointment,
                    start,
                    end,
                    compact: false,
                    starts_here: slot.contains(start),
                });
            }
        }
    }

    for cell in cells.iter_mut().filter(|cell| cell.len() > 1) {
        for occupant in cell.iter_mut() {
            occupant.compact = true;
        }
    }

    log::debug!(
        "Placed {} of {} appointments across {} slots ({} skipped)",
        placed,
        appointments.len(),
        grid.slots().len(),
        skipped
    );

    Placement {
        grid,
        cells,
        skipped,
    }
}

/// Two appointments of the same resource whose times intersect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    pub resource_id: String,
    pub first: i64,
    pub second: i64,
}

/// Detect double-bookings per resource. Detection only; nothing is moved.
///
/// Pairs are ordered by resource, then by the earlier appointment's start
/// and id. Malformed appointments are ignored.
pub fn find_overlaps(appointments: &[Appointment]) -> Vec<Overlap> {
    let (mut windows, _) = valid_windows(appointments);
    windows.sort_by(|a, b| {
        a.0.resource_id
            .cmp(&b.0.resource_id)
            .then(a.1.cmp(&b.1))
            .then(a.0.id.cmp(&b.0.id))
    });

    let mut overlaps = Vec::new();
    for (i, (first, _, first_end)) in windows.iter().enumerate() {
        for (second, second_start, _) in windows[i + 1..].iter() {
            if second.resource_id != first.resource_id || *second_start >= *first_end {
                break;
            }
            overlaps.push(Overlap {
                resource_id: first.resource_id.clone(),
                first: first.id,
                second: second.id,
            });
        }
    }
    overlaps
}

/// Keep only one staff member's appointments. `None` passes everything.
pub fn filter_by_resource(appointments: &[Appointment], resource: Option<&str>) -> Vec<Appointment> {
    match resource {
        None => appointments.to_vec(),
        Some(resource) => appointments
            .iter()
            .filter(|appointment| appointment.resource_id == resource)
            .cloned()
            .collect(),
    }
}
