pub mod appointment_details;

pub use appointment_details::{render_appointment_details, AppointmentDetailsState};
