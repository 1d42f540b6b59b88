pub mod appointments;
pub mod doctors;
pub mod notifications;
pub mod users;
