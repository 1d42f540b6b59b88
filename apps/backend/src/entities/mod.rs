pub mod appointments;
pub mod doctors;
pub mod notifications;
pub mod user_credentials;
pub mod users;

pub use appointments::Entity as Appointments;
pub use appointments::Model as Appointment;
pub use doctors::Entity as Doctors;
pub use doctors::Model as Doctor;
pub use notifications::Entity as Notifications;
pub use notifications::Model as Notification;
pub use user_credentials::Entity as UserCredentials;
pub use user_credentials::Model as UserCredential;
pub use users::Entity as Users;
pub use users::Model as User;
