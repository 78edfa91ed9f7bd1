//! Database entities.

pub mod complaint;
pub mod student;
pub mod worker;

pub use complaint::{ComplaintStatus, Entity as Complaint};
pub use student::Entity as Student;
pub use worker::Entity as Worker;
