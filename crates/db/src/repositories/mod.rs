//! Repositories.

mod complaint;
mod student;
mod worker;

pub use complaint::ComplaintRepository;
pub use student::StudentRepository;
pub use worker::WorkerRepository;
