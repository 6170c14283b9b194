//! Course Intake Backend
//!
//! Accepts lead-registration and course-enrollment form submissions,
//! validates them, and persists them: registrations to a process-lifetime
//! in-memory store, enrollments to a PostgreSQL table behind a bounded
//! connection pool.

pub mod api;
pub mod config;
pub mod error;
pub mod intake;
pub mod schema;
pub mod store;
