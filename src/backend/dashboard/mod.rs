//! Dashboard Module
//!
//! Role-specific dashboard endpoints, one per role, each behind the auth
//! middleware plus a role guard.

pub mod handlers;

pub use handlers::{society_dashboard, student_dashboard, teacher_dashboard};
