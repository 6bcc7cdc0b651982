pub mod active_staff;
pub mod employee_history;
pub mod on_leave;
pub mod pending_requests;
