pub mod employee_login;
pub mod hr_dashboard;
pub mod hr_login;
pub mod leave_request;
pub mod status;
pub mod vacation_history;

pub use employee_login::EmployeeLoginPage;
pub use hr_dashboard::HrDashboardPage;
pub use hr_login::HrLoginPage;
pub use leave_request::LeaveRequestPage;
pub use status::StatusPage;
