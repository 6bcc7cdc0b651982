pub mod leave_form;
