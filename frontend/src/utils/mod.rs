pub mod date;
pub mod dialog;
