pub mod action;
pub mod attendance_record;
pub mod employee;
pub mod notification;
pub mod project;
pub mod state;
