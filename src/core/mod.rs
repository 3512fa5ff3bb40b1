pub mod activity;
pub mod calculator;
pub mod notifications;
pub mod performance;
pub mod projects;
pub mod session;
pub mod token;
pub mod tracker;
