pub mod api;
pub mod home;

pub use home::DashboardPage;
