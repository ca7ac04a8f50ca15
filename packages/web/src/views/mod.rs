mod home;
pub use home::Home;

mod project_detail;
pub use project_detail::ProjectDetail;
