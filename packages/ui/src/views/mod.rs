mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod project_detail;
pub use project_detail::{ProjectDetailView, ProjectNotFound};
