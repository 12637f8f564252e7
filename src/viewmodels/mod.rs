pub mod header_viewmodel;
pub mod header_controller;

pub use header_viewmodel::HeaderView;
pub use header_controller::HeaderAuthController;
