//! Custom widget components

mod banner;
mod connect_form;
mod header;
mod input;
mod node_details;
mod upload_form;

pub use banner::ErrorBanner;
pub use connect_form::ConnectPanel;
pub use header::MainHeader;
pub use input::input_line;
pub use node_details::NodeDetails;
pub use upload_form::UploadPanel;
