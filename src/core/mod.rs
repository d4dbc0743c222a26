pub mod session;
pub mod stats;
pub mod viewer;

pub use session::Session;
pub use viewer::{PAGE_SIZE, RawDataViewer, ViewerOutcome};
