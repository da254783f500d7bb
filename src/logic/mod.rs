//! Scan orchestration: submit, poll, classify

pub mod classifier;
pub mod poller;
pub mod scan;

pub use poller::PollSettings;
pub use scan::ScanOrchestrator;
