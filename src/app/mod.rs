// Application layer - Use case interactors

pub mod container;
pub mod job_interactor;
pub mod scan_interactor;

// Re-export interactors
pub use job_interactor::{CheckReport, JobInteractor, RunReport};
pub use scan_interactor::{Recording, ScanInteractor};
