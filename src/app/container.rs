use std::sync::Arc;

use crate::adapters::{FFmpegAdapter, FsLocalAdapter};
use crate::app::{job_interactor::JobInteractor, scan_interactor::ScanInteractor};
use crate::config::Config;
use crate::ports::{FsPort, TrimPort};

pub trait AppContainer: Send + Sync {
    fn job_interactor(&self) -> Arc<JobInteractor>;
    fn scan_interactor(&self) -> Arc<ScanInteractor>;
}

pub struct DefaultAppContainer {
    job_interactor: Arc<JobInteractor>,
    scan_interactor: Arc<ScanInteractor>,
}

impl DefaultAppContainer {
    pub fn new(config: &Config) -> Self {
        let trim_port = Arc::new(FFmpegAdapter::from_config(config));
        Self::with_ports(trim_port, Arc::new(FsLocalAdapter::new()))
    }

    /// Container over caller-supplied ports
    pub fn with_ports(trim_port: Arc<dyn TrimPort>, fs_port: Arc<dyn FsPort>) -> Self {
        let job_interactor = Arc::new(JobInteractor::new(trim_port, Arc::clone(&fs_port)));
        let scan_interactor = Arc::new(ScanInteractor::new(fs_port));

        Self {
            job_interactor,
            scan_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn job_interactor(&self) -> Arc<JobInteractor> {
        Arc::clone(&self.job_interactor)
    }

    fn scan_interactor(&self) -> Arc<ScanInteractor> {
        Arc::clone(&self.scan_interactor)
    }
}
