use crate::models::Dataset;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<RwLock<Dataset>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: Dataset) -> Self {
        Self {
            data_path,
            data: Arc::new(RwLock::new(data)),
        }
    }
}
