use crate::errors::AppError;
use crate::models::Dataset;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

/// Startup load: a missing or broken file leaves the service running with
/// no series rather than refusing to boot.
pub async fn load_data(path: &Path) -> Dataset {
    match read_dataset(path).await {
        Ok(dataset) => {
            info!(
                path = %path.display(),
                series = dataset.series.len(),
                "loaded dataset"
            );
            dataset
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no dataset file, starting empty");
            Dataset::default()
        }
        Err(err) => {
            error!("failed to load dataset: {err}");
            Dataset::default()
        }
    }
}

/// Reload path: any failure is reported to the caller.
pub async fn reload_data(path: &Path) -> Result<Dataset, AppError> {
    read_dataset(path).await.map_err(AppError::internal)
}

async fn read_dataset(path: &Path) -> Result<Dataset, std::io::Error> {
    let bytes = fs::read(path).await?;
    serde_json::from_slice(&bytes).map_err(std::io::Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("year_in_data_{}_{name}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let data = load_data(&temp_path("missing")).await;
        assert!(data.series.is_empty());
    }

    #[tokio::test]
    async fn parses_dates_and_defaults() {
        let path = temp_path("parse");
        fs::write(
            &path,
            r#"{"series":[{"name":"steps","records":[{"date":"2024-01-05","value":3}]}]}"#,
        )
        .await
        .unwrap();

        let data = reload_data(&path).await.unwrap();
        let series = data.find("steps").unwrap();
        assert_eq!(series.records[0].date.to_string(), "2024-01-05");
        assert_eq!(series.records[0].value, 3.0);
        assert!(series.records[0].category.is_none());
        assert!(series.range.is_none());
        fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn malformed_date_fails_reload_but_not_startup() {
        let path = temp_path("bad_date");
        fs::write(
            &path,
            r#"{"series":[{"name":"steps","records":[{"date":"05/01/2024","value":3}]}]}"#,
        )
        .await
        .unwrap();

        assert!(reload_data(&path).await.is_err());
        assert!(load_data(&path).await.series.is_empty());
        fs::remove_file(&path).await.unwrap();
    }
}
