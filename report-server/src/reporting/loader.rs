//! Reservation data loader
//!
//! Reads the configured JSON array of reservations. Nothing is cached: every
//! call goes back to the file, so edits to the dataset show up on the next request.

use std::path::{Path, PathBuf};

use shared::models::Reservation;

use super::error::ReportError;

#[derive(Debug, Clone)]
pub struct ReservationLoader {
    data_source: PathBuf,
}

impl ReservationLoader {
    pub fn new(data_source: impl Into<PathBuf>) -> Self {
        Self {
            data_source: data_source.into(),
        }
    }

    pub fn data_source(&self) -> &Path {
        &self.data_source
    }

    /// Load every reservation, in file order
    pub async fn load_all(&self) -> Result<Vec<Reservation>, ReportError> {
        let bytes = tokio::fs::read(&self.data_source).await.map_err(|source| {
            ReportError::DataSourceUnavailable {
                path: self.data_source.clone(),
                source,
            }
        })?;

        let reservations = parse_reservations(&bytes, &self.data_source)?;
        tracing::debug!(
            path = %self.data_source.display(),
            count = reservations.len(),
            "Loaded reservations"
        );
        Ok(reservations)
    }

    /// Whether the data source currently exists as a readable file
    pub async fn is_readable(&self) -> bool {
        tokio::fs::metadata(&self.data_source)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }
}

fn parse_reservations(bytes: &[u8], path: &Path) -> Result<Vec<Reservation>, ReportError> {
    serde_json::from_slice(bytes).map_err(|source| ReportError::DataSourceMalformed {
        path: path.to_path_buf(),
        source,
    })
}
