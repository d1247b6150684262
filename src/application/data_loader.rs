// Data loader - fetches and decodes the datasets a page needs
use crate::application::dataset_source::{DatasetSource, LoadError};
use crate::domain::equipment::EquipmentStatus;
use crate::domain::maintenance::MaintenanceSchedule;
use crate::domain::page::Dataset;
use crate::domain::production::ProductionStats;
use crate::infrastructure::config::DataPaths;
use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct DataLoader {
    source: Arc<dyn DatasetSource>,
    paths: DataPaths,
}

impl DataLoader {
    pub fn new(source: Arc<dyn DatasetSource>, paths: DataPaths) -> Self {
        Self { source, paths }
    }

    /// Fetch `path` and decode it into `T`.
    pub async fn fetch_dataset<T: DeserializeOwned>(&self, path: &str) -> Result<T, LoadError> {
        let value = self.source.fetch_json(path).await?;
        self.decode(path, value)
    }

    /// Fetch every path concurrently. Resolves only if all of them succeed;
    /// the first failure is returned and the other requests are dropped.
    pub async fn fetch_all(&self, paths: &[&str]) -> Result<Vec<Value>, LoadError> {
        try_join_all(paths.iter().map(|path| self.source.fetch_json(path))).await
    }

    pub async fn load_production(&self) -> Result<ProductionStats, LoadError> {
        self.fetch_dataset(self.paths.path(Dataset::ProductionStats)).await
    }

    pub async fn load_equipment(&self) -> Result<EquipmentStatus, LoadError> {
        self.fetch_dataset(self.paths.path(Dataset::EquipmentStatus)).await
    }

    pub async fn load_maintenance(&self) -> Result<MaintenanceSchedule, LoadError> {
        self.fetch_dataset(self.paths.path(Dataset::Maintenance)).await
    }

    /// The dashboard's all-or-nothing join over the three datasets.
    pub async fn load_overview(
        &self,
    ) -> Result<(ProductionStats, EquipmentStatus, MaintenanceSchedule), LoadError> {
        let production_path = self.paths.path(Dataset::ProductionStats);
        let equipment_path = self.paths.path(Dataset::EquipmentStatus);
        let maintenance_path = self.paths.path(Dataset::Maintenance);

        let values = self
            .fetch_all(&[production_path, equipment_path, maintenance_path])
            .await?;
        let [production, equipment, maintenance]: [Value; 3] =
            values.try_into().map_err(|_| LoadError::Parse {
                url: self.source.location(production_path),
                cause: "expected three datasets".to_string(),
            })?;

        Ok((
            self.decode(production_path, production)?,
            self.decode(equipment_path, equipment)?,
            self.decode(maintenance_path, maintenance)?,
        ))
    }

    fn decode<T: DeserializeOwned>(&self, path: &str, value: Value) -> Result<T, LoadError> {
        serde_json::from_value(value).map_err(|e| LoadError::Parse {
            url: self.source.location(path),
            cause: e.to_string(),
        })
    }
}
