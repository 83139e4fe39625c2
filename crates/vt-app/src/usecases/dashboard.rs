//! Dashboard tab: history of submitted profiles.

use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use vt_core::diet::DashboardSummary;
use vt_core::ports::{ApiError, NutritionApiPort};

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("failed to load diet history: {0}")]
    Request(#[from] ApiError),
}

pub struct LoadDashboard {
    api: Arc<dyn NutritionApiPort>,
}

impl LoadDashboard {
    pub fn new(api: Arc<dyn NutritionApiPort>) -> Self {
        Self { api }
    }

    /// The service answers 404 when the user has no records yet; that is an
    /// empty dashboard, not an error.
    pub async fn execute(&self) -> Result<DashboardSummary, DashboardError> {
        let span = info_span!("usecase.load_dashboard.execute");

        async {
            match self.api.list_diet_records().await {
                Ok(records) => Ok(DashboardSummary::from_records(&records)),
                Err(err) if err.status() == Some(404) => {
                    debug!("No diet records yet");
                    Ok(DashboardSummary::default())
                }
                Err(err) => Err(err.into()),
            }
        }
        .instrument(span)
        .await
    }
}
