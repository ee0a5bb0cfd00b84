//! Weather journal service: the fetch, build, store pipeline behind the API.

use crate::{
    error::WeatherError,
    models::{CreateWeatherRequest, WeatherRecord},
    services::{
        metrics::AppMetrics, record_builder::build_record, store::WeatherStore,
        weatherstack::WeatherstackClient,
    },
};
use chrono::{TimeZone, Utc};
use std::{sync::Arc, time::Instant};

/// Identifier of the demo record inserted by [`WeatherService::seed_sample_record`].
pub const SAMPLE_RECORD_ID: &str = "sample-weather-123";

/// Creates and reads weather records
///
/// Holds the only shared mutable state in the service (the store). Clones
/// share the store, the HTTP connection pool, and the metrics.
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherstackClient,
    store: WeatherStore,
    metrics: Option<AppMetrics>,
    retain_raw_response: bool,
}

impl WeatherService {
    pub fn new(client: WeatherstackClient, store: WeatherStore) -> Self {
        Self {
            client,
            store,
            metrics: None,
            retain_raw_response: true,
        }
    }

    pub fn with_metrics(mut self, metrics: AppMetrics) -> Self {
        metrics.set_records_stored(self.store.len());
        self.metrics = Some(metrics);
        self
    }

    /// Whether stored records keep the unmodified provider body
    pub fn with_raw_response(mut self, retain: bool) -> Self {
        self.retain_raw_response = retain;
        self
    }

    /// Fetch conditions for the request's location, store the merged record,
    /// and return its identifier.
    ///
    /// Nothing is stored unless the provider call succeeds. The store lock is
    /// only taken after the provider has answered.
    pub async fn create(&self, request: CreateWeatherRequest) -> Result<String, WeatherError> {
        let start = Instant::now();
        let result = self.client.current(&request.location).await;
        if let Some(metrics) = &self.metrics {
            let outcome = match &result {
                Ok(_) => "success",
                Err(e) => e.upstream_outcome(),
            };
            metrics.record_upstream(outcome, start.elapsed());
        }
        let upstream = result?;

        let mut record = build_record(&request, &upstream);
        if self.retain_raw_response {
            record.raw_api_response = Some(upstream);
        }

        let id = record.id.clone();
        tracing::info!(
            id = %id,
            location = %record.location,
            temperature = record.temperature,
            description = %record.weather_description,
            "Stored weather record"
        );
        self.insert(record);

        Ok(id)
    }

    pub fn get(&self, id: &str) -> Result<Arc<WeatherRecord>, WeatherError> {
        self.store.get(id)
    }

    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    /// Insert a fixed demo record so the read endpoint can be tried without
    /// a provider key. Returns its identifier.
    pub fn seed_sample_record(&self) -> &'static str {
        let created_at = Utc
            .with_ymd_and_hms(2024, 12, 25, 10, 30, 0)
            .single()
            .unwrap_or_else(Utc::now);

        self.insert(WeatherRecord {
            id: SAMPLE_RECORD_ID.to_string(),
            date: "2024-12-25".to_string(),
            location: "New York, United States".to_string(),
            notes: "Sample weather data for testing".to_string(),
            temperature: 2.0,
            weather_description: "Light Snow".to_string(),
            humidity: 87,
            wind_speed: 15.0,
            wind_direction: "NNW".to_string(),
            pressure: 1015.0,
            visibility: 8.0,
            uv_index: 1,
            feels_like: -2.0,
            created_at,
            raw_api_response: None,
        });

        SAMPLE_RECORD_ID
    }

    fn insert(&self, record: WeatherRecord) {
        self.store.put(record);
        if let Some(metrics) = &self.metrics {
            metrics.set_records_stored(self.store.len());
        }
    }
}
