// ABOUTME: REST client for the training backend's get and update endpoints
// ABOUTME: Maps HTTP failures onto AppError and tags each call with a request ID
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::TrainingStore;
use crate::config::SyncConfig;
use crate::constants::{headers, routes};
use crate::context::AuthContext;
use crate::utils::http_client;
use async_trait::async_trait;
use pierre_training_core::errors::{AppError, AppResult};
use pierre_training_core::models::{Training, UpdateTrainingRequest};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Instant;
use tracing::{debug, warn};
use uuid::Uuid;

/// Training store talking to `{base}/api/v1/trainings`
#[derive(Debug, Clone)]
pub struct RestTrainingStore {
    client: Client,
    api_root: String,
    auth: AuthContext,
}

impl RestTrainingStore {
    /// Create a store from configuration and an explicit auth context
    #[must_use]
    pub fn new(config: &SyncConfig, auth: AuthContext) -> Self {
        Self {
            client: http_client::client_for(&config.http_client),
            api_root: config.api_root(),
            auth,
        }
    }

    /// Create a store with a caller-provided client
    #[must_use]
    pub fn with_client(client: Client, api_root: impl Into<String>, auth: AuthContext) -> Self {
        Self {
            client,
            api_root: api_root.into(),
            auth,
        }
    }

    fn training_url(&self, training_id: i64) -> String {
        format!("{}{}/{training_id}", self.api_root, routes::TRAININGS)
    }

    fn prepare(&self, builder: RequestBuilder, request_id: Uuid) -> RequestBuilder {
        let builder = builder.header(headers::REQUEST_ID, request_id.to_string());
        match self.auth.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, request_id: Uuid) -> AppResult<Training> {
        let started = Instant::now();
        let response = self
            .prepare(builder, request_id)
            .send()
            .await
            .map_err(|e| {
                warn!(%request_id, error = %e, "Training backend unreachable");
                AppError::unavailable(format!("Could not reach the training service: {e}"))
                    .with_request_id(request_id)
                    .with_source(e)
            })?;

        debug!(
            %request_id,
            http.status = response.status().as_u16(),
            http.duration_ms = started.elapsed().as_millis() as u64,
            "Training backend responded"
        );
        Self::decode(response, request_id).await
    }

    async fn decode(response: Response, request_id: Uuid) -> AppResult<Training> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::from_http_status(status.as_u16(), &body).with_request_id(request_id));
        }

        let body = response.text().await.map_err(|e| {
            AppError::unavailable(format!("Failed to read training response: {e}"))
                .with_request_id(request_id)
                .with_source(e)
        })?;
        serde_json::from_str(&body).map_err(|e| AppError::from(e).with_request_id(request_id))
    }
}

#[async_trait]
impl TrainingStore for RestTrainingStore {
    fn name(&self) -> &'static str {
        "rest"
    }

    async fn get(&self, training_id: i64) -> AppResult<Training> {
        let request_id = Uuid::new_v4();
        self.send(self.client.get(self.training_url(training_id)), request_id)
            .await
    }

    async fn update(
        &self,
        training_id: i64,
        request: &UpdateTrainingRequest,
    ) -> AppResult<Training> {
        let request_id = Uuid::new_v4();
        self.send(
            self.client.put(self.training_url(training_id)).json(request),
            request_id,
        )
        .await
    }
}
