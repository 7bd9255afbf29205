//! Mock station search for testing without a server.
//!
//! Serves canned results per query, records every query it receives, and can
//! hold a response back until a gate is opened so tests control completion
//! order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::Notify;

use super::StationSearch;
use super::error::StationError;
use super::types::Station;

#[derive(Debug, Clone)]
enum MockResponse {
    Stations(Vec<Station>),
    Failure { status: u16, message: String },
}

/// Station search that answers from an in-memory table.
///
/// Queries without a canned response return an empty list.
#[derive(Debug, Clone, Default)]
pub struct MockStationSearch {
    responses: HashMap<String, MockResponse>,
    gates: HashMap<String, Arc<Notify>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockStationSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` with `stations`.
    pub fn with_stations(mut self, query: impl Into<String>, stations: Vec<Station>) -> Self {
        self.responses
            .insert(query.into(), MockResponse::Stations(stations));
        self
    }

    /// Answer `query` with an API error.
    pub fn with_failure(
        mut self,
        query: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        self.responses.insert(
            query.into(),
            MockResponse::Failure {
                status,
                message: message.into(),
            },
        );
        self
    }

    /// Hold the answer to `query` until `gate` is notified.
    pub fn with_gate(mut self, query: impl Into<String>, gate: Arc<Notify>) -> Self {
        self.gates.insert(query.into(), gate);
        self
    }

    /// Every query received so far, in arrival order.
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StationSearch for MockStationSearch {
    async fn search(&self, query: &str) -> Result<Vec<Station>, StationError> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(query.to_string());

        if let Some(gate) = self.gates.get(query) {
            gate.notified().await;
        }

        match self.responses.get(query) {
            Some(MockResponse::Stations(stations)) => Ok(stations.clone()),
            Some(MockResponse::Failure { status, message }) => Err(StationError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(Vec::new()),
        }
    }
}
