//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext holding an in-memory app state and router
//! - Helper functions for creating races and players

#![allow(dead_code)]

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;
use serde_json::Value;
use uuid::Uuid;

use typing_race_backend::config::ServerConfig;
use typing_race_backend::{build_router, AppState};

/// Test context containing app state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a new test context with default configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a new test context with the given configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let state = AppState::new(config);
        let app = build_router(state.clone());
        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }

    /// Open a race through the API and return its id.
    pub async fn create_race(server: &TestServer, prompt: &str) -> Uuid {
        let response = server
            .post("/api/races")
            .json(&fixtures::create_race_request(prompt))
            .await;
        let body: Value = response.json();
        body["id"].as_str().unwrap().parse().unwrap()
    }
}
