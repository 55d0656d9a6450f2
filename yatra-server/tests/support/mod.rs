use std::sync::Arc;

use axum_test::TestServer;
use rand::{SeedableRng, rngs::StdRng};

use yatra_core::SafetyStore;
use yatra_server::{AppState, config::Config, push::ViewerRegistry};

// Code is used by test modules, but not in this scope
#[allow(unused)]
pub const TEST_TOKEN: &str = "integration-test-token";

#[allow(unused)]
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".into();
    config.server.port = 0;
    config.auth.api_token = TEST_TOKEN.into();
    config
}

/// Deterministically seeded state; tourist/alert sizing follows the
/// reference defaults.
#[allow(unused)]
pub fn build_test_state(config: Config) -> AppState {
    let store = Arc::new(SafetyStore::seed_with_rng(
        config.sim.clone(),
        StdRng::seed_from_u64(42),
    ));
    AppState::new(store, Arc::new(ViewerRegistry::new()), Arc::new(config))
}

#[allow(unused)]
pub fn build_test_app() -> (TestServer, AppState) {
    build_test_app_with_config(test_config())
}

#[allow(unused)]
pub fn build_test_app_with_config(config: Config) -> (TestServer, AppState) {
    let state = build_test_state(config);
    let server =
        TestServer::new(yatra_server::app(state.clone())).expect("failed to build test server");
    (server, state)
}
