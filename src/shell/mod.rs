// Composition root for the onboarding service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the counter store and the deferred runner.
// - Wire them into the use case handlers and expose the HTTP router.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
