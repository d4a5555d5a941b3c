//! REST API implementation
//!
//! - types: Request/response type definitions
//! - extractors: Custom request extractors
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration
//! - tests: Unit tests for request/response shapes

mod extractors;
mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use extractors::JsonExtractor;
pub use router::{create_router, create_router_with_cors};
pub use types::{
    AppState, AstResponse, CombineRulesRequest, CreateRuleRequest, EvaluateRuleRequest,
    EvaluateRuleResponse, HealthResponse,
};
