//! kingdom-planner: budget-driven trip suggestions over an external
//! travel-data API.
//!
//! Splits a total trip budget into per-person, per-day category ceilings,
//! then matches them against the provider's hotel, restaurant, activity
//! and transport inventory — whose JSON field names drift between
//! endpoints, hence the candidate-list field resolver.

pub mod allocator;
pub mod config;
pub mod gateway;
pub mod matcher;
pub mod model;
pub mod normalizer;
pub mod planner;
pub mod resolver;
pub mod selector;

pub use config::{AppConfig, FieldCandidates, load_config};
pub use gateway::{HttpGateway, InventoryGateway};
pub use model::{
    BudgetAllocation, CanonicalItem, Category, ExternalPreview, GatewayError, PlanError,
    TripPlanResponse, TripRequest,
};
pub use planner::TripPlanner;
