//! Server-side API backend.
//!
//! This module contains the complete backend implementation: API endpoints, business
//! logic, and data access. The backend uses Axum as the web framework and SeaORM for
//! database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Domain conversion between controllers and data layer
//! - **Data Layer** (`data/`) - Generic repository over the SeaORM entities
//! - **Model Layer** (`model/`) - Domain models, field parameters and the `Resource` trait
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database handle)
//! - **Startup** (`startup`) - Database connection lifecycle, CORS and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Middleware** applies CORS and request tracing
//! 2. **Router** dispatches to the controller for the record kind
//! 3. **Controller** extracts path and JSON body, validates DTO into field params
//! 4. **Service** calls the repository and converts entities to domain models
//! 5. **Data** issues a single store query
//! 6. **Controller** converts the domain model to a DTO and picks the status code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
