//! # Glow Booking Library
//!
//! Backend for the Glow Beauty Clinic booking form:
//! - `POST /api/book-appointment` validates a request and emails the clinic
//!   and the client
//! - Per-client fixed-window rate limiting on bookings
//! - Health, metrics and static file endpoints
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The sanitized booking and its validation rules
//! - **Application Layer**: Booking service and DTOs
//! - **Infrastructure Layer**: SMTP mailer, email templates, rate limit store, metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! glow_booking/
//! +-- config/         Configuration management
//! +-- domain/         Booking entity and validator
//! +-- application/    Booking service and DTOs
//! +-- infrastructure/ Mail, rate limit store, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Errors, sanitizing, field validation
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
