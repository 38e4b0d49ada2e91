//! REST API endpoint tests

mod booking_tests;
mod rate_limit_tests;
mod routing_tests;
mod startup_tests;
