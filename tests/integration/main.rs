//! HTTP-level integration tests against the in-memory backend.

mod helpers;

mod auth_test;
mod booking_test;
mod destination_test;
mod review_test;
