//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built by hand, verifying response
//! status, envelope shape and error mapping for every endpoint.

mod auth;
mod people;
mod user;
mod vehicle;

use holocron_test_utils::prelude::*;

use crate::{util::body_json, TestContextExt};
