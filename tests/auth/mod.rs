//! Tests for the authentication flows.
//!
//! Verifies that login, logout and session refreshes keep the session store in step with the
//! backend, and that route guards decide against the resulting state.

mod logout;

use agora::{
    client::{Decision, Redirect, Route, SessionState},
    model::user::{MeDto, RegistrationStatus, Role},
};
use agora_test_utils::{
    constant::{TEST_EMAIL, TEST_PASSWORD},
    prelude::*,
};
