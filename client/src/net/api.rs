//! REST helpers for the position backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since the board only loads
//! and saves positions from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Both calls return `Result<_, String>`. Callers log the error and carry on;
//! nothing here retries or surfaces failures to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::PositionedComponent;

pub const GET_POSITIONS_PATH: &str = "/api/get-positions";
pub const UPDATE_POSITION_PATH: &str = "/api/update-position";

/// Base URL prepended to endpoint paths. Empty means same origin.
///
/// Set `DRAGBOARD_API_BASE` at build time (e.g. `http://localhost:5000`) to
/// point the bundle at a separately hosted backend.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("DRAGBOARD_API_BASE").unwrap_or("")
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// 2xx, the same range `fetch`'s `Response.ok` accepts.
#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "hydrate"))]
fn get_positions_failed_message(status: u16) -> String {
    format!("failed to fetch component positions: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn update_position_failed_message(status: u16) -> String {
    format!("failed to update position: {status}")
}

/// Fetch the initial widget list from `GET /api/get-positions`.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-OK status, or a body
/// that is not a JSON array of `{id, x, y}`.
pub async fn fetch_positions() -> Result<Vec<PositionedComponent>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(api_base(), GET_POSITIONS_PATH);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !is_success(resp.status()) {
            return Err(get_positions_failed_message(resp.status()));
        }
        resp.json::<Vec<PositionedComponent>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Send one position to `POST /api/update-position`. The response body is ignored.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn update_position(change: &PositionedComponent) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(api_base(), UPDATE_POSITION_PATH);
        let resp = gloo_net::http::Request::post(&url)
            .json(change)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !is_success(resp.status()) {
            return Err(update_position_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
