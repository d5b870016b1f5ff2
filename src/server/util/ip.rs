//! Client IP address helpers.

use std::net::SocketAddr;

use axum::http::HeaderMap;

use crate::server::model::db::UserModel;

/// Resolves the client IP, preferring the first `X-Forwarded-For` entry set by a reverse proxy
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_default()
}

/// Every IP the user logged in from, last and current login fields may hold `", "`-separated lists
pub fn login_ips(user: &UserModel) -> Vec<String> {
    [&user.last_login_ip, &user.current_login_ip]
        .into_iter()
        .flatten()
        .flat_map(|ips| ips.split(", "))
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .collect()
}
