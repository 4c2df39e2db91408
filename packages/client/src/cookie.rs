//! Per-host cookie storage plugged into the HTTP client.
//!
//! Each response that carries `Set-Cookie` headers replaces the whole cookie
//! list of its host. Requests send back every cookie stored for their host.

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use ::cookie::Cookie as SetCookie;
use reqwest::{Url, cookie::CookieStore, header::HeaderValue};

/// A single `name=value` cookie record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    /// Parse the `name=value` pair of a `Set-Cookie` header.
    ///
    /// Attributes after the first `;` (path, expiry, flags) are ignored.
    pub fn parse(set_cookie: &str) -> Option<Self> {
        let parsed = SetCookie::parse(set_cookie).ok()?;
        Some(Self {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
        })
    }
}

/// Cookie jar keyed by host name
#[derive(Debug, Default)]
pub struct HostCookieJar {
    store: RwLock<HashMap<String, Vec<Cookie>>>,
}

impl HostCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cookies stored for `host`. An empty list is ignored.
    pub fn save(&self, host: &str, cookies: Vec<Cookie>) {
        if cookies.is_empty() {
            return;
        }
        tracing::debug!("Storing {} cookie(s) for {}", cookies.len(), host);
        self.store
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(host.to_string(), cookies);
    }

    /// Cookies stored for `host`, in the order the server sent them
    pub fn load(&self, host: &str) -> Vec<Cookie> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(host)
            .cloned()
            .unwrap_or_default()
    }
}

impl CookieStore for HostCookieJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        let Some(host) = url.host_str() else {
            return;
        };
        let cookies = cookie_headers
            .filter_map(|value| value.to_str().ok())
            .filter_map(Cookie::parse)
            .collect();
        self.save(host, cookies);
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        let cookies = self.load(url.host_str()?);
        if cookies.is_empty() {
            return None;
        }
        let header = cookies
            .iter()
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect::<Vec<_>>()
            .join("; ");
        HeaderValue::from_str(&header).ok()
    }
}
