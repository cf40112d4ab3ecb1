use std::collections::BTreeMap;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Per-user key-value state that survives between visits.
pub trait CookieStore {
    fn get_all(&self) -> BTreeMap<String, String>;
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Cookie store backed by the request's cookie jar.
///
/// Values are base64 encoded so arbitrary text (JSON included) stays within
/// the cookie value alphabet. Cookies that were not written by this store are
/// returned as-is.
pub struct JarCookieStore {
    jar: CookieJar,
    max_age: time::Duration,
}

impl JarCookieStore {
    pub fn new(jar: CookieJar, max_age_days: i64) -> Self {
        Self {
            jar,
            max_age: time::Duration::days(max_age_days),
        }
    }

    /// Hands the jar back so the handler can emit its `Set-Cookie` headers.
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl CookieStore for JarCookieStore {
    fn get_all(&self) -> BTreeMap<String, String> {
        self.jar
            .iter()
            .map(|cookie| (cookie.name().to_string(), decode_value(cookie.value())))
            .collect()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|cookie| decode_value(cookie.value()))
    }

    fn set(&mut self, key: &str, value: &str) {
        let cookie = Cookie::build((key.to_string(), URL_SAFE_NO_PAD.encode(value)))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .max_age(self.max_age);

        self.jar = self.jar.clone().add(cookie);
    }
}

fn decode_value(raw: &str) -> String {
    URL_SAFE_NO_PAD
        .decode(raw)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_else(|| raw.to_string())
}

/// In-memory store for exercising persistence without HTTP.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryCookieStore {
    pub values: BTreeMap<String, String>,
}

#[cfg(test)]
impl CookieStore for MemoryCookieStore {
    fn get_all(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
