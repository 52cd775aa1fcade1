//! Cookie-backed identity token store.
//!
//! The token cookie carries an explicit long lifetime so unrelated
//! navigation cannot evict it; it is only replaced by a fresh `id` request
//! parameter or removed when the API reports the token as unauthorized.
//! Writes and deletes become visible to the client on the response and to
//! this service on the next request — nothing is cached in-process.

use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Reads the persisted identity token, if any.
#[must_use]
pub fn resolve(jar: &CookieJar, cookie_name: &str) -> Option<String> {
    jar.get(cookie_name).map(|cookie| cookie.value().to_owned())
}

/// Persists `token` as the identity token, overwriting any existing value.
#[must_use]
pub fn persist(jar: CookieJar, cookie_name: &str, token: &str) -> CookieJar {
    jar.add(
        Cookie::build((cookie_name.to_owned(), token.to_owned()))
            .path("/")
            .permanent()
            .build(),
    )
}

/// Deletes the persisted identity token. Idempotent: removing an absent
/// token is not an error.
#[must_use]
pub fn invalidate(jar: CookieJar, cookie_name: &str) -> CookieJar {
    jar.remove(
        Cookie::build((cookie_name.to_owned(), String::new()))
            .path("/")
            .build(),
    )
}
