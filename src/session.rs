use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Cookie that carries the session identifier.
pub const SESSION_KEY: &str = "userId";
pub const LOGIN_ROUTE: &str = "/login";

/// The signed-in user's identifier. Extracting it on a route makes the route protected:
/// requests without one are redirected to the login page before the handler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn from_jar(jar: &CookieJar) -> Option<Self> {
        let value = jar.get(SESSION_KEY)?.value().trim();
        if value.is_empty() {
            return None;
        }
        Some(Self {
            user_id: value.to_string(),
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Session::from_jar(&jar).ok_or_else(|| Redirect::to(LOGIN_ROUTE))
    }
}

pub fn start(jar: CookieJar, user_id: String) -> CookieJar {
    let cookie = Cookie::build((SESSION_KEY, user_id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    jar.add(cookie)
}

pub fn end(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_KEY).path("/"))
}
