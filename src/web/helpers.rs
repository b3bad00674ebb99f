use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use playvault::models::{Role, Session};

/// Canonical session cookie set. The session lives in exactly these
/// cookies and nowhere else; logout must clear every one of them.
pub const SESSION_COOKIES: [&str; 5] = ["token", "username", "role", "userId", "gData"];

const SESSION_TTL_DAYS: i64 = 7;

/// Reads the viewer session from the auth cookies. Any missing or
/// unparsable piece means an anonymous viewer.
pub fn session_from_request(req: &HttpRequest) -> Option<Session> {
    let token = cookie_value(req, "token")?;
    let username = cookie_value(req, "username")?;
    let role = cookie_value(req, "role")
        .map(|r| Role::from_wire(&r))
        .unwrap_or(Role::User);
    let user_id = cookie_value(req, "userId").unwrap_or_default();
    let purchased = cookie_value(req, "gData")
        .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
        .unwrap_or_default();

    Some(Session {
        token,
        username,
        role,
        user_id,
        purchased,
    })
}

/// Cookies persisting a fresh session after signin.
pub fn session_cookies(session: &Session) -> Vec<Cookie<'static>> {
    let purchased =
        serde_json::to_string(&session.purchased).unwrap_or_else(|_| "[]".to_string());

    vec![
        session_cookie("token", session.token.clone()),
        session_cookie("username", session.username.clone()),
        session_cookie("role", session.role.as_wire().to_string()),
        session_cookie("userId", session.user_id.clone()),
        session_cookie("gData", purchased),
    ]
}

/// Removal cookies for logout: one expired cookie per session key.
pub fn removal_cookies() -> Vec<Cookie<'static>> {
    SESSION_COOKIES
        .iter()
        .map(|name| {
            let mut cookie = session_cookie(name.to_string(), String::new());
            cookie.make_removal();
            cookie
        })
        .collect()
}

fn session_cookie(
    name: impl Into<std::borrow::Cow<'static, str>>,
    value: String,
) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(actix_web::cookie::time::Duration::days(SESSION_TTL_DAYS))
        .finish()
}

fn cookie_value(req: &HttpRequest, name: &str) -> Option<String> {
    req.cookie(name)
        .map(|c| c.value().trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_with_cookies(t, Vec::new())
}

/// Renders a template, attaching cookies (used by signin/logout so the
/// notice page and the cookie mutation travel in one response).
pub fn render_with_cookies<T: Template>(
    t: T,
    cookies: Vec<Cookie<'static>>,
) -> HttpResponse {
    match t.render() {
        Ok(body) => {
            let mut builder = HttpResponse::Ok();
            for cookie in cookies {
                builder.cookie(cookie);
            }
            builder
                .content_type("text/html; charset=utf-8")
                .body(body)
        }
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

pub fn see_other_with_cookies(
    location: &str,
    cookies: Vec<Cookie<'static>>,
) -> HttpResponse {
    let mut builder = HttpResponse::SeeOther();
    for cookie in cookies {
        builder.cookie(cookie);
    }
    builder
        .insert_header(("Location", location.to_string()))
        .finish()
}

pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use playvault::models::{Role, Session};

    #[test]
    fn logout_clears_every_session_key() {
        let cookies = removal_cookies();
        let names: Vec<&str> = cookies.iter().map(|c| c.name()).collect();
        for key in SESSION_COOKIES {
            assert!(names.contains(&key), "missing removal cookie for {key}");
        }
        for cookie in &cookies {
            assert!(cookie.value().is_empty());
        }
    }

    #[test]
    fn session_cookies_cover_the_same_keys_logout_clears() {
        let session = Session {
            token: "t".into(),
            username: "bob".into(),
            role: Role::User,
            user_id: "u1".into(),
            purchased: vec!["g1".into()],
        };
        let names: Vec<String> = session_cookies(&session)
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names.len(), SESSION_COOKIES.len());
        for key in SESSION_COOKIES {
            assert!(names.iter().any(|n| n == key));
        }
    }

    #[test]
    fn purchased_ids_round_trip_through_the_gdata_cookie() {
        let session = Session {
            token: "t".into(),
            username: "bob".into(),
            role: Role::User,
            user_id: "u1".into(),
            purchased: vec!["a".into(), "b".into()],
        };
        let cookies = session_cookies(&session);
        let gdata = cookies.iter().find(|c| c.name() == "gData").unwrap();
        let decoded: Vec<String> = serde_json::from_str(gdata.value()).unwrap();
        assert_eq!(decoded, vec!["a".to_string(), "b".to_string()]);
    }
}
