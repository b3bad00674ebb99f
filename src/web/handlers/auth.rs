use std::time::Duration;

use actix_web::{HttpRequest, Responder, get, post, web};

use playvault::common::ApiError;
use playvault::models::Session;

use crate::web::forms::{AuthQuery, LoginForm, SignupErrors, SignupForm};
use crate::web::helpers::{
    client_ip, removal_cookies, render, render_with_cookies, see_other,
    see_other_with_cookies, session_cookies, session_from_request,
};
use crate::web::state::AppState;
use crate::web::templates::{LoginTemplate, SignupTemplate};

#[get("/user/login")]
pub async fn login_form(
    req: HttpRequest,
    query: web::Query<AuthQuery>,
) -> impl Responder {
    let error = query.error.as_deref().map(|code| match code {
        "missing" => "Email and password are required".to_string(),
        "rate_limit" => "Too many login attempts. Please try again later.".to_string(),
        other => other.to_string(),
    });
    let notice = query
        .created
        .as_deref()
        .map(|_| "User created successfully! Please log in.".to_string());

    render(LoginTemplate {
        session: session_from_request(&req),
        error,
        notice,
    })
}

#[post("/user/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> impl Responder {
    if form.validate().is_err() {
        return see_other("/user/login?error=missing");
    }

    if !state.rate_limiter.check_rate_limit(
        &format!("login:{}", client_ip(&req)),
        5,                        // 5 attempts
        Duration::from_secs(300), // per 5 minutes
    ) {
        return see_other("/user/login?error=rate_limit");
    }

    let email = form.email.trim();
    match state.client.signin(email, &form.password).await {
        Ok(resp) => {
            let session = Session::from(resp);
            let cookies = session_cookies(&session);
            let notice =
                format!("Welcome back, {}! Redirecting...", session.username);
            // The login page shows the notice and meta-refreshes home.
            render_with_cookies(
                LoginTemplate {
                    session: Some(session),
                    error: None,
                    notice: Some(notice),
                },
                cookies,
            )
        }
        Err(e) => {
            log::info!("signin rejected for {email}: {e}");
            let message = match e {
                ApiError::Status { .. } => e.user_message(),
                _ => "Login failed. Please try again.".to_string(),
            };
            render(LoginTemplate {
                session: None,
                error: Some(message),
                notice: None,
            })
        }
    }
}

#[get("/user/signup")]
pub async fn signup_form(req: HttpRequest) -> impl Responder {
    render(SignupTemplate {
        session: session_from_request(&req),
        errors: SignupErrors::default(),
        form_error: None,
        username: String::new(),
        email: String::new(),
    })
}

#[post("/user/signup")]
pub async fn signup_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<SignupForm>,
) -> impl Responder {
    // Field validation blocks the submission before any backend call.
    if let Err(errors) = form.validate() {
        return render(SignupTemplate {
            session: session_from_request(&req),
            errors,
            form_error: None,
            username: form.username.clone(),
            email: form.email.clone(),
        });
    }

    if !state.rate_limiter.check_rate_limit(
        &format!("signup:{}", client_ip(&req)),
        3,                         // 3 attempts
        Duration::from_secs(3600), // per hour
    ) {
        return render(SignupTemplate {
            session: session_from_request(&req),
            errors: SignupErrors::default(),
            form_error: Some(
                "Too many signup attempts. Please try again later.".to_string(),
            ),
            username: form.username.clone(),
            email: form.email.clone(),
        });
    }

    let username = form.username.trim();
    let email = form.email.trim();
    match state.client.signup(username, email, &form.password).await {
        Ok(()) => see_other("/user/login?created=1"),
        Err(e) => {
            log::info!("signup rejected for {email}: {e}");
            render(SignupTemplate {
                session: session_from_request(&req),
                errors: SignupErrors::default(),
                form_error: Some(e.user_message()),
                username: form.username.clone(),
                email: form.email.clone(),
            })
        }
    }
}

/// Clears every session cookie. Supports plain link navigation, so the
/// header's "Logout" needs no script.
#[get("/user/logout")]
pub async fn logout() -> impl Responder {
    see_other_with_cookies("/", removal_cookies())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(signup_form)
        .service(signup_submit)
        .service(logout);
}
