use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use askama::Template;

use playvault::models::Session;

use crate::web::helpers::{render, session_from_request};
use crate::web::templates::{
    ContactsTemplate, DmcaTemplate, DonateTemplate, FaqTemplate, NotFoundTemplate,
};

#[get("/faq")]
pub async fn faq(req: HttpRequest) -> impl Responder {
    render(FaqTemplate {
        session: session_from_request(&req),
    })
}

#[get("/donate")]
pub async fn donate(req: HttpRequest) -> impl Responder {
    render(DonateTemplate {
        session: session_from_request(&req),
    })
}

#[get("/contacts")]
pub async fn contacts(req: HttpRequest) -> impl Responder {
    render(ContactsTemplate {
        session: session_from_request(&req),
    })
}

#[get("/dmca")]
pub async fn dmca(req: HttpRequest) -> impl Responder {
    render(DmcaTemplate {
        session: session_from_request(&req),
    })
}

/// 404 with the site chrome; shared by the default service and any
/// handler that resolves to "no such thing".
pub fn not_found_page(session: Option<Session>) -> HttpResponse {
    match (NotFoundTemplate { session }).render() {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(_) => HttpResponse::NotFound().body("Not found"),
    }
}

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    not_found_page(session_from_request(&req))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(faq)
        .service(donate)
        .service(contacts)
        .service(dmca);
}
