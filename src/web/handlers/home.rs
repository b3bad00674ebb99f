use actix_web::{HttpRequest, Responder, get, web};
use futures_util::join;

use playvault::api::CatalogView;
use playvault::models::CategoryKey;

use crate::web::helpers::{render, session_from_request};
use crate::web::state::AppState;
use crate::web::templates::{HomeSection, HomeTemplate};

/// Items shown per shelf on the home page.
const SHELF_SIZE: u32 = 8;

const SHELVES: [CategoryKey; 5] = [
    CategoryKey::Mac,
    CategoryKey::Smac,
    CategoryKey::Pc,
    CategoryKey::Android,
    CategoryKey::Ps2,
];

#[get("/")]
pub async fn home(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let [k0, k1, k2, k3, k4] = SHELVES;
    let (v0, v1, v2, v3, v4) = join!(
        state.client.category(k0, 1, SHELF_SIZE),
        state.client.category(k1, 1, SHELF_SIZE),
        state.client.category(k2, 1, SHELF_SIZE),
        state.client.category(k3, 1, SHELF_SIZE),
        state.client.category(k4, 1, SHELF_SIZE),
    );

    let sections = SHELVES
        .iter()
        .zip([v0, v1, v2, v3, v4])
        .map(|(key, result)| {
            let view = CatalogView::from_result(result);
            HomeSection {
                title: key.title(),
                see_all: key.page_path(),
                total: view.total,
                items: view.items,
            }
        })
        .collect();

    render(HomeTemplate {
        session: session_from_request(&req),
        sections,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
}
