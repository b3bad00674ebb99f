use actix_web::{HttpRequest, Responder, get, web};

use playvault::api::CatalogView;
use playvault::catalog::{PAGE_SIZE, Pager, requested_page};
use playvault::models::CategoryKey;

use crate::web::forms::PageQuery;
use crate::web::handlers::pages::not_found_page;
use crate::web::helpers::{render, session_from_request};
use crate::web::state::AppState;
use crate::web::templates::{CategoryTemplate, PagerView};

/// One handler serves every category listing; the URL pair picks the
/// backend key.
#[get("/category/{platform}/{section}")]
pub async fn category_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let (platform, section) = path.into_inner();
    let session = session_from_request(&req);

    let Some(key) = CategoryKey::from_path(&platform, &section) else {
        return not_found_page(session);
    };

    let page = requested_page(query.page.as_deref());
    let mut view = CatalogView::from_result(
        state.client.category(key, page, PAGE_SIZE).await,
    );
    let pager = Pager::new(page, view.total);
    // An out-of-range request comes back empty; re-run it at the
    // clamped page so the grid matches the pager label.
    if let Some(fixed) = pager.corrected_page(page) {
        view = CatalogView::from_result(
            state.client.category(key, fixed, PAGE_SIZE).await,
        );
    }

    render(CategoryTemplate {
        session,
        title: key.title(),
        total: view.total,
        items: view.items,
        error: view.error,
        pager: PagerView::new(&pager, key.page_path(), None),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(category_page);
}
