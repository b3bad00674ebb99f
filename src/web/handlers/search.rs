use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use serde_json::json;

use playvault::api::CatalogView;
use playvault::catalog::{PAGE_SIZE, Pager, requested_page, search_query};

use crate::web::forms::{LiveSearchQuery, SearchPageQuery};
use crate::web::helpers::{render, session_from_request};
use crate::web::state::AppState;
use crate::web::templates::{PagerView, SearchTemplate};

/// Result rows shown in the header dropdown before "See all".
const LIVE_SEARCH_LIMIT: u32 = 9;

#[get("/search")]
pub async fn search_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<SearchPageQuery>,
) -> impl Responder {
    let session = session_from_request(&req);

    // A blank query renders an empty results page without touching
    // the backend.
    let Some(q) = search_query(query.query.as_deref()) else {
        return render(SearchTemplate {
            session,
            query: String::new(),
            total: 0,
            items: Vec::new(),
            error: None,
            pager: PagerView::new(&Pager::new(1, 0), "/search", None),
        });
    };

    let page = requested_page(query.page.as_deref());
    let mut view =
        CatalogView::from_result(state.client.search(&q, page, PAGE_SIZE).await);
    let pager = Pager::new(page, view.total);
    // An out-of-range request comes back empty; re-run it at the
    // clamped page so the grid matches the pager label.
    if let Some(fixed) = pager.corrected_page(page) {
        view = CatalogView::from_result(
            state.client.search(&q, fixed, PAGE_SIZE).await,
        );
    }
    let pager_view = PagerView::new(&pager, "/search", Some(&q));

    render(SearchTemplate {
        session,
        query: q,
        total: view.total,
        items: view.items,
        error: view.error,
        pager: pager_view,
    })
}

/// JSON endpoint behind the header's as-you-type dropdown. The page
/// script debounces input 300ms before calling this.
#[get("/live-search")]
pub async fn live_search(
    state: web::Data<AppState>,
    query: web::Query<LiveSearchQuery>,
) -> impl Responder {
    // Whitespace-only input issues zero backend calls.
    let Some(q) = search_query(query.q.as_deref()) else {
        return HttpResponse::Ok().json(json!({
            "success": true,
            "apps": [],
            "total": 0,
        }));
    };

    match state.client.search(&q, 1, LIVE_SEARCH_LIMIT).await {
        Ok(page) => {
            let apps: Vec<_> = page
                .items
                .iter()
                .map(|item| {
                    json!({
                        "id": item.id,
                        "title": item.title,
                        "platform": item.platform,
                        "size": item.size,
                        "thumb": item.thumb(),
                        "url": item.detail_path(),
                    })
                })
                .collect();
            HttpResponse::Ok().json(json!({
                "success": true,
                "apps": apps,
                "total": page.total,
            }))
        }
        Err(e) => {
            log::warn!("live search failed: {e}");
            HttpResponse::Ok().json(json!({
                "success": false,
                "apps": [],
                "total": 0,
            }))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(search_page).service(live_search);
}
