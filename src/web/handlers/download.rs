use actix_web::{HttpRequest, Responder, get, web};

use playvault::catalog::can_download;
use playvault::common::ApiError;

use crate::web::handlers::pages::not_found_page;
use crate::web::helpers::{render, session_from_request};
use crate::web::state::AppState;
use crate::web::templates::{DownloadTemplate, ErrorTemplate};

/// Single-item page. The platform and title segments are slugs for
/// the URL only; the id is what identifies the listing.
#[get("/download/{platform}/{title}/{id}")]
pub async fn download_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String, String)>,
) -> impl Responder {
    let (_platform, _title, id) = path.into_inner();
    let session = session_from_request(&req);

    let item = match state.client.app(&id).await {
        Ok(item) => item,
        Err(ApiError::Status { status: 404, .. }) => {
            return not_found_page(session);
        }
        Err(e) => {
            log::warn!("detail fetch failed for {id}: {e}");
            return render(ErrorTemplate {
                session,
                message: e.user_message(),
            });
        }
    };

    let unlocked = can_download(&item, session.as_ref());
    let requirements = flatten_requirements(item.system_requirements.as_ref());

    render(DownloadTemplate {
        session,
        item,
        unlocked,
        requirements,
    })
}

/// The backend stores `systemRequirements` as a free-form JSON object;
/// anything non-object renders as nothing.
fn flatten_requirements(value: Option<&serde_json::Value>) -> Vec<(String, String)> {
    let Some(serde_json::Value::Object(map)) = value else {
        return Vec::new();
    };
    map.iter()
        .map(|(k, v)| {
            let text = match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.clone(), text)
        })
        .filter(|(_, v)| !v.is_empty())
        .collect()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(download_page);
}
