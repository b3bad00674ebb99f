use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use futures_util::TryStreamExt;

use playvault::models::Session;

use crate::web::helpers::{render, see_other, session_from_request};
use crate::web::state::AppState;
use crate::web::templates::AdminNewTemplate;

/// The role cookie only gates the UI; the backend rejects non-admin
/// tokens on the create endpoint itself.
fn require_admin(req: &HttpRequest) -> Result<Session, HttpResponse> {
    match session_from_request(req) {
        Some(session) if session.is_admin() => Ok(session),
        _ => Err(see_other("/user/login")),
    }
}

#[get("/admin/apps/new")]
pub async fn new_app_form(req: HttpRequest) -> impl Responder {
    let session = match require_admin(&req) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    render(AdminNewTemplate {
        session: Some(session),
        error: None,
        created: None,
    })
}

/// Streams the admin form through to the backend as-is: text fields
/// become text parts, uploads keep their filename and content type.
#[post("/admin/apps/new")]
pub async fn new_app_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    mut payload: Multipart,
) -> impl Responder {
    let session = match require_admin(&req) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let mut form = reqwest::multipart::Form::new();

    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return render(AdminNewTemplate {
                    session: Some(session),
                    error: Some(format!("Upload failed: {e}")),
                    created: None,
                });
            }
        };

        let disposition = field.content_disposition();
        let name = disposition.get_name().unwrap_or_default().to_string();
        let filename = disposition.get_filename().map(str::to_string);
        let mime = field.content_type().map(|m| m.to_string());

        let mut data: Vec<u8> = Vec::new();
        loop {
            match field.try_next().await {
                Ok(Some(chunk)) => data.extend_from_slice(&chunk),
                Ok(None) => break,
                Err(e) => {
                    return render(AdminNewTemplate {
                        session: Some(session),
                        error: Some(format!("Upload failed: {e}")),
                        created: None,
                    });
                }
            }
        }

        form = match filename {
            Some(filename) if !filename.is_empty() => {
                let mut part = reqwest::multipart::Part::bytes(data).file_name(filename);
                if let Some(mime) = mime {
                    part = match part.mime_str(&mime) {
                        Ok(part) => part,
                        Err(_) => {
                            return render(AdminNewTemplate {
                                session: Some(session),
                                error: Some("Unrecognized upload type".to_string()),
                                created: None,
                            });
                        }
                    };
                }
                form.part(name, part)
            }
            _ => {
                let text = String::from_utf8_lossy(&data).into_owned();
                form.text(name, text)
            }
        };
    }

    match state.client.create_app(form, &session.token).await {
        Ok(_) => render(AdminNewTemplate {
            session: Some(session),
            error: None,
            created: Some("App created successfully".to_string()),
        }),
        Err(e) => {
            log::warn!("admin create failed: {e}");
            render(AdminNewTemplate {
                session: Some(session),
                error: Some(e.user_message()),
                created: None,
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(new_app_form).service(new_app_submit);
}
