use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;

use playvault::models::{CategoryKey, ListingItem};

use crate::web::state::AppState;

/// Everything the backend will hand over in one call; listings are far
/// below this in practice.
const SITEMAP_FETCH_LIMIT: u32 = 10_000;

const STATIC_ROUTES: [&str; 7] = [
    "/",
    "/search",
    "/user/login",
    "/user/signup",
    "/faq",
    "/donate",
    "/dmca",
];

#[get("/sitemap.xml")]
pub async fn sitemap(state: web::Data<AppState>) -> impl Responder {
    // Listing URLs are best-effort; a backend failure still yields a
    // valid sitemap of the static routes.
    let items = match state.client.search("", 1, SITEMAP_FETCH_LIMIT).await {
        Ok(page) => page.items,
        Err(e) => {
            log::warn!("sitemap listing fetch failed: {e}");
            Vec::new()
        }
    };

    HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(build_sitemap(&state.site_base, &items))
}

#[get("/robots.txt")]
pub async fn robots(state: web::Data<AppState>) -> impl Responder {
    let body = format!(
        "User-agent: *\nAllow: /\nDisallow: /admin/\nDisallow: /user/\n\nSitemap: {}/sitemap.xml\n",
        state.site_base.trim_end_matches('/')
    );
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(body)
}

fn build_sitemap(site_base: &str, items: &[ListingItem]) -> String {
    let base = site_base.trim_end_matches('/');
    let today = Utc::now().format("%Y-%m-%d").to_string();

    let mut xml = String::with_capacity(1024 + items.len() * 200);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for route in STATIC_ROUTES {
        push_url(&mut xml, &format!("{base}{route}"), &today, "daily", "0.8");
    }
    for key in CategoryKey::ALL {
        push_url(
            &mut xml,
            &format!("{base}{}", key.page_path()),
            &today,
            "weekly",
            "0.8",
        );
    }
    for item in items {
        // Skip entries that cannot produce a stable URL.
        if item.id.is_empty() || item.title.is_empty() {
            continue;
        }
        let last_modified = item
            .updated_at
            .or(item.created_at)
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| today.clone());
        push_url(
            &mut xml,
            &format!("{base}{}", item.detail_path()),
            &last_modified,
            "monthly",
            "0.7",
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: &str, freq: &str, priority: &str) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(loc)));
    xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
    xml.push_str(&format!("    <changefreq>{freq}</changefreq>\n"));
    xml.push_str(&format!("    <priority>{priority}</priority>\n"));
    xml.push_str("  </url>\n");
}

fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(sitemap).service(robots);
}
