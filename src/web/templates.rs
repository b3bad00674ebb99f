use askama::Template;

use playvault::catalog::Pager;
use playvault::models::{ListingItem, Session};

use crate::web::forms::SignupErrors;

/// Presentation form of a [`Pager`]: numbers become ready-made hrefs so
/// the templates stay free of URL assembly.
#[derive(Debug, Clone)]
pub struct PagerView {
    pub page: u32,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_href: String,
    pub next_href: String,
    pub links: Vec<PageLink>,
}

#[derive(Debug, Clone)]
pub struct PageLink {
    pub number: u32,
    pub href: String,
    pub current: bool,
}

impl PagerView {
    /// `query` is the extra query pair carried through every page link
    /// (the search page keeps `query=<q>` alongside `page`).
    pub fn new(pager: &Pager, base_path: &str, query: Option<&str>) -> PagerView {
        let href = |page: u32| match query {
            Some(q) => format!(
                "{}?query={}&page={}",
                base_path,
                urlencoding::encode(q),
                page
            ),
            None => format!("{base_path}?page={page}"),
        };

        PagerView {
            page: pager.page,
            total_pages: pager.total_pages,
            has_prev: pager.has_prev(),
            has_next: pager.has_next(),
            prev_href: href(pager.prev()),
            next_href: href(pager.next()),
            links: pager
                .numbers()
                .into_iter()
                .map(|number| PageLink {
                    number,
                    href: href(number),
                    current: number == pager.page,
                })
                .collect(),
        }
    }
}

/// One shelf on the home page (eight items plus the category total).
pub struct HomeSection {
    pub title: &'static str,
    pub see_all: &'static str,
    pub total: u64,
    pub items: Vec<ListingItem>,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub session: Option<Session>,
    pub sections: Vec<HomeSection>,
}

#[derive(Template)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    pub session: Option<Session>,
    pub title: &'static str,
    pub total: u64,
    pub items: Vec<ListingItem>,
    pub error: Option<String>,
    pub pager: PagerView,
}

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub session: Option<Session>,
    pub query: String,
    pub total: u64,
    pub items: Vec<ListingItem>,
    pub error: Option<String>,
    pub pager: PagerView,
}

#[derive(Template)]
#[template(path = "download.html")]
pub struct DownloadTemplate {
    pub session: Option<Session>,
    pub item: ListingItem,
    pub unlocked: bool,
    /// Flattened `systemRequirements` object, already stringified.
    pub requirements: Vec<(String, String)>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub session: Option<Session>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupTemplate {
    pub session: Option<Session>,
    pub errors: SignupErrors,
    pub form_error: Option<String>,
    pub username: String,
    pub email: String,
}

#[derive(Template)]
#[template(path = "admin_new.html")]
pub struct AdminNewTemplate {
    pub session: Option<Session>,
    pub error: Option<String>,
    pub created: Option<String>,
}

#[derive(Template)]
#[template(path = "faq.html")]
pub struct FaqTemplate {
    pub session: Option<Session>,
}

#[derive(Template)]
#[template(path = "donate.html")]
pub struct DonateTemplate {
    pub session: Option<Session>,
}

#[derive(Template)]
#[template(path = "contacts.html")]
pub struct ContactsTemplate {
    pub session: Option<Session>,
}

#[derive(Template)]
#[template(path = "dmca.html")]
pub struct DmcaTemplate {
    pub session: Option<Session>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub session: Option<Session>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub session: Option<Session>,
    pub message: String,
}
