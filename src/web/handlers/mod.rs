pub mod admin;
pub mod auth;
pub mod catalog;
pub mod download;
pub mod home;
pub mod pages;
pub mod search;
pub mod sitemap;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    home::configure(cfg);
    catalog::configure(cfg);
    search::configure(cfg);
    download::configure(cfg);
    auth::configure(cfg);
    admin::configure(cfg);
    pages::configure(cfg);
    sitemap::configure(cfg);
}
