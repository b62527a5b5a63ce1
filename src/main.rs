#[macro_use]
extern crate rocket;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::fs::{FileServer, Options};
use rocket::http::{ContentType, Header};
use rocket::response::content::RawHtml;
use rocket::{Build, Rocket};

mod boot;
mod cards;
mod content;
mod lightbox;
mod models;
mod render;
mod routes;
mod seo;
mod settings;
mod views;

mod tests;

use content::Registry;
use settings::SiteSettings;

/// Long-lived caching for images, revalidation for rendered pages.
pub struct CacheHeaders;

#[rocket::async_trait]
impl Fairing for CacheHeaders {
    fn info(&self) -> Info {
        Info { name: "Cache Headers", kind: Kind::Response }
    }

    async fn on_response<'r>(&self, req: &'r rocket::Request<'_>, res: &mut rocket::Response<'r>) {
        if req.uri().path().starts_with("/images/") {
            res.set_header(Header::new("Cache-Control", "public, max-age=604800"));
        } else if res.content_type() == Some(ContentType::HTML) {
            res.set_header(Header::new("Cache-Control", "no-cache"));
        }
    }
}

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

pub fn build_rocket(settings: SiteSettings, registry: Registry) -> Rocket<Build> {
    let assets = FileServer::new(&settings.asset_dir, Options::Missing | Options::NormalizeDirs)
        .rank(20);

    rocket::build()
        .attach(CacheHeaders)
        .mount("/images", assets)
        .mount("/", routes::public::routes())
        .manage(settings)
        .manage(registry)
        .register("/", catchers![not_found, server_error])
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let site_config: String = rocket::Config::figment()
        .extract_inner("site_config")
        .unwrap_or_else(|_| "Site.toml".to_string());

    let registry = Registry::builtin();
    // Boot check: load settings, validate content, verify asset directory
    let settings = boot::run(&site_config, &registry);

    eprintln!("Serving {} at {}", settings.site_name, settings.site_url);

    build_rocket(settings, registry)
}
