//! CORS Fairing for Rocket
//!
//! Dashboards polling `/api` are served from other origins. Every response
//! allows all origins, and preflight `OPTIONS` requests are answered with
//! `204 No Content` instead of falling through to a 404.

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Method, Status};
use rocket::{Request, Response};

/// Methods browsers may use against the API
const ALLOWED_METHODS: &str = "GET, OPTIONS";

/// Seconds a browser may cache a preflight result
const PREFLIGHT_MAX_AGE_SECS: &str = "86400";

/// Adds permissive CORS headers and answers preflights
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", ALLOWED_METHODS));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));

        if request.method() == Method::Options && response.status() == Status::NotFound {
            response.set_header(Header::new(
                "Access-Control-Max-Age",
                PREFLIGHT_MAX_AGE_SECS,
            ));
            response.set_status(Status::NoContent);
            response.set_sized_body(0, std::io::Cursor::new(""));
        }
    }
}
