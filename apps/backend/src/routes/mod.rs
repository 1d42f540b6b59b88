use actix_web::web;

use crate::middleware::JwtExtract;

pub mod appointments;
pub mod auth;
pub mod doctors;
pub mod health;
pub mod notifications;

/// Configure application routes.
///
/// Public scopes (`/health`, `/api/auth`) are reachable without a token;
/// everything else sits behind the `JwtExtract` access gate.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes));

    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    cfg.service(
        web::scope("/api/doctors")
            .wrap(JwtExtract)
            .configure(doctors::configure_routes),
    );

    cfg.service(
        web::scope("/api/appointments")
            .wrap(JwtExtract)
            .configure(appointments::configure_routes),
    );

    cfg.service(
        web::scope("/api/notifications")
            .wrap(JwtExtract)
            .configure(notifications::configure_routes),
    );
}
