use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;
use tasky_carousel::CarouselSettings;
use time::OffsetDateTime;

use crate::config::SiteConfig;
use crate::content::{FOOTER_SOCIALS, SocialLink};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Values every page layout needs: contact details, footer year, the
/// current path for navigation and the carousel timing.
pub struct Layout {
    pub site: SiteConfig,
    pub carousel: CarouselSettings,
    pub current_path: String,
    pub year: i32,
}

impl Layout {
    pub fn is_current(&self, path: &str) -> bool {
        self.current_path.trim_end_matches('/') == path.trim_end_matches('/')
    }

    pub fn phone_href(&self) -> String {
        self.site
            .contact_phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect()
    }

    pub fn footer_socials(&self) -> &'static [SocialLink] {
        FOOTER_SOCIALS
    }
}

pub struct Template {
    layout: Layout,
}

impl Template {
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_with_status(StatusCode::OK, template)
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(path = %self.layout.current_path, err = %err, "failed to render template");

                let fallback = ServerErrorTemplate {
                    layout: &self.layout,
                };
                match askama::Template::render(&fallback) {
                    Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
                    Err(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
                    }
                }
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template {
            layout: Layout {
                site: state.config.site.clone(),
                carousel: state.config.carousel,
                current_path: parts.uri.path().to_owned(),
                year: OffsetDateTime::now_utc().year(),
            },
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate<'a> {
    pub layout: &'a Layout,
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerErrorTemplate<'a> {
    pub layout: &'a Layout,
}
