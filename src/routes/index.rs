use axum::response::IntoResponse;
use tasky_contact::FormKind;

use crate::content::{self, Feature, Screenshot, SocialLink, Testimonial};
use crate::routes::form::FormView;
use crate::template::{Layout, Template};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub layout: &'a Layout,
    pub features: &'static [Feature],
    pub screenshots: &'static [Screenshot],
    pub testimonials: &'static [Testimonial],
    pub platforms: &'static [&'static str],
    pub socials: &'static [SocialLink],
    pub form: FormView,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(layout: &'a Layout, form: FormView) -> Self {
        Self {
            layout,
            features: content::FEATURES,
            screenshots: content::SCREENSHOTS,
            testimonials: content::TESTIMONIALS,
            platforms: content::PLATFORMS,
            socials: content::CONTACT_SOCIALS,
            form,
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate::new(
        template.layout(),
        FormView::empty(FormKind::Contact),
    ))
}
