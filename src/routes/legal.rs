use axum::response::IntoResponse;
use time::{OffsetDateTime, macros::format_description};

use crate::content::{self, LegalSection};
use crate::template::{Layout, Template};

#[derive(askama::Template)]
#[template(path = "legal.html")]
pub struct LegalTemplate<'a> {
    pub layout: &'a Layout,
    pub title: &'static str,
    pub date_label: &'static str,
    pub date: String,
    pub sections: &'static [LegalSection],
}

fn today() -> String {
    OffsetDateTime::now_utc()
        .date()
        .format(format_description!("[month repr:long] [day padding:none], [year]"))
        .unwrap_or_default()
}

pub async fn terms(template: Template) -> impl IntoResponse {
    template.render(LegalTemplate {
        layout: template.layout(),
        title: "Terms & Conditions",
        date_label: "Effective Date",
        date: today(),
        sections: content::TERMS,
    })
}

pub async fn privacy(template: Template) -> impl IntoResponse {
    template.render(LegalTemplate {
        layout: template.layout(),
        title: "Privacy Policy",
        date_label: "Last updated",
        date: today(),
        sections: content::PRIVACY,
    })
}
