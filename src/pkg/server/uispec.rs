use askama::Template;

use crate::pkg::internal::adaptors::applicants::spec::ApplicantEntry;

pub struct ScreeningView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub score: i32,
    pub decision: String,
    pub status: &'static str,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home {
    pub result: Option<ScreeningView>,
    pub duplicate: bool,
    pub ranking: Vec<ApplicantEntry>,
}
