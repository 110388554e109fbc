use askama::Template;

use super::{MemberCardView, Notice, PageContext};

#[derive(Template)]
#[template(path = "members.html")]
pub struct MembersTemplate {
    pub ctx: PageContext,
    pub notice: Option<Notice>,
    pub faculty: Vec<MemberCardView>,
    pub students: Vec<MemberCardView>,
}

#[derive(Template)]
#[template(path = "join.html")]
pub struct JoinTemplate {
    pub ctx: PageContext,
    pub notice: Option<Notice>,
    pub benefits: Vec<&'static str>,
    pub join_href: String,
}

/// Contact details come from `ctx.contact`.
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub ctx: PageContext,
    pub notice: Option<Notice>,
    pub map_embed: &'static str,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}
