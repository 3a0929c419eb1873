use maud::{html, Markup};
use rocket::{http::Status, request::FlashMessage};

use flipvid_core::{catalog::CatalogItem, entities::*};

mod login;
mod page;
mod video;

pub use login::*;
use page::*;
pub use video::*;

pub fn index(user: Option<&User>, phases: &[Phase]) -> Markup {
    page(
        "Course Overview",
        user.map(|user| user.name.as_str()),
        None,
        html! {
            h1 { "Course Overview" }
            ul class="phases" {
                @for phase in phases {
                    li {
                        a href=(format!("/phases/{}", phase.slug())) { (phase.title) }
                    }
                }
            }
        },
    )
}

pub fn phase(user: Option<&User>, phase: &Phase) -> Markup {
    page(
        &phase.title,
        user.map(|user| user.name.as_str()),
        None,
        html! {
            h1 { (phase.title) }
            @for topic in &phase.topics {
                section class="topic" {
                    h2 { (topic.title) }
                    ul class="videos" {
                        @for video in &topic.videos {
                            li {
                                a href=(format!("/videos/{}", video.pos)) { (video.title) }
                            }
                        }
                    }
                    ul class="quizzes" {
                        @for quiz in &topic.quizzes {
                            li {
                                a href=(format!("/quizzes/{}", quiz.pos)) { (quiz.title) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn quiz(
    user: Option<&User>,
    quiz: &Quiz,
    prev: Option<CatalogItem>,
    next: Option<CatalogItem>,
) -> Markup {
    page(
        &quiz.title,
        user.map(|user| user.name.as_str()),
        None,
        html! {
            h1 { (quiz.title) }
            p class="quiz" {
                a href=(quiz.url) target="_blank" { "Start the quiz" }
            }
            (navigation(prev, next))
        },
    )
}

pub fn notification_alert(flash: Option<FlashMessage>) -> Markup {
    flash_message(flash)
}

pub fn error(status: Status, msg: &str) -> Markup {
    page(
        status.reason_lossy(),
        None,
        None,
        html! {
            h1 { (status.code) " " (status.reason_lossy()) }
            p { (msg) }
        },
    )
}

fn navigation(prev: Option<CatalogItem>, next: Option<CatalogItem>) -> Markup {
    html! {
        nav class="pager" {
            @if let Some(prev) = prev {
                a class="prev" href=(prev.page_path()) { "Previous: " (prev.title()) }
            }
            @if let Some(next) = next {
                a class="next" href=(next.page_path()) { "Next: " (next.title()) }
            }
        }
    }
}
