use maud::{html, Markup};

use flipvid_core::{
    catalog::CatalogItem,
    entities::*,
    usecases::{CommentThread, CommentView},
};

use super::{navigation, page::page};

pub fn video(
    user: Option<&User>,
    video: &Video,
    threads: &[CommentThread],
    watched: bool,
    prev: Option<CatalogItem>,
    next: Option<CatalogItem>,
) -> Markup {
    let comment_count = threads
        .iter()
        .map(|thread| 1 + thread.replies.len())
        .sum::<usize>();
    page(
        &video.title,
        user.map(|user| user.name.as_str()),
        None,
        html! {
            h1 { (video.title) }
            div class="player" {
                iframe src=(video.url) allowfullscreen {}
            }
            @if user.is_some() {
                form class="watched" action=(format!("/watched/{}", video.id)) method="POST" {
                    input type="submit" disabled[watched]
                        value=(if watched { "Watched" } else { "Mark as watched" });
                }
            }
            (navigation(prev, next))
            section class="discussion" {
                h2 { (comment_count) " comments" }
                @if user.is_some() {
                    (comment_form(video.id, None))
                }
                @for thread in threads {
                    (comment_thread(user, video.id, thread))
                }
            }
        },
    )
}

fn comment_thread(user: Option<&User>, video_id: i64, thread: &CommentThread) -> Markup {
    html! {
        article class="comment" {
            (comment(user, &thread.comment, thread.own_vote))
            div class="replies" {
                @for reply in &thread.replies {
                    (comment(user, reply, None))
                }
            }
            @if user.is_some() {
                (comment_form(video_id, Some(&thread.comment.comment.id)))
            }
        }
    }
}

fn comment(user: Option<&User>, view: &CommentView, own_vote: Option<bool>) -> Markup {
    let c = &view.comment;
    let own = user.map(|user| &user.id) == Some(&c.user_id);
    html! {
        div class="comment-body" {
            header {
                span class="author" { (view.author_name) }
                time { (c.created_at) }
                @if let Some(video_time) = c.video_time {
                    span class="video-time" { "at " (format_video_time(video_time)) }
                }
                @if c.last_edited_at.is_some() {
                    span class="edited" { "(edited)" }
                }
            }
            p { (c.text) }
            footer {
                span class="points" { (c.points) }
                @if user.is_some() {
                    (vote_button(&c.id, true, own_vote == Some(true)))
                    (vote_button(&c.id, false, own_vote == Some(false)))
                }
                @if own {
                    form class="remove" action=(format!("/remove_comment/{}", c.id)) method="POST" {
                        input type="submit" value="remove";
                    }
                    form class="edit" action=(format!("/edit_comment/{}", c.id)) method="POST" {
                        textarea name="text" rows="2" { (c.text) }
                        input type="submit" value="save";
                    }
                }
            }
        }
    }
}

fn vote_button(comment_id: &Id, upvote: bool, active: bool) -> Markup {
    let (action, label) = if upvote {
        (format!("/upvote_comment/{comment_id}"), "+")
    } else {
        (format!("/downvote_comment/{comment_id}"), "-")
    };
    let class = match (upvote, active) {
        (true, true) => "upvote active",
        (true, false) => "upvote",
        (false, true) => "downvote active",
        (false, false) => "downvote",
    };
    html! {
        form class=(class) action=(action) method="POST" {
            input type="submit" value=(label);
        }
    }
}

fn comment_form(video_id: i64, reply_to: Option<&Id>) -> Markup {
    let class = if reply_to.is_some() {
        "comment-form reply"
    } else {
        "comment-form"
    };
    html! {
        form class=(class) action=(format!("/post_comment/{video_id}")) method="POST" {
            @if let Some(parent_id) = reply_to {
                input type="hidden" name="replyID" value=(parent_id);
            }
            textarea name="body" rows="3" placeholder="Write a comment" {}
            input type="submit" value="Post";
        }
    }
}

fn format_video_time(seconds: i64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
