use maud::{html, Markup, DOCTYPE};
use rocket::request::FlashMessage;

pub fn page(
    title: &str,
    user_name: Option<&str>,
    flash: Option<FlashMessage>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                (header(user_name))
                (flash_message(flash))
                main { (content) }
            }
        }
    }
}

fn header(user_name: Option<&str>) -> Markup {
    html! {
        header {
            nav class="site" {
                a href="/" { "Course" }
                @match user_name {
                    Some(name) => {
                        span class="user" { (name) }
                        form class="logout" action="/logout" method="POST" {
                            input type="submit" value="logout";
                        }
                    }
                    None => {
                        a href="/login" { "login" }
                        a href="/register" { "register" }
                    }
                }
            }
        }
    }
}

pub fn flash_message(flash: Option<FlashMessage>) -> Markup {
    html! {
        @if let Some(flash) = flash {
            div class=(format!("flash {}", flash.kind())) { (flash.message()) }
        }
    }
}
