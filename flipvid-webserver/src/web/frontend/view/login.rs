use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page::page;

pub fn login(flash: Option<FlashMessage>) -> Markup {
    page(
        "Login",
        None,
        flash,
        html! {
            form class="login" action="login" method="POST" {
                fieldset {
                    label {
                        "Name"
                        input type="text" name="name" placeholder="user name";
                    }
                    input type="submit" value="login";
                }
            }
            p {
                a href="/register" { "No account yet? Register here." }
            }
        },
    )
}

pub fn register(flash: Option<FlashMessage>) -> Markup {
    page(
        "Register",
        None,
        flash,
        html! {
            form class="register" action="register" method="POST" {
                fieldset {
                    label {
                        "Name"
                        input type="text" name="name" placeholder="user name";
                    }
                    input type="submit" value="register";
                }
            }
            p {
                a href="/login" { "Already registered? Login here." }
            }
        },
    )
}
