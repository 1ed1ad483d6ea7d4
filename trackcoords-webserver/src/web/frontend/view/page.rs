use maud::{html, Markup, DOCTYPE};

const MAIN_CSS_URL: &str = "/main.css";

pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head{
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
            title {(title)}
            link rel="stylesheet" href=(MAIN_CSS_URL);
        }
        body{
            main {
                (content)
            }
        }
    }
}

pub fn error_msg(msg: &str) -> Markup {
    html! {
        div class="flash error" { (msg) }
    }
}
