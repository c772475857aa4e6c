//! Footer

use leptos::prelude::*;

const COURSE_URL: &str = "https://courses.helsinki.fi/fi/tkt21009";
const SOURCE_URL: &str = "https://github.com/fullstack-hy/routed-anecdotes";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <div class="footer">
            "Anecdote app for "
            <a href=COURSE_URL>"Full Stack -websovelluskehitys"</a>
            ". See "
            <a href=SOURCE_URL>{SOURCE_URL}</a>
            " for the source code."
        </div>
    }
}
