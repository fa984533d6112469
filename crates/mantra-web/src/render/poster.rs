//! The poster page: framed photo, feature word, divider, quote, controls.

use maud::{Markup, html};

use crate::render::components::page_shell;
use crate::state::CurrentPoster;

/// Render the full poster page for the current poster.
pub fn poster_page(current: &CurrentPoster, site_name: &str) -> Markup {
    let body = html! {
        div class="poster" {
            img class="poster-image"
                src=(current.poster.display_url)
                alt=(current.poster.quote_text);
            h2 class="poster-word" { (current.feature_word.decorated) }
            div class="poster-line" {}
            p class="poster-text" { (current.poster.quote_text) }
        }
        div class="actions" {
            // The button disables itself on submit so a double-click cannot
            // trigger two concurrent generations (and two uploads).
            form method="post" action="/new"
                onsubmit="const b=this.querySelector('button');b.disabled=true;b.textContent='Loading...'" {
                button type="submit" class="btn btn-refresh" { "Get New Affirmation" }
            }
            a class="btn btn-print" href="/print" target="_blank" { "Print" }
        }
        footer class="footer" {
            "Generated " (current.generated_at.format("%b %d, %Y %H:%M UTC"))
        }
    };

    page_shell("Affirmation Poster", body, site_name)
}
