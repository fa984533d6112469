//! The printable poster document.
//!
//! A standalone letter-portrait page that opens the browser's print dialog
//! once the image has loaded. Pure templating over the current poster.

use maud::{Markup, PreEscaped, html};

use crate::state::CurrentPoster;

/// Inline CSS for the printable document.
const PRINT_CSS: &str = r#"
@page{size:letter portrait;margin:0}
body{margin:0;padding:0;background:black;display:flex;justify-content:center;align-items:center;min-height:100vh;font-family:Georgia,serif}
.poster-container{width:8.5in;min-height:11in;background:black;padding:1in;box-sizing:border-box}
.poster-image{width:100%;aspect-ratio:3/2;object-fit:cover;border:2px solid rgba(255,255,255,.2);margin-bottom:2rem}
.poster-word{text-align:center;font-size:48pt;font-weight:900;text-transform:uppercase;letter-spacing:.2em;color:#d97706;margin-bottom:1rem;white-space:nowrap}
.poster-line{width:200px;height:4px;background:#d97706;margin:1.5rem auto}
.poster-text{text-align:center;font-size:14pt;text-transform:uppercase;letter-spacing:.1em;color:white;line-height:1.6;max-width:100%}
@media print{body{margin:0}.poster-container{width:100%;height:100vh}}
"#;

/// Waits for the photo before printing so the dialog never shows a blank
/// frame.
const PRINT_SCRIPT: &str =
    "window.addEventListener('load',function(){setTimeout(function(){window.print()},250)})";

/// Render the standalone printable poster document.
pub fn print_page(current: &CurrentPoster) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Affirmation Poster" }
                style { (PreEscaped(PRINT_CSS)) }
                script { (PreEscaped(PRINT_SCRIPT)) }
            }
            body {
                div class="poster-container" {
                    img class="poster-image"
                        src=(current.poster.display_url)
                        alt=(current.poster.quote_text);
                    h2 class="poster-word" { (current.feature_word.decorated) }
                    div class="poster-line" {}
                    p class="poster-text" { (current.poster.quote_text) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mantra_pipeline::{PosterResult, derive_feature_word};

    fn sample() -> CurrentPoster {
        let quote_text = "Trust yourself".to_string();
        CurrentPoster {
            feature_word: derive_feature_word(&quote_text),
            poster: PosterResult {
                display_url: "https://img.mock/affirmations/p1".to_string(),
                quote_text,
            },
            generated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn print_page_is_a_standalone_document() {
        let html = print_page(&sample()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("size:letter portrait"));
        assert!(html.contains("window.print()"));
    }

    #[test]
    fn print_page_shows_poster_content() {
        let html = print_page(&sample()).into_string();
        assert!(html.contains("https://img.mock/affirmations/p1"));
        assert!(html.contains("Y · O · U · R · S · E · L · F"));
        assert!(html.contains("Trust yourself"));
    }
}
