//! Shared HTML components for the poster pages.

use maud::{Markup, PreEscaped, html};

/// Inline CSS for the poster page.
///
/// Black-and-amber "Successory" look: dark canvas, framed photograph,
/// Georgia serif, letter-spaced amber feature word over the quote.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#000;--fg:#fff;--fg2:#999;--accent:#d97706;--accent-hover:#b45309;--frame:rgba(255,255,255,.1);--frame2:rgba(255,255,255,.2);--serif:Georgia,"Times New Roman",serif}
body{font-family:var(--serif);background:var(--bg);color:var(--fg);min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;padding:1.5rem}
main{max-width:56rem;width:100%}
.poster{background:var(--bg);border:4px solid var(--frame);padding:2rem}
.poster-image{display:block;width:100%;aspect-ratio:3/2;object-fit:cover;border:1px solid var(--frame2);margin-bottom:2rem}
.poster-word{text-align:center;font-size:clamp(1.5rem,6vw,3.75rem);font-weight:900;text-transform:uppercase;letter-spacing:.2em;color:var(--accent);margin-bottom:1rem;white-space:nowrap;overflow-x:auto}
.poster-line{width:8rem;height:4px;background:var(--accent);margin:1.5rem auto}
.poster-text{text-align:center;font-size:1.25rem;text-transform:uppercase;letter-spacing:.05em;line-height:1.6;max-width:48rem;margin:0 auto}
.actions{display:flex;justify-content:center;gap:1rem;margin-top:2rem}
.actions form{display:contents}
.btn{display:inline-flex;align-items:center;gap:.6rem;padding:1rem 2rem;border:none;border-radius:.5rem;font-family:inherit;font-size:1rem;font-weight:600;color:#fff;cursor:pointer;text-decoration:none}
.btn:disabled{opacity:.5;cursor:not-allowed}
.btn-refresh{background:var(--accent)}
.btn-refresh:hover{background:var(--accent-hover)}
.btn-print{background:#334155}
.btn-print:hover{background:#475569}
.footer{margin-top:1.5rem;text-align:center;font-size:.8rem;color:var(--fg2);letter-spacing:.05em}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:Georgia,"Times New Roman",serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#000;color:#fff;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem;color:#d97706}
.error-page p{color:#999;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#d97706}
"#;

/// Render the full HTML page shell with `<head>` and body content.
pub fn page_shell(title: &str, body_content: Markup, site_name: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " — " (site_name) }
                meta name="description" content="A fresh affirmation poster, ready to print.";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (body_content) }
            }
        }
    }
}
