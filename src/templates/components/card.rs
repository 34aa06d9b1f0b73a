use maud::{html, Markup};

/// Small centred card used for the feature blurbs on the submit page.
pub fn feature_card(title: &str, text: &str) -> Markup {
    html! {
        div class="card shadow-card text-center" {
            h3 class="font-semibold" { (title) }
            p class="text-sm text-muted" { (text) }
        }
    }
}
