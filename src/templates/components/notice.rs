use crate::notices::Notice;
use maud::{html, Markup};

/// Toast stack rendered at the top of every page.
pub fn notice_list(notices: &[Notice]) -> Markup {
    html! {
        @if !notices.is_empty() {
            div class="toasts" aria-live="polite" {
                @for notice in notices {
                    @let (class, role) = if notice.is_error() {
                        ("toast toast-destructive", "alert")
                    } else {
                        ("toast toast-success", "status")
                    };
                    div class=(class) role=(role) {
                        strong class="toast-title" { (notice.title) }
                        p class="toast-description" { (notice.description) }
                    }
                }
            }
        }
    }
}
