use crate::notices::Notice;
use crate::templates::components::notice_list;
use maud::{html, Markup, DOCTYPE};

/// The two top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Submit,
    Admin,
}

pub fn desktop_layout(title: &str, active: Tab, notices: &[Notice], content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · ComplaintHub" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                header class="site-header" {
                    div class="container flex items-center justify-between" {
                        div class="brand" {
                            h1 class="text-xl font-bold" { "ComplaintHub" }
                            p class="text-sm text-muted" { "Professional Complaint Management" }
                        }
                        @match active {
                            Tab::Admin => a class="btn btn-primary" href="/" { "User View" },
                            Tab::Submit => a class="btn btn-outline" href="/admin" { "Admin Panel" },
                        }
                    }
                }

                main class="container" {
                    nav class="tabs" {
                        a href="/" class=(if active == Tab::Submit { "tab tab-active" } else { "tab" }) {
                            "Submit Complaint"
                        }
                        a href="/admin" class=(if active == Tab::Admin { "tab tab-active" } else { "tab" }) {
                            "Admin Dashboard"
                        }
                    }

                    (notice_list(notices))
                    (content)
                }

                footer class="site-footer" {
                    div class="container text-center text-sm text-muted" {
                        p { "© 2024 ComplaintHub. Built with care for better customer service." }
                    }
                }
            }
        }
    }
}
