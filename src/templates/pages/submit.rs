// templates/pages/submit.rs

use crate::domain::{Category, ComplaintDraft, Priority};
use crate::notices::Notice;
use crate::templates::components::feature_card;
use crate::templates::{desktop_layout, Tab};
use maud::{html, Markup};

pub fn submit_page(draft: &ComplaintDraft, notices: &[Notice]) -> Markup {
    desktop_layout(
        "Submit a Complaint",
        Tab::Submit,
        notices,
        html! {
            section class="hero text-center" {
                h2 class="text-3xl font-bold" { "We Value Your Feedback" }
                p class="lead text-muted" {
                    "Your concerns matter to us. Submit a complaint and help us improve our services for everyone."
                }
            }

            div class="grid grid-cols-3 gap-6" {
                (feature_card("Quick Response", "We review all complaints promptly and keep you updated on progress."))
                (feature_card("Secure & Private", "Your information is protected and handled with complete confidentiality."))
                (feature_card("Resolution Tracking", "Track the status of your complaint from submission to resolution."))
            }

            (complaint_form(draft))
        },
    )
}

/// The form posts back to itself; on any failure the page is re-rendered
/// with the same draft so nothing typed is lost.
pub fn complaint_form(draft: &ComplaintDraft) -> Markup {
    html! {
        div class="card shadow-card form-card" {
            div class="card-header text-center" {
                h2 class="text-2xl font-bold" { "Submit a Complaint" }
                p class="text-muted" {
                    "Help us improve by sharing your concerns. We take all feedback seriously."
                }
            }

            form method="post" action="/complaints" class="stack" {
                div class="field" {
                    label for="title" { "Complaint Title *" }
                    input id="title" name="title" type="text"
                        placeholder="Brief summary of your issue"
                        value=(draft.title);
                }

                div class="field" {
                    label for="email" { "Email Address" }
                    input id="email" name="user_email" type="email"
                        placeholder="your.email@example.com (optional)"
                        value=(draft.user_email);
                }

                div class="field" {
                    label for="category" { "Category *" }
                    select id="category" name="category" {
                        option value="" disabled selected[draft.category.is_none()] { "Select a category" }
                        @for category in Category::ALL {
                            option value=(category) selected[draft.category == Some(*category)] {
                                (category)
                            }
                        }
                    }
                }

                fieldset class="field" {
                    legend { "Priority Level *" }
                    div class="flex gap-6" {
                        @for priority in Priority::ALL {
                            label class="radio" for=(priority) {
                                input type="radio" name="priority" id=(priority) value=(priority)
                                    checked[draft.priority == *priority];
                                " " (priority)
                            }
                        }
                    }
                }

                div class="field" {
                    label for="description" { "Description *" }
                    textarea id="description" name="description" rows="4"
                        placeholder="Please provide detailed information about your complaint..." {
                        (draft.description)
                    }
                }

                button type="submit" class="btn btn-primary w-full" {
                    span class="btn-text" { "Submit Complaint" }
                    span class="spinner" aria-hidden="true" {}
                }
            }
        }
    }
}
