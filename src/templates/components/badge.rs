use crate::domain::{Priority, Status};
use maud::{html, Markup};

fn priority_tone(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge-destructive",
        Priority::Medium => "badge-warning",
        Priority::Low => "badge-muted",
    }
}

fn status_tone(status: Status) -> &'static str {
    match status {
        Status::Resolved => "badge-success",
        Status::InProgress => "badge-warning",
        Status::Pending => "badge-muted",
    }
}

pub fn outline_badge(label: &str) -> Markup {
    html! {
        span class="badge badge-outline" { (label) }
    }
}

pub fn priority_badge(priority: Priority) -> Markup {
    html! {
        span class={ "badge " (priority_tone(priority)) } { (priority) " Priority" }
    }
}

pub fn status_badge(status: Status) -> Markup {
    html! {
        span class={ "badge " (status_tone(status)) } { (status) }
    }
}
