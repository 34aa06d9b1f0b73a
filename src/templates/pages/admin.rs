use crate::domain::{Choice, Complaint, ComplaintFilters, ComplaintId, Priority, Status};
use crate::notices::Notice;
use crate::templates::components::{outline_badge, priority_badge, status_badge};
use crate::templates::{desktop_layout, Tab};
use maud::{html, Markup};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const DELETE_PROMPT: &str =
    "Are you sure you want to delete this complaint? This action cannot be undone.";

/// What the admin view needs from the list controller.
pub struct AdminVm {
    pub filters: ComplaintFilters,
    pub complaints: Vec<Complaint>,
    pub has_active_filters: bool,
    /// False until a load has succeeded.
    pub loaded: bool,
}

/// `/admin/complaints/{id}` with the id percent-encoded as one path segment.
pub fn complaint_path(id: &ComplaintId) -> String {
    format!(
        "/admin/complaints/{}",
        utf8_percent_encode(id.as_str(), PATH_SEGMENT)
    )
}

pub fn admin_page(vm: &AdminVm, notices: &[Notice]) -> Markup {
    desktop_layout(
        "Admin Dashboard",
        Tab::Admin,
        notices,
        html! {
            div class="card shadow-card" {
                div class="flex items-center justify-between" {
                    div {
                        h2 class="text-2xl font-bold" { "Admin Dashboard" }
                        p class="text-muted" { "Manage and track all customer complaints" }
                    }
                    form method="post" action="/admin/refresh" {
                        button type="submit" class="btn btn-outline" { "Refresh" }
                    }
                }
            }

            (filter_bar(&vm.filters))

            div id="complaint-list" {
                (complaint_list(vm))
            }
        },
    )
}

fn filter_bar(filters: &ComplaintFilters) -> Markup {
    html! {
        div class="card shadow-card" {
            form method="get" action="/admin" class="flex gap-4"
                hx-get="/admin/complaints"
                hx-target="#complaint-list"
                hx-trigger="change, keyup changed delay:300ms from:input[name='q']"
            {
                input type="search" name="q" class="flex-1"
                    placeholder="Search complaints..."
                    value=(filters.search_text);

                select name="status" class="w-40" {
                    option value="all" selected[filters.status.is_all()] { "All Statuses" }
                    @for status in Status::ALL {
                        option value=(status) selected[filters.status == Choice::Only(*status)] {
                            (status)
                        }
                    }
                }

                select name="priority" class="w-40" {
                    option value="all" selected[filters.priority.is_all()] { "All Priorities" }
                    @for priority in Priority::ALL {
                        option value=(priority) selected[filters.priority == Choice::Only(*priority)] {
                            (priority)
                        }
                    }
                }

                noscript {
                    button type="submit" class="btn btn-outline" { "Filter" }
                }
            }
        }
    }
}

/// The filtered complaints, or the empty state. Also served alone as the
/// htmx fragment.
pub fn complaint_list(vm: &AdminVm) -> Markup {
    html! {
        @if vm.complaints.is_empty() {
            div class="card shadow-card text-center empty-state" {
                h3 class="text-lg font-semibold" { "No complaints found" }
                p class="text-muted" {
                    @if !vm.loaded {
                        "Complaints could not be loaded yet. Use Refresh to try again."
                    } @else if vm.has_active_filters {
                        "Try adjusting your filters or search terms."
                    } @else {
                        "No complaints have been submitted yet."
                    }
                }
            }
        } @else {
            div class="grid gap-4" {
                @for complaint in &vm.complaints {
                    (complaint_card(complaint))
                }
            }
        }
    }
}

fn complaint_card(complaint: &Complaint) -> Markup {
    let base = complaint_path(&complaint.id);

    html! {
        article class="card shadow-card complaint" id={ "complaint-" (complaint.id) } {
            h3 class="text-lg font-semibold" { (complaint.title) }
            p class="text-muted text-sm line-clamp-2" { (complaint.description) }

            div class="flex flex-wrap gap-2" {
                (outline_badge(complaint.category.as_str()))
                (priority_badge(complaint.priority))
                (status_badge(complaint.status))
            }

            div class="flex items-center justify-between border-t" {
                div class="flex gap-4 text-sm text-muted" {
                    span class="date" { (complaint.date_submitted.format("%b %-d, %Y")) }
                    @if let Some(email) = &complaint.user_email {
                        span class="email" { (email) }
                    }
                }

                div class="flex gap-2" {
                    form method="post" action={ (base) "/status" } {
                        select name="status" onchange="this.form.submit()" {
                            @for status in Status::ALL {
                                option value=(status) selected[complaint.status == *status] { (status) }
                            }
                        }
                        noscript {
                            button type="submit" class="btn btn-outline" { "Update" }
                        }
                    }

                    form method="post" action={ (base) "/delete" }
                        onsubmit=(format!("if (window.confirm('{}')) {{ this.confirmed.value = 'yes'; return true; }} return false;", DELETE_PROMPT))
                    {
                        input type="hidden" name="confirmed" value="";
                        button type="submit" class="btn btn-outline btn-danger" aria-label="Delete complaint" {
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

/// Shown when a delete arrives without confirmation (no JavaScript, or a
/// direct link).
pub fn confirm_delete_page(
    complaint: Option<&Complaint>,
    id: &ComplaintId,
    notices: &[Notice],
) -> Markup {
    desktop_layout(
        "Delete complaint",
        Tab::Admin,
        notices,
        html! {
            div class="card shadow-card narrow" {
                h2 class="text-2xl font-bold" { "Delete complaint?" }
                @if let Some(c) = complaint {
                    p { strong { (c.title) } }
                }
                p class="text-muted" { (DELETE_PROMPT) }

                div class="flex gap-2" {
                    form method="post" action={ (complaint_path(id)) "/delete" } {
                        input type="hidden" name="confirmed" value="yes";
                        button type="submit" class="btn btn-danger" { "Delete" }
                    }
                    a class="btn btn-outline" href="/admin" { "Cancel" }
                }
            }
        },
    )
}
