use crate::domain::{Choice, ComplaintDraft, ComplaintFilters, ComplaintId, Priority, Status};
use crate::errors::ServerError;
use crate::notices::Notice;
use crate::responses::{fragment_response, html_response, redirect, ResultResp};
use crate::state::AppState;
use crate::controllers::ListController;
use crate::templates::pages::{admin_page, complaint_list, confirm_delete_page, submit_page, AdminVm};
use astra::{Body, Request, ResponseBuilder};
use percent_encoding::percent_decode_str;
use std::collections::HashMap;
use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;
use tracing::debug;

const MAIN_CSS: &str = include_str!("../static/main.css");

type Form = HashMap<String, String>;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let query = req.uri().query().unwrap_or("").to_owned();
    debug!(%method, %path, "request");

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => submit_view(),
        ("POST", ["complaints"]) => submit_complaint(&read_form(&mut req)?, state),

        ("GET", ["admin"]) => admin_view(&query, state),
        ("GET", ["admin", "complaints"]) => admin_list_fragment(&query, state),
        ("POST", ["admin", "refresh"]) => refresh(state),
        ("POST", ["admin", "complaints", id, "status"]) => {
            change_status(path_id(id)?, &read_form(&mut req)?, state)
        }
        ("GET", ["admin", "complaints", id, "delete"]) => {
            confirm_delete(&path_id(id)?, state)
        }
        ("POST", ["admin", "complaints", id, "delete"]) => {
            delete(path_id(id)?, &read_form(&mut req)?, state)
        }

        ("GET", ["static", "main.css"]) => ResponseBuilder::new()
            .status(200)
            .header("Content-Type", mime::TEXT_CSS_UTF_8.as_ref())
            .body(Body::from(MAIN_CSS))
            .map_err(|_| ServerError::InternalError),

        _ => Err(ServerError::NotFound),
    }
}

// ---------- submit view ----------

fn submit_view() -> ResultResp {
    html_response(submit_page(&ComplaintDraft::default(), &[]))
}

fn submit_complaint(form: &Form, state: &AppState) -> ResultResp {
    let draft = draft_from_form(form)?;
    let mut controller = state.submission();

    let outcome = match controller.submit(draft) {
        Ok(_) => Notice::submitted(),
        Err(e) => Notice::from(&e),
    };

    html_response(submit_page(controller.draft(), &[outcome]))
}

// ---------- admin view ----------

fn admin_vm(list: &ListController) -> AdminVm {
    AdminVm {
        filters: list.filters().clone(),
        complaints: list.filtered().to_vec(),
        has_active_filters: list.has_active_filters(),
        loaded: list.has_loaded(),
    }
}

/// Only the first admin request fetches; later ones use the cache until a
/// refresh. A failure is queued for the next admin page.
fn load_on_first_visit(list: &mut ListController, state: &AppState) -> Result<(), ServerError> {
    if list.is_loading() {
        if let Err(e) = list.load() {
            state.push_admin_notice(Notice::from(&e))?;
        }
    }
    Ok(())
}

fn admin_view(query: &str, state: &AppState) -> ResultResp {
    let filters = filters_from_query(query)?;

    let vm = {
        let mut list = state.list()?;
        load_on_first_visit(&mut list, state)?;
        if let Some(filters) = filters {
            list.set_filters(filters);
        }
        admin_vm(&list)
    };

    let notices = state.take_admin_notices()?;
    html_response(admin_page(&vm, &notices))
}

/// Filter changes from htmx: recompute from the cache, return only the list.
fn admin_list_fragment(query: &str, state: &AppState) -> ResultResp {
    let filters = filters_from_query(query)?;

    let vm = {
        let mut list = state.list()?;
        load_on_first_visit(&mut list, state)?;
        if let Some(filters) = filters {
            list.set_filters(filters);
        }
        admin_vm(&list)
    };

    fragment_response(complaint_list(&vm))
}

fn refresh(state: &AppState) -> ResultResp {
    {
        let mut list = state.list()?;
        if let Err(e) = list.load() {
            state.push_admin_notice(Notice::from(&e))?;
        }
    }
    redirect("/admin")
}

fn change_status(id: ComplaintId, form: &Form, state: &AppState) -> ResultResp {
    let status: Status = required(form, "status")?;

    {
        let mut list = state.list()?;
        let notice = match list.update_status(&id, status) {
            Ok(()) => Notice::status_updated(status),
            Err(e) => Notice::from(&e),
        };
        state.push_admin_notice(notice)?;
    }
    redirect("/admin")
}

fn confirm_delete(id: &ComplaintId, state: &AppState) -> ResultResp {
    let complaint = {
        let list = state.list()?;
        list.cache().iter().find(|c| &c.id == id).cloned()
    };

    let notices = state.take_admin_notices()?;
    html_response(confirm_delete_page(complaint.as_ref(), id, &notices))
}

fn delete(id: ComplaintId, form: &Form, state: &AppState) -> ResultResp {
    if form.get("confirmed").map(String::as_str) != Some("yes") {
        return confirm_delete(&id, state);
    }

    {
        let mut list = state.list()?;
        let notice = match list.delete_complaint(&id) {
            Ok(()) => Notice::deleted(),
            Err(e) => Notice::from(&e),
        };
        state.push_admin_notice(notice)?;
    }
    redirect("/admin")
}

// ---------- request parsing ----------

fn parse_pairs(raw: &str) -> Form {
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}

fn read_form(req: &mut Request) -> Result<Form, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    Ok(parse_pairs(&body))
}

/// Decodes a percent-encoded `{id}` path segment.
fn path_id(raw: &str) -> Result<ComplaintId, ServerError> {
    let id = percent_decode_str(raw).decode_utf8().map_err(bad_request)?;
    Ok(ComplaintId::new(id))
}

fn bad_request(e: impl Display) -> ServerError {
    ServerError::BadRequest(e.to_string())
}

/// A form value that must be present and parse.
fn required<T>(form: &Form, name: &str) -> Result<T, ServerError>
where
    T: FromStr,
    T::Err: Display,
{
    form.get(name)
        .ok_or_else(|| ServerError::BadRequest(format!("missing form field `{name}`")))?
        .parse()
        .map_err(bad_request)
}

/// A form value where absent or empty means `None`.
fn optional<T>(form: &Form, name: &str) -> Result<Option<T>, ServerError>
where
    T: FromStr,
    T::Err: Display,
{
    match form.get(name).map(String::as_str) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(bad_request),
    }
}

fn draft_from_form(form: &Form) -> Result<ComplaintDraft, ServerError> {
    let text = |name: &str| form.get(name).cloned().unwrap_or_default();

    Ok(ComplaintDraft {
        title: text("title"),
        description: text("description"),
        category: optional(form, "category")?,
        priority: optional::<Priority>(form, "priority")?.unwrap_or_default(),
        user_email: text("user_email"),
    })
}

/// `None` when the query carries no filter parameters at all, so a bare
/// `/admin` keeps whatever filters were last chosen.
fn filters_from_query(query: &str) -> Result<Option<ComplaintFilters>, ServerError> {
    let params = parse_pairs(query);
    if !["status", "priority", "q"]
        .iter()
        .any(|k| params.contains_key(*k))
    {
        return Ok(None);
    }

    Ok(Some(ComplaintFilters {
        status: optional::<Choice<Status>>(&params, "status")?.unwrap_or_default(),
        priority: optional::<Choice<Priority>>(&params, "priority")?.unwrap_or_default(),
        search_text: params.get("q").cloned().unwrap_or_default(),
    }))
}
