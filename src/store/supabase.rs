// src/store/supabase.rs

use crate::domain::{Complaint, ComplaintId, NewComplaint, Status};
use crate::store::{ComplaintStore, StoreError};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// `complaints` table exposed by a Supabase project's PostgREST endpoint.
pub struct SupabaseStore {
    table_url: Url,
    api_key: String,
    client: Client,
}

#[derive(Serialize)]
struct StatusPatch {
    status: Status,
}

impl SupabaseStore {
    /// `project_url` is the bare project URL, e.g. `https://abcd.supabase.co`.
    /// `timeout` of `None` lets a hung request wait forever.
    pub fn new(
        project_url: &Url,
        api_key: String,
        timeout: Option<Duration>,
    ) -> Result<Self, StoreError> {
        let mut base = project_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let table_url = base
            .join("rest/v1/complaints")
            .map_err(|e| StoreError::Unavailable(format!("invalid project url: {e}")))?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            table_url,
            api_key,
            client,
        })
    }

    fn list_url(&self) -> Url {
        let mut url = self.table_url.clone();
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "date_submitted.desc");
        url
    }

    fn row_url(&self, id: &ComplaintId) -> Url {
        let mut url = self.table_url.clone();
        url.query_pairs_mut()
            .append_pair("id", &format!("eq.{}", id.as_str()));
        url
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

/// Turns a non-2xx response into `StoreError::Api`, keeping the body for the logs.
fn check(resp: Response) -> Result<Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
    Err(StoreError::Api {
        status: status.as_u16(),
        body,
    })
}

impl ComplaintStore for SupabaseStore {
    fn list_complaints(&self) -> Result<Vec<Complaint>, StoreError> {
        let url = self.list_url();
        debug!(%url, "fetching complaints");

        let resp = self.authorized(self.client.get(url)).send()?;
        let body = check(resp)?.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn insert_complaint(&self, complaint: &NewComplaint) -> Result<Complaint, StoreError> {
        let resp = self
            .authorized(self.client.post(self.table_url.clone()))
            .header("Prefer", "return=representation")
            .json(&[complaint])
            .send()?;

        let body = check(resp)?.text()?;
        let rows: Vec<Complaint> = serde_json::from_str(&body)?;
        rows.into_iter().next().ok_or(StoreError::EmptyInsert)
    }

    fn update_status(&self, id: &ComplaintId, status: Status) -> Result<(), StoreError> {
        let resp = self
            .authorized(self.client.patch(self.row_url(id)))
            .json(&StatusPatch { status })
            .send()?;

        check(resp)?;
        Ok(())
    }

    fn delete_complaint(&self, id: &ComplaintId) -> Result<(), StoreError> {
        let resp = self
            .authorized(self.client.delete(self.row_url(id)))
            .send()?;

        check(resp)?;
        Ok(())
    }
}
