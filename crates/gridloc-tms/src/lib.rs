//! Blocking client for the TMS REST API.
//!
//! The TMS wraps every resource in a `{"data": ...}` envelope; lists nest
//! it twice: `{"data": [{"data": ...}, ...]}`. Non-2xx responses carry the
//! raw body as error detail.

use gridloc_domain::{Branch, RemoteString, TmsTranslation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum TmsError {
    #[error("TMS returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Create-string request body. `branch_id` 0 means "default, unbranched"
/// and is omitted; `max_length` 0 means "unset" and is omitted so the TMS
/// never ends up configured with a zero-character limit.
#[derive(Debug, Clone, Serialize)]
pub struct NewString {
    pub text: String,
    pub identifier: String,
    pub context: String,
    #[serde(rename = "branchId", skip_serializing_if = "is_zero")]
    pub branch_id: u64,
    #[serde(rename = "maxLength", skip_serializing_if = "is_zero_u32")]
    pub max_length: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateString {
    pub text: String,
    pub context: String,
    #[serde(rename = "maxLength", skip_serializing_if = "is_zero_u32")]
    pub max_length: u32,
}

fn is_zero(v: &u64) -> bool {
    *v == 0
}

fn is_zero_u32(v: &u32) -> bool {
    *v == 0
}

#[derive(Debug, Deserialize)]
struct Data<T> {
    data: T,
}

type DataList<T> = Data<Vec<Data<T>>>;

/// The surface the sync engines need from the TMS. Kept as a trait so
/// push/pull semantics are testable without a network.
pub trait TmsApi {
    fn list_branches(&self) -> Result<Vec<Branch>, TmsError>;
    fn list_strings(&self, branch_id: u64, limit: usize) -> Result<Vec<RemoteString>, TmsError>;
    fn find_string(
        &self,
        identifier: &str,
        branch_id: u64,
    ) -> Result<Option<RemoteString>, TmsError>;
    fn create_string(&self, req: &NewString) -> Result<RemoteString, TmsError>;
    fn update_string(&self, string_id: u64, req: &UpdateString) -> Result<RemoteString, TmsError>;
    fn list_translations(
        &self,
        string_id: u64,
        language_id: &str,
    ) -> Result<Vec<TmsTranslation>, TmsError>;
}

pub struct TmsClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_token: String,
    project_id: u64,
}

impl TmsClient {
    pub fn new(base_url: &str, api_token: &str, project_id: u64) -> Result<Self, TmsError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent("gridloc/cli")
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
            project_id,
        })
    }

    fn url(&self, rest: &str) -> String {
        format!("{}/projects/{}/{}", self.base_url, self.project_id, rest)
    }

    fn check(resp: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, TmsError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        Err(TmsError::Status {
            status: status.as_u16(),
            body,
        })
    }

    fn get_list<T: DeserializeOwned>(
        &self,
        rest: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, TmsError> {
        let resp = self
            .http
            .get(self.url(rest))
            .bearer_auth(&self.api_token)
            .query(query)
            .send()?;
        let list: DataList<T> = Self::check(resp)?.json()?;
        Ok(list.data.into_iter().map(|d| d.data).collect())
    }
}

impl TmsApi for TmsClient {
    fn list_branches(&self) -> Result<Vec<Branch>, TmsError> {
        self.get_list("branches", &[])
    }

    fn list_strings(&self, branch_id: u64, limit: usize) -> Result<Vec<RemoteString>, TmsError> {
        let mut query = vec![("limit", limit.to_string())];
        if branch_id != 0 {
            query.push(("branchId", branch_id.to_string()));
        }
        self.get_list("strings", &query)
    }

    fn find_string(
        &self,
        identifier: &str,
        branch_id: u64,
    ) -> Result<Option<RemoteString>, TmsError> {
        let mut query = vec![("filter", identifier.to_string())];
        if branch_id != 0 {
            query.push(("branchId", branch_id.to_string()));
        }
        let found: Vec<RemoteString> = self.get_list("strings", &query)?;
        // The filter is a substring search server-side; insist on an exact
        // identifier match.
        Ok(found.into_iter().find(|s| s.identifier == identifier))
    }

    fn create_string(&self, req: &NewString) -> Result<RemoteString, TmsError> {
        let resp = self
            .http
            .post(self.url("strings"))
            .bearer_auth(&self.api_token)
            .json(req)
            .send()?;
        let one: Data<RemoteString> = Self::check(resp)?.json()?;
        Ok(one.data)
    }

    fn update_string(&self, string_id: u64, req: &UpdateString) -> Result<RemoteString, TmsError> {
        let resp = self
            .http
            .patch(self.url(&format!("strings/{string_id}")))
            .bearer_auth(&self.api_token)
            .json(req)
            .send()?;
        let one: Data<RemoteString> = Self::check(resp)?.json()?;
        Ok(one.data)
    }

    fn list_translations(
        &self,
        string_id: u64,
        language_id: &str,
    ) -> Result<Vec<TmsTranslation>, TmsError> {
        self.get_list(
            "translations",
            &[
                ("stringId", string_id.to_string()),
                ("languageId", language_id.to_string()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_branch_and_max_length_are_omitted_from_payloads() {
        let req = NewString {
            text: "Hello".into(),
            identifier: "Main_R2D".into(),
            context: "Main D2".into(),
            branch_id: 0,
            max_length: 0,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert!(v.get("branchId").is_none());
        assert!(v.get("maxLength").is_none());

        let req = NewString {
            branch_id: 9,
            max_length: 140,
            ..req
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["branchId"], 9);
        assert_eq!(v["maxLength"], 140);
    }

    #[test]
    fn list_envelope_unwraps_twice() {
        let body = r#"{"data":[{"data":{"id":1,"identifier":"Main_R2D","text":"Hello"}},
                       {"data":{"id":2,"identifier":"Main_R2E","text":"World","branchId":3}}]}"#;
        let list: DataList<gridloc_domain::RemoteString> = serde_json::from_str(body).unwrap();
        let strings: Vec<_> = list.data.into_iter().map(|d| d.data).collect();
        assert_eq!(strings.len(), 2);
        assert_eq!(strings[0].identifier, "Main_R2D");
        assert_eq!(strings[0].branch_id, 0);
        assert_eq!(strings[1].branch_id, 3);
    }
}
