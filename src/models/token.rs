use serde::Deserialize;

/// Body returned by the token endpoint. On failure only `errcode`/`errmsg` are set.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<u64>,
    pub errcode: Option<i64>,
    pub errmsg: Option<String>,
}
