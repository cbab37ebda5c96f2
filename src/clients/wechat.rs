use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, info, warn};

use crate::{
    config::Config,
    error::NotifyError,
    models::{
        template::{SendResponse, TemplateMessage},
        token::TokenResponse,
    },
    utils::PUSH_RESULT_TARGET,
};

pub struct WeChatClient {
    http_client: Client,
    token_url: String,
    send_url: String,
    token_timeout: Duration,
    send_timeout: Duration,
}

impl WeChatClient {
    pub fn new(config: &Config) -> Result<Self, NotifyError> {
        let http_client = Client::builder().build()?;

        debug!(
            token_url = %config.token_url,
            send_url = %config.send_url,
            "WeChat client initialized"
        );

        Ok(Self {
            http_client,
            token_url: config.token_url.clone(),
            send_url: config.send_url.clone(),
            token_timeout: Duration::from_secs(config.token_timeout_secs),
            send_timeout: Duration::from_secs(config.send_timeout_secs),
        })
    }

    pub async fn fetch_access_token(
        &self,
        app_id: &str,
        app_secret: &str,
    ) -> Result<String, NotifyError> {
        debug!(app_id, "Requesting access token");

        let response = self
            .http_client
            .get(&self.token_url)
            .query(&[
                ("grant_type", "client_credential"),
                ("appid", app_id),
                ("secret", app_secret),
            ])
            .timeout(self.token_timeout)
            .send()
            .await
            .map_err(|e| NotifyError::Http(e.without_url()))?;

        let body = response
            .text()
            .await
            .map_err(|e| NotifyError::Http(e.without_url()))?;

        match serde_json::from_str::<TokenResponse>(&body) {
            Ok(TokenResponse {
                access_token: Some(token),
                expires_in,
                ..
            }) => {
                debug!(expires_in = ?expires_in, "Access token obtained");
                Ok(token)
            }
            Ok(parsed) => {
                debug!(
                    errcode = ?parsed.errcode,
                    errmsg = ?parsed.errmsg,
                    "Token endpoint returned no access token"
                );
                Err(NotifyError::Authentication { body })
            }
            Err(e) => {
                debug!(error = %e, "Token endpoint returned a non-JSON body");
                Err(NotifyError::Authentication { body })
            }
        }
    }

    /// Posts the message and returns the raw response text. A non-zero
    /// `errcode` in the body is logged but not treated as a failure.
    pub async fn send_template_message(
        &self,
        access_token: &str,
        message: &TemplateMessage,
    ) -> Result<String, NotifyError> {
        debug!(
            touser = %message.touser,
            template_id = %message.template_id,
            fields = message.data.len(),
            "Sending template message"
        );

        let response = match self
            .http_client
            .post(&self.send_url)
            .query(&[("access_token", access_token)])
            .json(message)
            .timeout(self.send_timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let e = e.without_url();
                error!(error = %e, "Template message request failed");
                return Err(NotifyError::Dispatch(e));
            }
        };

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                let e = e.without_url();
                error!(error = %e, "Failed to read template message response");
                return Err(NotifyError::Dispatch(e));
            }
        };

        info!(target: PUSH_RESULT_TARGET, "Push result: {}", text);

        match serde_json::from_str::<SendResponse>(&text) {
            Ok(result) if result.is_ok() => {
                debug!(msgid = ?result.msgid, "Template message accepted");
            }
            Ok(result) => {
                warn!(
                    errcode = ?result.errcode,
                    errmsg = ?result.errmsg,
                    "Template message rejected by platform"
                );
            }
            Err(e) => {
                debug!(error = %e, "Send response is not JSON");
            }
        }

        Ok(text)
    }
}
