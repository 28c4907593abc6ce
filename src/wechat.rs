use reqwest::Client;

use crate::types::{PlatformResponse, TemplateMessage};

/// Short-lived bearer credential for the delivery call. Fetched fresh for
/// every request; never cached across requests.
#[derive(Debug)]
pub struct AccessToken {
    pub token: String,
    pub expires_in: u64,
}

#[derive(Debug, serde::Deserialize)]
struct AccessTokenResponse {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    expires_in: u64,
}

/// Client for the platform's credential-exchange and delivery endpoints.
/// Certificate verification stays at the reqwest defaults.
pub struct WechatClient {
    http: Client,
    api_base: String,
}

impl WechatClient {
    pub fn new(api_base: String) -> Self {
        Self {
            http: Client::builder()
                .user_agent("wxpush-bridge")
                .build()
                .expect("failed to build http client"),
            api_base,
        }
    }

    /// Exchange app credentials for an access token. One attempt, no retry.
    /// A response that parses but carries an empty token is unusable for
    /// delivery, so it is reported as a failure here instead of being
    /// passed through.
    pub async fn fetch_token(&self, appid: &str, secret: &str) -> anyhow::Result<AccessToken> {
        let url = format!("{}/cgi-bin/stable_token", self.api_base);
        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({
                "grant_type": "client_credential",
                "appid": appid,
                "secret": secret,
            }))
            .send()
            .await?;

        let payload: AccessTokenResponse = response.json().await?;
        if payload.access_token.is_empty() {
            anyhow::bail!("platform returned an empty access token");
        }

        Ok(AccessToken {
            token: payload.access_token,
            expires_in: payload.expires_in,
        })
    }

    /// Post the template message. The platform's errcode/errmsg pair is
    /// returned as-is, including platform-side failures.
    pub async fn send_template(
        &self,
        token: &AccessToken,
        message: &TemplateMessage,
    ) -> anyhow::Result<PlatformResponse> {
        let url = format!(
            "{}/cgi-bin/message/template/send?access_token={}",
            self.api_base, token.token
        );
        let response = self.http.post(url).json(message).send().await?;

        let payload: PlatformResponse = response.json().await?;
        Ok(payload)
    }
}
