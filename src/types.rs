use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::Defaults;

/// Inbound message request, from a JSON body (POST) or query string (GET).
///
/// Every field is optional at the transport boundary; an empty string means
/// "not supplied" and is filled from the process defaults during resolution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub appid: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub userid: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default, rename = "tz")]
    pub timezone: String,
}

impl SendRequest {
    /// Merge with the process defaults. Precedence: explicit request value,
    /// then default, then empty. Pure; validation happens separately.
    pub fn resolve(mut self, defaults: &Defaults) -> Self {
        fn fill(field: &mut String, fallback: &str) {
            if field.is_empty() {
                *field = fallback.to_string();
            }
        }

        fill(&mut self.title, &defaults.title);
        fill(&mut self.content, &defaults.content);
        fill(&mut self.appid, &defaults.appid);
        fill(&mut self.secret, &defaults.secret);
        fill(&mut self.userid, &defaults.userid);
        fill(&mut self.template_id, &defaults.template_id);
        fill(&mut self.base_url, &defaults.base_url);
        fill(&mut self.timezone, &defaults.timezone);
        self
    }

    /// Names of required fields still empty after resolution. Title,
    /// content, base_url and tz may legitimately stay empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.appid.is_empty() {
            missing.push("appid");
        }
        if self.secret.is_empty() {
            missing.push("secret");
        }
        if self.userid.is_empty() {
            missing.push("userid");
        }
        if self.template_id.is_empty() {
            missing.push("template_id");
        }
        missing
    }
}

/// Outbound template message body, in the platform's wire format.
#[derive(Debug, Serialize)]
pub struct TemplateMessage {
    pub touser: String,
    pub template_id: String,
    pub url: String,
    pub data: BTreeMap<String, TemplateField>,
}

#[derive(Debug, Serialize)]
pub struct TemplateField {
    pub value: String,
}

/// Platform delivery result, relayed to the caller verbatim. A non-zero
/// errcode is the platform's own error convention, not a core failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlatformResponse {
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_defaults() -> Defaults {
        Defaults {
            title: "d-title".to_string(),
            content: "d-content".to_string(),
            appid: "d-appid".to_string(),
            secret: "d-secret".to_string(),
            userid: "d-userid".to_string(),
            template_id: "d-template".to_string(),
            base_url: "https://example.com".to_string(),
            timezone: "Asia/Shanghai".to_string(),
        }
    }

    #[test]
    fn empty_request_resolves_to_defaults() {
        let resolved = SendRequest::default().resolve(&full_defaults());

        assert_eq!(resolved.title, "d-title");
        assert_eq!(resolved.content, "d-content");
        assert_eq!(resolved.appid, "d-appid");
        assert_eq!(resolved.secret, "d-secret");
        assert_eq!(resolved.userid, "d-userid");
        assert_eq!(resolved.template_id, "d-template");
        assert_eq!(resolved.base_url, "https://example.com");
        assert_eq!(resolved.timezone, "Asia/Shanghai");
    }

    #[test]
    fn request_value_overrides_default() {
        let request = SendRequest {
            title: "mine".to_string(),
            userid: "me".to_string(),
            ..Default::default()
        };

        let resolved = request.resolve(&full_defaults());

        assert_eq!(resolved.title, "mine");
        assert_eq!(resolved.userid, "me");
        assert_eq!(resolved.content, "d-content");
    }

    #[test]
    fn resolution_with_empty_defaults_is_identity() {
        let request = SendRequest {
            appid: "a".to_string(),
            ..Default::default()
        };

        let resolved = request.resolve(&Defaults::default());

        assert_eq!(resolved.appid, "a");
        assert_eq!(resolved.secret, "");
    }

    #[test]
    fn missing_required_lists_every_empty_credential_field() {
        let request = SendRequest {
            appid: "a".to_string(),
            ..Default::default()
        };

        assert_eq!(
            request.missing_required(),
            vec!["secret", "userid", "template_id"]
        );
    }

    #[test]
    fn optional_fields_do_not_fail_validation() {
        let request = SendRequest {
            appid: "a".to_string(),
            secret: "s".to_string(),
            userid: "u".to_string(),
            template_id: "t".to_string(),
            ..Default::default()
        };

        assert!(request.missing_required().is_empty());
    }
}
