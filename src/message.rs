use std::collections::BTreeMap;

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use url::form_urlencoded;

use crate::types::{SendRequest, TemplateField, TemplateMessage};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Build the outbound template message from fully-resolved parameters.
///
/// Pure construction: the delivery call itself happens in the handler. The
/// two `data` keys match the placeholders the detail page template expects.
pub fn build_message(params: &SendRequest) -> TemplateMessage {
    let timestamp = zoned_timestamp(Utc::now(), &params.timezone);

    let mut data = BTreeMap::new();
    data.insert(
        "title".to_string(),
        TemplateField {
            value: params.title.clone(),
        },
    );
    data.insert(
        "content".to_string(),
        TemplateField {
            value: params.content.clone(),
        },
    );

    TemplateMessage {
        touser: params.userid.clone(),
        template_id: params.template_id.clone(),
        url: detail_url(&params.base_url, &params.title, &params.content, &timestamp),
        data,
    }
}

/// Render `now` in the named IANA zone. An unknown or empty zone name falls
/// back to the process-local zone; never an error.
fn zoned_timestamp(now: DateTime<Utc>, zone: &str) -> String {
    match zone.parse::<Tz>() {
        Ok(tz) => now.with_timezone(&tz).format(TIMESTAMP_FORMAT).to_string(),
        Err(_) => now.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
    }
}

/// Detail-page link carrying the message fields as a percent-encoded query.
/// base_url is not validated; a malformed base yields a malformed link.
fn detail_url(base_url: &str, title: &str, content: &str, timestamp: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("title", title)
        .append_pair("message", content)
        .append_pair("date", timestamp)
        .finish();

    format!("{base_url}/detail?{query}")
}
