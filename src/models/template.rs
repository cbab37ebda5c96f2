use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::content::Content;

pub const HEADLINE_COLOR: &str = "#173177";
pub const WEATHER_COLOR: &str = "#00FF00";
pub const NEWS_COLOR: &str = "#FF0000";
pub const DISCOUNT_COLOR: &str = "#FFD700";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateField {
    pub value: String,
    pub color: String,
}

/// A template message; `data` keys match the `{{key.DATA}}` slots of the template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateMessage {
    pub touser: String,
    pub template_id: String,
    pub data: BTreeMap<String, TemplateField>,
}

impl TemplateMessage {
    pub fn new(touser: &str, template_id: &str) -> Self {
        Self {
            touser: touser.to_string(),
            template_id: template_id.to_string(),
            data: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<String>, color: &str) -> Self {
        self.data.insert(
            name.to_string(),
            TemplateField {
                value: value.into(),
                color: color.to_string(),
            },
        );
        self
    }

    pub fn daily_digest(
        touser: &str,
        template_id: &str,
        content: &Content,
        timestamp: &str,
    ) -> Self {
        Self::new(touser, template_id)
            .with_field("date", timestamp, HEADLINE_COLOR)
            .with_field("city", content.weather.city.as_str(), HEADLINE_COLOR)
            .with_field("weather", content.weather.summary(), WEATHER_COLOR)
            .with_field("news", content.news.as_str(), NEWS_COLOR)
            .with_field("discount", content.discount.as_str(), DISCOUNT_COLOR)
    }

    pub fn field(&self, name: &str) -> Option<&TemplateField> {
        self.data.get(name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendResponse {
    pub errcode: Option<i64>,
    pub errmsg: Option<String>,
    pub msgid: Option<i64>,
}

impl SendResponse {
    pub fn is_ok(&self) -> bool {
        self.errcode.unwrap_or(0) == 0
    }
}
