//! Write-body encodings for create and update calls.

use reqwest::RequestBuilder;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use serde::Deserialize;

use fieldops_domain::FormFields;

/// How create/update bodies are encoded. One encoding is used for every entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteEncoding {
    /// `multipart/form-data`
    #[default]
    Multipart,
    /// `application/x-www-form-urlencoded`
    Urlencoded,
}

impl WriteEncoding {
    pub fn apply(self, builder: RequestBuilder, fields: &FormFields) -> RequestBuilder {
        match self {
            Self::Multipart => builder.multipart(multipart_form(fields)),
            Self::Urlencoded => builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(urlencoded_body(fields)),
        }
    }
}

fn multipart_form(fields: &FormFields) -> Form {
    fields
        .pairs()
        .iter()
        .fold(Form::new(), |form, (name, value)| form.text(*name, value.clone()))
}

/// Repeated keys are kept in order, matching how many-valued fields are sent.
pub fn urlencoded_body(fields: &FormFields) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.pairs().iter().map(|(k, v)| (*k, v.as_str())))
        .finish()
}
