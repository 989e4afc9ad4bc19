use reqwest::Url;
use tera::Tera;

use crate::config::TEMPLATE_GLOB;
use crate::error::AppError;

/// Initialize the Tera template engine
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::new(TEMPLATE_GLOB)?;

    tera.register_filter("url_host", url_host_filter);

    Ok(tera)
}

/// Host part of an http(s) URL, e.g. "http://10.0.2.20:8000/x" -> "10.0.2.20"
fn url_host_filter(
    value: &tera::Value,
    _args: &std::collections::HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("url_host filter expects a string"))?;

    let host = url_host(s).ok_or_else(|| tera::Error::msg(format!("no host in URL \"{}\"", s)))?;
    Ok(tera::Value::String(host))
}

fn url_host(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}
