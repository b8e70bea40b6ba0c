use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::{FetchError, model::CurrentWeather};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com";

/// Client for WeatherAPI.com's `current.json` endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, base_url: DEFAULT_BASE_URL.to_string(), http: Client::new() }
    }

    /// Point the client at a different host. Used to target test servers.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the `current.json` request URL. The `aqi=no` flag drops the
    /// air-quality block we never read.
    fn request_url(&self, city: &str) -> Result<Url, FetchError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(FetchError::InvalidInput);
        }

        Url::parse_with_params(
            &format!("{}/v1/current.json", self.base_url),
            &[("key", self.api_key.as_str()), ("q", city), ("aqi", "no")],
        )
        .map_err(|_| FetchError::InvalidUrl)
    }

    async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, FetchError> {
        let url = self.request_url(city)?;

        let res = self.http.get(url).send().await.map_err(|err| {
            tracing::debug!("transport failure talking to WeatherAPI.com: {err}");
            FetchError::Unknown
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|err| {
            tracing::debug!("failed to read WeatherAPI.com response body: {err}");
            FetchError::Unknown
        })?;

        parse_current(status.as_u16(), &body)
    }
}

/// Validate the HTTP status and decode the body. Split out from the transport
/// so the status and schema handling can be exercised with canned responses.
fn parse_current(status: u16, body: &str) -> Result<CurrentWeather, FetchError> {
    if status != 200 {
        tracing::debug!("WeatherAPI.com request failed with status {status}: {}", truncate_body(body));
        return Err(FetchError::RequestFailed(status));
    }

    serde_json::from_str(body).map_err(|err| {
        tracing::debug!("failed to parse WeatherAPI.com current JSON: {err}");
        FetchError::DecodingFailed
    })
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, city: &str) -> Result<CurrentWeather> {
        Ok(self.fetch_current(city).await?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON_BODY: &str = r#"{"location":{"name":"London","country":"UK"},"current":{"temp_c":15.0,"temp_f":59.0,"condition":{"text":"Cloudy","icon":"//cdn/icon.png","code":1003},"feelslike_c":14.0,"feelslike_f":57.0}}"#;

    #[test]
    fn parse_current_decodes_ok_response() {
        let weather = parse_current(200, LONDON_BODY).expect("decode should succeed");

        assert_eq!(weather.location.name, "London");
        assert_eq!(weather.location.country, "UK");
        assert_eq!(weather.current.temp_c, 15.0);
        assert_eq!(weather.current.condition.code, 1003);
    }

    #[test]
    fn parse_current_rejects_non_200_status() {
        let err = parse_current(404, "not found").unwrap_err();

        assert_eq!(err, FetchError::RequestFailed(404));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn parse_current_rejects_body_missing_current_block() {
        let body = r#"{"location":{"name":"London","country":"UK"}}"#;

        let err = parse_current(200, body).unwrap_err();

        assert_eq!(err, FetchError::DecodingFailed);
    }

    #[test]
    fn parse_current_rejects_non_json_body() {
        let err = parse_current(200, "<html>oops</html>").unwrap_err();

        assert_eq!(err, FetchError::DecodingFailed);
    }

    #[test]
    fn request_url_carries_key_city_and_aqi_flag() {
        let provider = WeatherApiProvider::new("KEY".to_string());

        let url = provider.request_url("London").expect("url should build");

        assert_eq!(url.path(), "/v1/current.json");
        let pairs: Vec<(String, String)> =
            url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
        assert!(pairs.contains(&("key".to_string(), "KEY".to_string())));
        assert!(pairs.contains(&("q".to_string(), "London".to_string())));
        assert!(pairs.contains(&("aqi".to_string(), "no".to_string())));
    }

    #[test]
    fn request_url_escapes_city_input() {
        let provider = WeatherApiProvider::new("KEY".to_string());

        let url = provider.request_url("New York").expect("url should build");

        assert!(url.as_str().contains("q=New+York") || url.as_str().contains("q=New%20York"));
    }

    #[test]
    fn request_url_rejects_blank_city() {
        let provider = WeatherApiProvider::new("KEY".to_string());

        assert_eq!(provider.request_url("   ").unwrap_err(), FetchError::InvalidInput);
        assert_eq!(provider.request_url("").unwrap_err(), FetchError::InvalidInput);
    }

    #[test]
    fn request_url_rejects_malformed_base() {
        let provider = WeatherApiProvider::new("KEY".to_string()).with_base_url("not a url");

        assert_eq!(provider.request_url("London").unwrap_err(), FetchError::InvalidUrl);
    }
}
