use crate::{FetchError, model::CurrentWeather, provider::WeatherProvider};

/// Minimum city length before a fetch may be triggered. Shorter inputs are
/// rejected at the caller, before the controller is ever invoked.
pub const MIN_CITY_LEN: usize = 3;

/// Observable state of the fetch flow, read by the presentation layer.
///
/// After any completed fetch, exactly one of `result` / `error_message` is
/// present; before the first fetch both are absent. `is_loading` is true only
/// while a request is in flight.
#[derive(Debug, Clone, Default)]
pub struct FetchState {
    /// City input, the one field the presentation layer writes.
    pub city: String,
    pub is_loading: bool,
    pub result: Option<CurrentWeather>,
    pub error_message: Option<String>,
}

/// Orchestrates a weather fetch against a provider and folds the outcome into
/// [`FetchState`].
#[derive(Debug)]
pub struct WeatherController {
    provider: Box<dyn WeatherProvider>,
    state: FetchState,
}

impl WeatherController {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider, state: FetchState::default() }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.state.city = city.into();
    }

    /// Caller-side precondition for triggering [`fetch`](Self::fetch).
    pub fn can_fetch(&self) -> bool {
        self.state.city.trim().chars().count() >= MIN_CITY_LEN
    }

    /// Fetch current conditions for the city in [`FetchState`].
    ///
    /// Issues exactly one request. On success the result is stored and any
    /// prior error cleared; on failure the error message is stored and any
    /// prior result cleared, so stale data is never shown alongside an error.
    /// Taking `&mut self` rules out a second fetch while one is in flight.
    pub async fn fetch(&mut self) {
        self.state.is_loading = true;

        let outcome = match validated_city(&self.state.city) {
            Ok(city) => self.provider.current(city).await,
            Err(err) => Err(err.into()),
        };

        self.state.is_loading = false;

        match outcome {
            Ok(weather) => {
                self.state.result = Some(weather);
                self.state.error_message = None;
            }
            Err(err) => {
                let message = match err.downcast_ref::<FetchError>() {
                    Some(fetch_err) => fetch_err.to_string(),
                    None => format!("Unexpected error: {err}"),
                };
                tracing::debug!("weather fetch failed: {message}");
                self.state.result = None;
                self.state.error_message = Some(message);
            }
        }
    }
}

fn validated_city(city: &str) -> Result<&str, FetchError> {
    let city = city.trim();
    if city.is_empty() { Err(FetchError::InvalidInput) } else { Ok(city) }
}
