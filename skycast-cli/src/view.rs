use rand::seq::SliceRandom;
use skycast_core::{CurrentWeather, FetchState, TempUnit};

/// Friendly lines shown when a fetch fails; one is picked at random.
const FRIENDLY_MESSAGES: [&str; 5] = [
    "Something went wrong. Please try again.",
    "We couldn't fetch the weather. Maybe the clouds are blocking the signal?",
    "A minor hiccup occurred. Try again in a bit.",
    "Looks like the connection took a coffee break. Please retry.",
    "Weather data failed to load. Let's give it another go soon.",
];

/// Render the state after a completed fetch: a weather card on success, the
/// error view on failure, a placeholder before the first fetch.
pub fn render(state: &FetchState, unit: TempUnit) -> String {
    if let Some(weather) = &state.result {
        render_card(weather, unit)
    } else if let Some(message) = &state.error_message {
        render_error(message)
    } else {
        "No weather fetched yet.".to_string()
    }
}

fn render_card(weather: &CurrentWeather, unit: TempUnit) -> String {
    let current = &weather.current;

    let mut out = String::new();
    out.push_str(&format!("{}\n", weather.location_label()));
    out.push_str(&format!(
        "  {:.1}{}  {}\n",
        current.temperature(unit),
        unit.suffix(),
        current.condition.text
    ));
    out.push_str(&format!("  Feels like {:.1}{}\n", current.feels_like(unit), unit.suffix()));
    out.push_str(&format!("  Icon: {}", current.condition.icon_url()));
    out
}

fn render_error(detail: &str) -> String {
    format!("Weather unavailable\n  {}\n  ({detail})", friendly_message())
}

fn friendly_message() -> &'static str {
    let mut rng = rand::thread_rng();
    FRIENDLY_MESSAGES.choose(&mut rng).copied().unwrap_or(FRIENDLY_MESSAGES[0])
}
