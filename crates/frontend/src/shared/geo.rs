//! Client for the external state/city catalog used by the branch and
//! student forms. State options carry the ISO2 code as their value;
//! cities are identified by name.

use contracts::domain::common::SelectOption;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::shared::data::config::store_config;

const GEO_API_BASE: &str = "https://api.countrystatecity.in/v1";

#[derive(Debug, Deserialize)]
struct StateDto {
    iso2: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CityDto {
    name: String,
}

pub async fn indian_states() -> Result<Vec<SelectOption>, String> {
    let response = Request::get(&format!("{}/countries/IN/states", GEO_API_BASE))
        .header("X-CSCAPI-KEY", &store_config().geo_api_key)
        .send()
        .await
        .map_err(|e| format!("Failed to load states: {}", e))?;

    if !response.ok() {
        return Err(format!("State lookup failed: {}", response.status()));
    }

    let states: Vec<StateDto> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse states: {}", e))?;
    Ok(states
        .into_iter()
        .map(|state| SelectOption::plain(state.iso2, state.name))
        .collect())
}

pub async fn cities_of_state(state_code: &str) -> Result<Vec<SelectOption>, String> {
    let response = Request::get(&format!(
        "{}/countries/IN/states/{}/cities",
        GEO_API_BASE, state_code
    ))
    .header("X-CSCAPI-KEY", &store_config().geo_api_key)
    .send()
    .await
    .map_err(|e| format!("Failed to load cities: {}", e))?;

    if !response.ok() {
        return Err(format!("City lookup failed: {}", response.status()));
    }

    let cities: Vec<CityDto> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse cities: {}", e))?;
    Ok(cities
        .into_iter()
        .map(|city| SelectOption::plain(city.name.clone(), city.name))
        .collect())
}
