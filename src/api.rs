use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use std::path::Path;
use std::time::Duration;

/// Default dataset source (REST Countries v3.1, restricted to the fields we use)
pub const DEFAULT_SOURCE_URL: &str = "https://restcountries.com/v3.1/all?fields=name,cca3,continents,region,subregion,population,area,capital,flag,flags";

/// One country record, immutable once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub name: String,
    pub official_name: Option<String>,
    pub code: Option<String>,
    pub continents: Vec<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub population: Option<u64>,
    pub area: Option<f64>,
    pub capital: Vec<String>,
    /// Flag emoji
    pub flag: Option<String>,
    /// Flag image reference (svg preferred, png fallback)
    pub flag_url: Option<String>,
}

impl Country {
    /// Minimal record with only a name; remaining fields absent
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            official_name: None,
            code: None,
            continents: Vec::new(),
            region: None,
            subregion: None,
            population: None,
            area: None,
            capital: Vec::new(),
            flag: None,
            flag_url: None,
        }
    }

    pub fn in_continent(&self, continent: &str) -> bool {
        self.continents.iter().any(|c| c == continent)
    }
}

#[derive(Debug, Deserialize)]
struct RawName {
    common: String,
    #[serde(default)]
    official: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFlags {
    #[serde(default)]
    svg: Option<String>,
    #[serde(default)]
    png: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCountry {
    name: RawName,
    #[serde(default)]
    cca3: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    continents: Vec<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    subregion: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_count")]
    population: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_lenient_measure")]
    area: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    capital: Vec<String>,
    #[serde(default)]
    flag: Option<String>,
    #[serde(default)]
    flags: Option<RawFlags>,
}

impl From<RawCountry> for Country {
    fn from(raw: RawCountry) -> Self {
        let flags = raw.flags.unwrap_or_default();
        Self {
            name: raw.name.common,
            official_name: raw.name.official.filter(|s| !s.is_empty()),
            code: raw.cca3.filter(|s| !s.is_empty()),
            continents: raw.continents,
            region: raw.region.filter(|s| !s.is_empty()),
            subregion: raw.subregion.filter(|s| !s.is_empty()),
            population: raw.population,
            area: raw.area,
            capital: raw.capital,
            flag: raw.flag.filter(|s| !s.is_empty()),
            flag_url: flags.svg.or(flags.png).filter(|s| !s.is_empty()),
        }
    }
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Non-negative integer or missing; anything else (strings, negatives, fractions) is missing
fn deserialize_lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        _ => None,
    }))
}

/// Finite non-negative real or missing
fn deserialize_lenient_measure<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0)
            // -0.0 passes the check above; normalize it
            .map(|f| if f == 0.0 { 0.0 } else { f }),
        _ => None,
    }))
}

/// Parse a REST Countries JSON array into records, preserving source order
pub fn parse_countries(text: &str) -> Result<Vec<Country>> {
    let raw: Vec<RawCountry> =
        serde_json::from_str(text).context("Failed to parse countries response")?;
    Ok(raw.into_iter().map(Country::from).collect())
}

/// Read and parse a local JSON file in the REST Countries format
pub fn load_countries_file(path: &Path) -> Result<Vec<Country>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file {}", path.display()))?;
    parse_countries(&text)
}

#[derive(Clone)]
pub struct CountriesClient {
    source_url: String,
    client: Client,
}

impl CountriesClient {
    pub fn new(source_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { source_url, client })
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Fetch the full dataset in one request
    pub async fn fetch_countries(&self) -> Result<Vec<Country>> {
        let response = self
            .client
            .get(&self.source_url)
            .send()
            .await
            .context("Failed to fetch countries")?;

        let response = response
            .error_for_status()
            .context("Countries source returned an error status")?;

        let text = response.text().await.context("Failed to read response")?;
        parse_countries(&text)
    }
}
