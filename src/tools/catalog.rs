//! The fixed tool set: thin wrappers over public JSON APIs.
//!
//! Every wrapper is one outbound GET followed by a JSON decode; the result is
//! returned pretty-printed so the LLM can read it. Google/Walmart/YouTube
//! engines go through SerpAPI and need `SERP_API_KEY`.

use std::sync::Arc;

use tracing::debug;

use crate::config::AgentConfig;
use crate::tools::error::ToolError;
use crate::tools::name::ToolName;
use crate::tools::registry::ToolRegistry;
use crate::tools::traits::Tool;

const SERPAPI_URL: &str = "https://serpapi.com/search";

/// URL + query-string builder for one endpoint. Non-capturing so the catalog
/// below stays a plain table.
type Endpoint = fn(&str) -> (String, Vec<(&'static str, String)>);

/// A tool backed by a single JSON-over-HTTP GET.
pub struct JsonApiTool {
    name: ToolName,
    description: &'static str,
    endpoint: Endpoint,
    client: reqwest::Client,
}

impl JsonApiTool {
    pub fn new(name: ToolName, description: &'static str, endpoint: Endpoint) -> Self {
        Self {
            name,
            description,
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    /// The URL and query parameters this tool would request for `query`.
    pub fn endpoint_for(&self, query: &str) -> (String, Vec<(&'static str, String)>) {
        (self.endpoint)(query)
    }
}

#[async_trait::async_trait]
impl Tool for JsonApiTool {
    fn name(&self) -> ToolName {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    async fn call(&self, query: &str) -> Result<String, ToolError> {
        let (url, params) = (self.endpoint)(query);
        debug!(tool = %self.name, %url, "GET");
        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;
        let value: serde_json::Value = response.json().await?;
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// A SerpAPI-backed search tool: fixed engine, one query parameter.
pub struct SerpTool {
    name: ToolName,
    description: &'static str,
    engine: &'static str,
    query_param: &'static str,
    extra: &'static [(&'static str, &'static str)],
    api_key: Option<String>,
    client: reqwest::Client,
}

impl SerpTool {
    pub fn new(
        name: ToolName,
        description: &'static str,
        engine: &'static str,
        query_param: &'static str,
        extra: &'static [(&'static str, &'static str)],
        api_key: Option<String>,
    ) -> Self {
        Self {
            name,
            description,
            engine,
            query_param,
            extra,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl Tool for SerpTool {
    fn name(&self) -> ToolName {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    async fn call(&self, query: &str) -> Result<String, ToolError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| ToolError::ExecutionError {
            name: self.name.to_string(),
            reason: "SERP_API_KEY is not configured".to_string(),
        })?;
        let mut params: Vec<(&str, String)> = vec![
            ("engine", self.engine.to_string()),
            (self.query_param, query.to_string()),
            ("api_key", api_key.to_string()),
        ];
        for &(key, value) in self.extra {
            params.push((key, value.to_string()));
        }
        debug!(tool = %self.name, engine = self.engine, "GET");
        let response = self
            .client
            .get(SERPAPI_URL)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;
        let value: serde_json::Value = response.json().await?;
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// Direct public-API tools (no key required).
pub fn api_tools() -> Vec<JsonApiTool> {
    vec![
        JsonApiTool::new(ToolName::WikiSearch, "Search Wikipedia articles", |q| {
            (
                "https://en.wikipedia.org/w/api.php".to_string(),
                vec![
                    ("action", "query".to_string()),
                    ("list", "search".to_string()),
                    ("srsearch", q.to_string()),
                    ("format", "json".to_string()),
                ],
            )
        }),
        JsonApiTool::new(ToolName::CatFact, "A random cat fact", |_q| {
            ("https://catfact.ninja/fact".to_string(), vec![])
        }),
        JsonApiTool::new(ToolName::MultipleCatFacts, "Several random cat facts", |q| {
            let limit = q.trim().parse::<u8>().unwrap_or(5);
            (
                "https://catfact.ninja/facts".to_string(),
                vec![("limit", limit.to_string())],
            )
        }),
        JsonApiTool::new(ToolName::CatBreeds, "List of cat breeds", |_q| {
            ("https://catfact.ninja/breeds".to_string(), vec![])
        }),
        JsonApiTool::new(ToolName::DogImage, "A random dog image", |_q| {
            ("https://dog.ceo/api/breeds/image/random".to_string(), vec![])
        }),
        JsonApiTool::new(ToolName::MultipleDogImages, "Several random dog images", |q| {
            let number = q.trim().parse::<u8>().unwrap_or(3);
            (
                format!("https://dog.ceo/api/breeds/image/random/{number}"),
                vec![],
            )
        }),
        JsonApiTool::new(ToolName::DogBreedImage, "A random image of a dog breed", |q| {
            (
                format!(
                    "https://dog.ceo/api/breed/{}/images/random",
                    q.trim().to_ascii_lowercase()
                ),
                vec![],
            )
        }),
        JsonApiTool::new(ToolName::RandomJoke, "A random joke", |_q| {
            (
                "https://official-joke-api.appspot.com/random_joke".to_string(),
                vec![],
            )
        }),
        JsonApiTool::new(ToolName::TenRandomJokes, "Ten random jokes", |_q| {
            (
                "https://official-joke-api.appspot.com/random_ten".to_string(),
                vec![],
            )
        }),
        JsonApiTool::new(ToolName::RandomJokeByType, "A random joke of a given type", |q| {
            (
                format!(
                    "https://official-joke-api.appspot.com/jokes/{}/random",
                    q.trim().to_ascii_lowercase()
                ),
                vec![],
            )
        }),
        JsonApiTool::new(ToolName::PredictAge, "Predicted age for a first name", |q| {
            (
                "https://api.agify.io".to_string(),
                vec![("name", q.trim().to_string())],
            )
        }),
        JsonApiTool::new(ToolName::PredictGender, "Predicted gender for a first name", |q| {
            (
                "https://api.genderize.io".to_string(),
                vec![("name", q.trim().to_string())],
            )
        }),
        JsonApiTool::new(
            ToolName::PredictNationality,
            "Predicted nationality for a first name",
            |q| {
                (
                    "https://api.nationalize.io".to_string(),
                    vec![("name", q.trim().to_string())],
                )
            },
        ),
        JsonApiTool::new(ToolName::ZipInfo, "Location info for a US zip code", |q| {
            (format!("https://api.zippopotam.us/us/{}", q.trim()), vec![])
        }),
        JsonApiTool::new(ToolName::PublicIp, "The caller's public IP address", |_q| {
            (
                "https://api.ipify.org".to_string(),
                vec![("format", "json".to_string())],
            )
        }),
        JsonApiTool::new(ToolName::ArtworkData, "Artwork search at the Art Institute of Chicago", |q| {
            (
                "https://api.artic.edu/api/v1/artworks/search".to_string(),
                vec![("q", q.to_string())],
            )
        }),
        JsonApiTool::new(ToolName::IssLocation, "Current ISS position", |_q| {
            ("http://api.open-notify.org/iss-now.json".to_string(), vec![])
        }),
        JsonApiTool::new(ToolName::Lyrics, "Song lyrics, query as 'artist - title'", |q| {
            let (artist, title) = q.split_once('-').unwrap_or((q, ""));
            (
                format!("https://api.lyrics.ovh/v1/{}/{}", artist.trim(), title.trim()),
                vec![],
            )
        }),
        JsonApiTool::new(ToolName::RandomFoxImage, "A random fox image", |_q| {
            ("https://randomfox.ca/floof/".to_string(), vec![])
        }),
        JsonApiTool::new(ToolName::TriviaQuestions, "Random trivia questions", |q| {
            let amount = q.trim().parse::<u8>().unwrap_or(5);
            (
                "https://opentdb.com/api.php".to_string(),
                vec![("amount", amount.to_string())],
            )
        }),
        JsonApiTool::new(ToolName::ExchangeRates, "Exchange rates for a base currency", |q| {
            let base = if q.trim().is_empty() {
                "USD".to_string()
            } else {
                q.trim().to_ascii_uppercase()
            };
            (format!("https://open.er-api.com/v6/latest/{base}"), vec![])
        }),
    ]
}

/// SerpAPI-backed search tools.
pub fn serp_tools(api_key: Option<String>) -> Vec<SerpTool> {
    let engines: [(ToolName, &'static str, &'static str, &'static str, &'static [(&'static str, &'static str)]); 20] = [
        (ToolName::GoogleSearch, "Google web search", "google", "q", &[]),
        (ToolName::GoogleImageSearch, "Google image search", "google_images", "q", &[]),
        (ToolName::GoogleNewsSearch, "Google news search", "google_news", "q", &[]),
        (ToolName::GoogleMapsSearch, "Google Maps place search", "google_maps", "q", &[]),
        (ToolName::GoogleMapsPlace, "Google Maps place details by place_id", "google_maps", "place_id", &[]),
        (ToolName::GoogleJobsSearch, "Google jobs search", "google_jobs", "q", &[]),
        (ToolName::GoogleShoppingSearch, "Google shopping search", "google_shopping", "q", &[]),
        (ToolName::GoogleTrendsInterest, "Google Trends interest over time", "google_trends", "q", &[("data_type", "TIMESERIES")]),
        (ToolName::GoogleTrendsBreakdown, "Google Trends compared breakdown", "google_trends", "q", &[("data_type", "TIMESERIES")]),
        (ToolName::GoogleTrendsRegion, "Google Trends interest by region", "google_trends", "q", &[("data_type", "GEO_MAP_0")]),
        (ToolName::GoogleLensSearch, "Google Lens search by image url", "google_lens", "url", &[]),
        (ToolName::GooglePlaySearch, "Google Play store search", "google_play", "q", &[]),
        (ToolName::GoogleLocalSearch, "Google local businesses search", "google_local", "q", &[]),
        (ToolName::GoogleEventsSearch, "Google events search", "google_events", "q", &[]),
        (ToolName::GoogleVideosSearch, "Google videos search", "google_videos", "q", &[]),
        (ToolName::GoogleReverseImageSearch, "Google reverse image search", "google_reverse_image", "image_url", &[]),
        (ToolName::GoogleFinanceSearch, "Google Finance quote search", "google_finance", "q", &[]),
        (ToolName::GoogleFinanceCurrencyExchange, "Google Finance currency exchange rate", "google_finance", "q", &[]),
        (ToolName::GoogleLocationSpecificSearch, "Google search scoped to a location", "google", "q", &[]),
        (ToolName::WalmartSearch, "Walmart product search", "walmart", "query", &[]),
    ];
    let mut tools = Vec::with_capacity(engines.len() + 1);
    for (name, description, engine, query_param, extra) in engines {
        tools.push(SerpTool::new(
            name,
            description,
            engine,
            query_param,
            extra,
            api_key.clone(),
        ));
    }
    tools.push(SerpTool::new(
        ToolName::YoutubeSearch,
        "YouTube video search",
        "youtube",
        "search_query",
        &[],
        api_key,
    ));
    tools
}

/// Build the full fixed tool set: every `ToolName` except the sentinel.
pub fn default_registry(config: &AgentConfig) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    for tool in api_tools() {
        registry.register(Arc::new(tool));
    }
    for tool in serp_tools(config.serp_api_key.clone()) {
        registry.register(Arc::new(tool));
    }
    registry
}
