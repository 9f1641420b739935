use std::fmt;
use std::str::FromStr;

use super::error::ToolError;

/// The closed set of tool identifiers the decision parser recognizes, plus
/// the `None` sentinel meaning "no tool needed, keep thinking."
///
/// The wire form is the SCREAMING_SNAKE name (`as_str`); lookup is
/// case-insensitive because LLMs are inconsistent about casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    WikiSearch,
    GoogleSearch,
    MultipleCatFacts,
    CatFact,
    CatBreeds,
    DogImage,
    MultipleDogImages,
    DogBreedImage,
    RandomJoke,
    TenRandomJokes,
    RandomJokeByType,
    PredictAge,
    PredictGender,
    PredictNationality,
    ZipInfo,
    PublicIp,
    ArtworkData,
    IssLocation,
    Lyrics,
    RandomFoxImage,
    TriviaQuestions,
    ExchangeRates,
    GoogleImageSearch,
    GoogleNewsSearch,
    GoogleMapsSearch,
    GoogleMapsPlace,
    GoogleJobsSearch,
    GoogleShoppingSearch,
    GoogleTrendsInterest,
    GoogleTrendsBreakdown,
    GoogleTrendsRegion,
    GoogleLensSearch,
    GooglePlaySearch,
    GoogleLocalSearch,
    GoogleEventsSearch,
    GoogleVideosSearch,
    GoogleReverseImageSearch,
    GoogleFinanceSearch,
    GoogleFinanceCurrencyExchange,
    GoogleLocationSpecificSearch,
    WalmartSearch,
    YoutubeSearch,
    /// Sentinel: the model decided no tool is needed this turn.
    None,
}

impl ToolName {
    /// Every dispatchable tool, excluding the `None` sentinel.
    pub const ALL: [ToolName; 42] = [
        ToolName::WikiSearch,
        ToolName::GoogleSearch,
        ToolName::MultipleCatFacts,
        ToolName::CatFact,
        ToolName::CatBreeds,
        ToolName::DogImage,
        ToolName::MultipleDogImages,
        ToolName::DogBreedImage,
        ToolName::RandomJoke,
        ToolName::TenRandomJokes,
        ToolName::RandomJokeByType,
        ToolName::PredictAge,
        ToolName::PredictGender,
        ToolName::PredictNationality,
        ToolName::ZipInfo,
        ToolName::PublicIp,
        ToolName::ArtworkData,
        ToolName::IssLocation,
        ToolName::Lyrics,
        ToolName::RandomFoxImage,
        ToolName::TriviaQuestions,
        ToolName::ExchangeRates,
        ToolName::GoogleImageSearch,
        ToolName::GoogleNewsSearch,
        ToolName::GoogleMapsSearch,
        ToolName::GoogleMapsPlace,
        ToolName::GoogleJobsSearch,
        ToolName::GoogleShoppingSearch,
        ToolName::GoogleTrendsInterest,
        ToolName::GoogleTrendsBreakdown,
        ToolName::GoogleTrendsRegion,
        ToolName::GoogleLensSearch,
        ToolName::GooglePlaySearch,
        ToolName::GoogleLocalSearch,
        ToolName::GoogleEventsSearch,
        ToolName::GoogleVideosSearch,
        ToolName::GoogleReverseImageSearch,
        ToolName::GoogleFinanceSearch,
        ToolName::GoogleFinanceCurrencyExchange,
        ToolName::GoogleLocationSpecificSearch,
        ToolName::WalmartSearch,
        ToolName::YoutubeSearch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::WikiSearch => "WIKI_SEARCH",
            ToolName::GoogleSearch => "GOOGLE_SEARCH",
            ToolName::MultipleCatFacts => "MULTIPLE_CAT_FACTS",
            ToolName::CatFact => "CAT_FACT",
            ToolName::CatBreeds => "CAT_BREEDS",
            ToolName::DogImage => "DOG_IMAGE",
            ToolName::MultipleDogImages => "MULTIPLE_DOG_IMAGES",
            ToolName::DogBreedImage => "DOG_BREED_IMAGE",
            ToolName::RandomJoke => "RANDOM_JOKE",
            ToolName::TenRandomJokes => "TEN_RANDOM_JOKES",
            ToolName::RandomJokeByType => "RANDOM_JOKE_BY_TYPE",
            ToolName::PredictAge => "PREDICT_AGE",
            ToolName::PredictGender => "PREDICT_GENDER",
            ToolName::PredictNationality => "PREDICT_NATIONALITY",
            ToolName::ZipInfo => "ZIP_INFO",
            ToolName::PublicIp => "PUBLIC_IP",
            ToolName::ArtworkData => "ARTWORK_DATA",
            ToolName::IssLocation => "ISS_LOCATION",
            ToolName::Lyrics => "LYRICS",
            ToolName::RandomFoxImage => "RANDOM_FOX_IMAGE",
            ToolName::TriviaQuestions => "TRIVIA_QUESTIONS",
            ToolName::ExchangeRates => "EXCHANGE_RATES",
            ToolName::GoogleImageSearch => "GOOGLE_IMAGE_SEARCH",
            ToolName::GoogleNewsSearch => "GOOGLE_NEWS_SEARCH",
            ToolName::GoogleMapsSearch => "GOOGLE_MAPS_SEARCH",
            ToolName::GoogleMapsPlace => "GOOGLE_MAPS_PLACE",
            ToolName::GoogleJobsSearch => "GOOGLE_JOBS_SEARCH",
            ToolName::GoogleShoppingSearch => "GOOGLE_SHOPPING_SEARCH",
            ToolName::GoogleTrendsInterest => "GOOGLE_TRENDS_INTEREST",
            ToolName::GoogleTrendsBreakdown => "GOOGLE_TRENDS_BREAKDOWN",
            ToolName::GoogleTrendsRegion => "GOOGLE_TRENDS_REGION",
            ToolName::GoogleLensSearch => "GOOGLE_LENS_SEARCH",
            ToolName::GooglePlaySearch => "GOOGLE_PLAY_SEARCH",
            ToolName::GoogleLocalSearch => "GOOGLE_LOCAL_SEARCH",
            ToolName::GoogleEventsSearch => "GOOGLE_EVENTS_SEARCH",
            ToolName::GoogleVideosSearch => "GOOGLE_VIDEOS_SEARCH",
            ToolName::GoogleReverseImageSearch => "GOOGLE_REVERSE_IMAGE_SEARCH",
            ToolName::GoogleFinanceSearch => "GOOGLE_FINANCE_SEARCH",
            ToolName::GoogleFinanceCurrencyExchange => "GOOGLE_FINANCE_CURRENCY_EXCHANGE",
            ToolName::GoogleLocationSpecificSearch => "GOOGLE_LOCATION_SPECIFIC_SEARCH",
            ToolName::WalmartSearch => "WALMART_SEARCH",
            ToolName::YoutubeSearch => "YOUTUBE_SEARCH",
            ToolName::None => "NONE",
        }
    }

    /// Case-insensitive lookup, including the `NONE` sentinel.
    pub fn parse(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        if upper == "NONE" {
            return Some(ToolName::None);
        }
        Self::ALL.iter().copied().find(|n| n.as_str() == upper)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ToolError::UnknownName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_round_trips_for_every_tool() {
        for name in ToolName::ALL {
            assert_eq!(ToolName::parse(name.as_str()), Some(name));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(ToolName::parse("cat_fact"), Some(ToolName::CatFact));
        assert_eq!(ToolName::parse(" Iss_Location "), Some(ToolName::IssLocation));
        assert_eq!(ToolName::parse("none"), Some(ToolName::None));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(ToolName::parse("FROBNICATE"), None);
        assert!("FROBNICATE".parse::<ToolName>().is_err());
    }
}
