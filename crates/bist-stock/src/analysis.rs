//! Analysis result types
//!
//! Field and enum names follow the JSON contract declared to the model in
//! [`response_schema`]: camelCase keys, `Buy|Sell|Neutral` signals,
//! `Day|Week|Month` periods and `UP|DOWN|NEUTRAL` directions.

use bist_llm::Schema;
use serde::{Deserialize, Serialize};

/// Placeholder shown for fundamentals that could not be retrieved
pub const UNAVAILABLE: &str = "Yok";

const FALLBACK_REASONING: &str = "Veri alınamadı.";
const FALLBACK_SUMMARY: &str = "Gerçek zamanlı veri alınamadı. Lütfen daha sonra tekrar deneyiniz.";

/// Buy/sell classification of a technical indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    Neutral,
}

impl Signal {
    pub const ALL: [Signal; 3] = [Signal::Buy, Signal::Sell, Signal::Neutral];

    /// Wire value
    pub fn as_str(self) -> &'static str {
        match self {
            Signal::Buy => "Buy",
            Signal::Sell => "Sell",
            Signal::Neutral => "Neutral",
        }
    }
}

/// Time window a prediction covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Horizon {
    Day,
    Week,
    Month,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::Day, Horizon::Week, Horizon::Month];

    /// Wire value
    pub fn as_str(self) -> &'static str {
        match self {
            Horizon::Day => "Day",
            Horizon::Week => "Week",
            Horizon::Month => "Month",
        }
    }
}

/// Expected price direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Up, Direction::Down, Direction::Neutral];

    /// Wire value
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Neutral => "NEUTRAL",
        }
    }
}

/// Headline fundamentals, kept as display strings (e.g. `"42,10 TL"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundamentalSnapshot {
    pub price: String,
    pub pe_ratio: String,
    pub market_cap: String,
    pub volume: String,
}

/// A technical indicator reading such as RSI or MACD
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalSignal {
    pub name: String,
    pub value: String,
    pub signal: Signal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    #[serde(rename = "period")]
    pub horizon: Horizon,
    pub direction: Direction,
    /// Free text, e.g. `"+1.5%"` or `"1.5-2.0%"`
    pub percentage_change: String,
    pub reasoning: String,
}

/// Complete analysis of one ticker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub fundamentals: FundamentalSnapshot,
    pub technicals: Vec<TechnicalSignal>,
    pub predictions: Vec<Prediction>,
    pub summary: String,
    /// Local wall-clock time (`HH:MM:SS`) at which the result was received.
    /// Never taken from the model's answer.
    #[serde(skip_deserializing)]
    pub retrieved_at: String,
}

impl AnalysisResult {
    /// The fixed payload substituted when the model cannot be reached or
    /// answers with something unusable
    pub fn fallback(retrieved_at: impl Into<String>) -> Self {
        Self {
            fundamentals: FundamentalSnapshot {
                price: UNAVAILABLE.to_string(),
                pe_ratio: UNAVAILABLE.to_string(),
                market_cap: UNAVAILABLE.to_string(),
                volume: UNAVAILABLE.to_string(),
            },
            technicals: vec![
                TechnicalSignal {
                    name: "RSI".to_string(),
                    value: "50".to_string(),
                    signal: Signal::Neutral,
                },
                TechnicalSignal {
                    name: "MACD".to_string(),
                    value: "0".to_string(),
                    signal: Signal::Neutral,
                },
            ],
            predictions: Horizon::ALL
                .into_iter()
                .map(|horizon| Prediction {
                    horizon,
                    direction: Direction::Neutral,
                    percentage_change: "0%".to_string(),
                    reasoning: FALLBACK_REASONING.to_string(),
                })
                .collect(),
            summary: FALLBACK_SUMMARY.to_string(),
            retrieved_at: retrieved_at.into(),
        }
    }
}

/// Result of [`AnalysisClient::analyze`](crate::AnalysisClient::analyze)
///
/// Both variants are successes and render the same way; `Degraded` carries
/// the [`AnalysisResult::fallback`] payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Analysis produced by the model
    Live(AnalysisResult),
    /// Fallback payload after a service or parse failure
    Degraded(AnalysisResult),
}

impl AnalysisOutcome {
    pub fn result(&self) -> &AnalysisResult {
        match self {
            AnalysisOutcome::Live(result) | AnalysisOutcome::Degraded(result) => result,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, AnalysisOutcome::Degraded(_))
    }
}

/// Current local wall-clock time as `HH:MM:SS`
pub fn local_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// JSON shape the model must answer with
///
/// Every property is required and the enum vocabularies come from
/// [`Signal`], [`Horizon`] and [`Direction`].
pub fn response_schema() -> Schema {
    let fundamentals = Schema::object(vec![
        ("price", Schema::string().with_description("Latest price, e.g. \"42,10 TL\"")),
        ("peRatio", Schema::string()),
        ("marketCap", Schema::string()),
        ("volume", Schema::string()),
    ]);

    let technical = Schema::object(vec![
        ("name", Schema::string()),
        ("value", Schema::string()),
        ("signal", Schema::string_enum(Signal::ALL.map(Signal::as_str))),
    ]);

    let prediction = Schema::object(vec![
        ("period", Schema::string_enum(Horizon::ALL.map(Horizon::as_str))),
        ("direction", Schema::string_enum(Direction::ALL.map(Direction::as_str))),
        ("percentageChange", Schema::string()),
        ("reasoning", Schema::string()),
    ]);

    Schema::object(vec![
        ("fundamentals", fundamentals),
        ("technicals", Schema::array(technical)),
        ("predictions", Schema::array(prediction)),
        ("summary", Schema::string().with_description("Two-sentence outlook")),
    ])
}
