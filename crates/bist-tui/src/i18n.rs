//! User-facing copy
//!
//! Turkish is the default UI language. Languages without their own table use
//! the English copy; the model is still asked to answer in that language.

use bist_prompt::Language;
use bist_stock::{Horizon, Signal};

/// All UI strings for one language
///
/// Fields containing `{name}`, `{code}`, `{value}` or `{time}` are patterns
/// expanded by the helper methods below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub app_title: &'static str,
    pub search_placeholder: &'static str,
    pub no_results: &'static str,
    pub list_hints: &'static str,

    pub loading_title: &'static str,
    pub loading_text: &'static str,
    pub loading_tip: &'static str,

    pub analysis_failed: &'static str,
    pub generic_error: &'static str,
    pub go_back: &'static str,
    pub detail_hints: &'static str,

    pub current_price: &'static str,
    pub exchange_badge: &'static str,
    pub intraday_outlook: &'static str,
    pub pe_ratio: &'static str,
    pub market_cap: &'static str,
    pub volume: &'static str,
    pub ai_summary: &'static str,
    pub predictions: &'static str,
    pub technicals: &'static str,
    pub indicator_value: &'static str,
    pub last_updated: &'static str,
    pub disclaimer: &'static str,

    pub day: &'static str,
    pub week: &'static str,
    pub month: &'static str,

    pub buy: &'static str,
    pub sell: &'static str,
    pub neutral: &'static str,
}

pub static TURKISH: Labels = Labels {
    app_title: "BIST 100 Analiz",
    search_placeholder: "Sembol veya şirket ara...",
    no_results: "Hisse bulunamadı.",
    list_hints: "↑↓ Seç   Enter Analiz   Esc Çıkış",

    loading_title: "{name} inceleniyor...",
    loading_text: "Temel veriler kontrol ediliyor, teknik analiz yapılıyor ve piyasa tahminleri oluşturuluyor.",
    loading_tip: "İpucu: Yapay zeka canlı piyasa verilerini tarıyor. Bu işlem birkaç saniye sürebilir.",

    analysis_failed: "Hisse analizi yapılamadı. Lütfen tekrar deneyiniz.",
    generic_error: "Bir hata oluştu.",
    go_back: "Geri Dön",
    detail_hints: "Esc Geri   r Yenile   ↑↓ Kaydır",

    current_price: "Güncel Fiyat",
    exchange_badge: "BIST: {code}",
    intraday_outlook: "Gün İçi Görünüm",
    pe_ratio: "F/K Oranı",
    market_cap: "Piyasa Değ.",
    volume: "Hacim",
    ai_summary: "Yapay Zeka Özeti",
    predictions: "Tahminler",
    technicals: "Teknik Göstergeler",
    indicator_value: "Değer: {value}",
    last_updated: "Son güncelleme: {time}",
    disclaimer: "Yasal Uyarı: Bu uygulama, mevcut verilere dayanarak analiz ve tahminler oluşturmak için yapay zeka kullanır. Bu bir yatırım tavsiyesi değildir. Piyasa verileri gecikmeli veya tahmini olabilir.",

    day: "Gün",
    week: "Hafta",
    month: "Ay",

    buy: "Al",
    sell: "Sat",
    neutral: "Nötr",
};

pub static ENGLISH: Labels = Labels {
    app_title: "BIST 100 Analysis",
    search_placeholder: "Search symbol or company...",
    no_results: "No stocks found.",
    list_hints: "↑↓ Select   Enter Analyze   Esc Quit",

    loading_title: "Analyzing {name}...",
    loading_text: "Checking fundamentals, running technical analysis and building market forecasts.",
    loading_tip: "Tip: The AI is scanning live market data. This may take a few seconds.",

    analysis_failed: "Stock analysis failed. Please try again.",
    generic_error: "An error occurred.",
    go_back: "Go Back",
    detail_hints: "Esc Back   r Reload   ↑↓ Scroll",

    current_price: "Current Price",
    exchange_badge: "BIST: {code}",
    intraday_outlook: "Intraday Outlook",
    pe_ratio: "P/E Ratio",
    market_cap: "Market Cap",
    volume: "Volume",
    ai_summary: "AI Summary",
    predictions: "Predictions",
    technicals: "Technical Indicators",
    indicator_value: "Value: {value}",
    last_updated: "Last updated: {time}",
    disclaimer: "Disclaimer: This application uses AI to produce analyses and forecasts from available data. This is not investment advice. Market data may be delayed or estimated.",

    day: "Day",
    week: "Week",
    month: "Month",

    buy: "Buy",
    sell: "Sell",
    neutral: "Neutral",
};

impl Labels {
    /// Copy for the given language (English for languages without a table)
    pub fn for_language(language: &Language) -> &'static Labels {
        match language {
            Language::Turkish => &TURKISH,
            _ => &ENGLISH,
        }
    }

    pub fn horizon_label(&self, horizon: Horizon) -> &'static str {
        match horizon {
            Horizon::Day => self.day,
            Horizon::Week => self.week,
            Horizon::Month => self.month,
        }
    }

    pub fn signal_label(&self, signal: Signal) -> &'static str {
        match signal {
            Signal::Buy => self.buy,
            Signal::Sell => self.sell,
            Signal::Neutral => self.neutral,
        }
    }

    pub fn loading_title(&self, name: &str) -> String {
        self.loading_title.replace("{name}", name)
    }

    pub fn exchange_badge(&self, code: &str) -> String {
        self.exchange_badge.replace("{code}", code)
    }

    pub fn indicator_value(&self, value: &str) -> String {
        self.indicator_value.replace("{value}", value)
    }

    pub fn last_updated(&self, time: &str) -> String {
        self.last_updated.replace("{time}", time)
    }
}
