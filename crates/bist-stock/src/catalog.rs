//! Static BIST 100 ticker catalog

use serde::{Deserialize, Serialize};

/// A tradeable instrument on Borsa Istanbul
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticker {
    /// Short uppercase symbol, unique within the catalog (e.g. `THYAO`)
    pub code: String,
    /// Company name as shown to the user
    pub display_name: String,
    /// Sector label
    pub sector: String,
}

impl Ticker {
    pub fn new(
        code: impl Into<String>,
        display_name: impl Into<String>,
        sector: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            sector: sector.into(),
        }
    }

    /// Case-insensitive substring match against code or display name
    ///
    /// `needle` must already be folded with [`fold_case`].
    fn matches(&self, needle: &str) -> bool {
        fold_case(&self.code).contains(needle) || fold_case(&self.display_name).contains(needle)
    }
}

const COMBINING_DOT_ABOVE: char = '\u{0307}';

/// Lower-case `text` so that Turkish and ASCII spellings compare equal
///
/// `I`, `İ`, `ı` and `i` all fold to `i`. The combining dot left behind by
/// lower-casing `İ` is dropped, so folding works per character and a folded
/// substring is always a substring of the folded whole.
fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(|c| match c {
            'I' | 'İ' | 'ı' => 'i'.to_lowercase(),
            other => other.to_lowercase(),
        })
        .filter(|c| *c != COMBINING_DOT_ABOVE)
        .collect()
}

const BIST100: [(&str, &str, &str); 30] = [
    ("THYAO", "Türk Hava Yolları", "Ulaştırma"),
    ("GARAN", "Garanti BBVA", "Bankacılık"),
    ("EREGL", "Ereğli Demir Çelik", "Metal Eşya"),
    ("ASELS", "Aselsan", "Savunma"),
    ("KCHOL", "Koç Holding", "Holding"),
    ("SISE", "Şişe Cam", "Cam"),
    ("AKBNK", "Akbank", "Bankacılık"),
    ("BIMAS", "BİM Mağazalar", "Perakende"),
    ("TUPRS", "Tüpraş", "Petrol"),
    ("SAHOL", "Sabancı Holding", "Holding"),
    ("PETKM", "Petkim", "Kimya"),
    ("ISCTR", "İş Bankası (C)", "Bankacılık"),
    ("FROTO", "Ford Otosan", "Otomotiv"),
    ("YKBNK", "Yapı Kredi Bankası", "Bankacılık"),
    ("EKGYO", "Emlak Konut GYO", "Gayrimenkul"),
    ("HEKTS", "Hektaş", "Tarım"),
    ("SASA", "SASA Polyester", "Tekstil"),
    ("ENKAI", "Enka İnşaat", "İnşaat"),
    ("TOASO", "Tofaş Oto. Fab.", "Otomotiv"),
    ("ARCLK", "Arçelik", "Teknoloji"),
    ("KOZAL", "Koza Altın", "Madencilik"),
    ("KRDMD", "Kardemir (D)", "Metal"),
    ("VESTL", "Vestel", "Teknoloji"),
    ("PGSUS", "Pegasus", "Ulaştırma"),
    ("TCELL", "Turkcell", "Telekomünikasyon"),
    ("TTKOM", "Türk Telekom", "Telekomünikasyon"),
    ("MGROS", "Migros Ticaret", "Perakende"),
    ("ASTOR", "Astor Enerji", "Enerji"),
    ("GUBRF", "Gübre Fabrikaları", "Kimya"),
    ("KONTR", "Kontrolmatik", "Teknoloji"),
];

/// Ordered, immutable list of tickers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerCatalog {
    tickers: Vec<Ticker>,
}

impl TickerCatalog {
    /// The 30 BIST 100 constituents offered by the terminal
    pub fn bist100() -> Self {
        Self::from_tickers(
            BIST100
                .iter()
                .map(|(code, name, sector)| Ticker::new(*code, *name, *sector))
                .collect(),
        )
    }

    /// Build a catalog from an arbitrary ordered list
    pub fn from_tickers(tickers: Vec<Ticker>) -> Self {
        Self { tickers }
    }

    /// All tickers in catalog order
    pub fn list(&self) -> &[Ticker] {
        &self.tickers
    }

    /// Tickers whose code or display name contains `query`, ignoring case
    ///
    /// Catalog order is preserved. An empty (or all-whitespace) query returns
    /// the full catalog.
    pub fn filter(&self, query: &str) -> Vec<Ticker> {
        let needle = fold_case(query.trim());
        if needle.is_empty() {
            return self.tickers.clone();
        }

        self.tickers
            .iter()
            .filter(|ticker| ticker.matches(&needle))
            .cloned()
            .collect()
    }

    /// Look up a ticker by code, ignoring case
    pub fn get(&self, code: &str) -> Option<&Ticker> {
        let code = fold_case(code.trim());
        self.tickers
            .iter()
            .find(|ticker| fold_case(&ticker.code) == code)
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}

impl Default for TickerCatalog {
    fn default() -> Self {
        Self::bist100()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(tickers: &[Ticker]) -> Vec<&str> {
        tickers.iter().map(|t| t.code.as_str()).collect()
    }

    #[test]
    fn test_bist100_catalog() {
        let catalog = TickerCatalog::bist100();
        assert_eq!(catalog.len(), 30);
        assert_eq!(catalog.list()[0].code, "THYAO");
        assert_eq!(catalog.list()[0].display_name, "Türk Hava Yolları");
        assert_eq!(catalog.list()[29].code, "KONTR");
    }

    #[test]
    fn test_codes_are_unique_and_uppercase() {
        let catalog = TickerCatalog::bist100();
        let mut seen = std::collections::HashSet::new();
        for ticker in catalog.list() {
            assert_eq!(ticker.code, ticker.code.to_uppercase());
            assert!(seen.insert(ticker.code.clone()), "duplicate {}", ticker.code);
        }
    }

    #[test]
    fn test_empty_query_returns_full_catalog() {
        let catalog = TickerCatalog::bist100();
        assert_eq!(catalog.filter(""), catalog.list());
        assert_eq!(catalog.filter("   "), catalog.list());
    }

    #[test]
    fn test_filter_by_code_any_case() {
        let catalog = TickerCatalog::bist100();
        for query in ["gar", "GAR", "GaR"] {
            assert!(codes(&catalog.filter(query)).contains(&"GARAN"));
        }
    }

    #[test]
    fn test_filter_by_name() {
        let catalog = TickerCatalog::bist100();
        let result = catalog.filter("holding");
        assert_eq!(codes(&result), vec!["KCHOL", "SAHOL"]);
    }

    #[test]
    fn test_filter_turkish_name() {
        let catalog = TickerCatalog::bist100();
        assert_eq!(codes(&catalog.filter("tüpraş")), vec!["TUPRS"]);
        assert_eq!(codes(&catalog.filter("TÜPRAŞ")), vec!["TUPRS"]);
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = TickerCatalog::bist100();
        let result = catalog.filter("bank");
        assert_eq!(codes(&result), vec!["AKBNK", "ISCTR", "YKBNK"]);
    }

    #[test]
    fn test_filter_no_match() {
        let catalog = TickerCatalog::bist100();
        assert!(catalog.filter("zzz").is_empty());
    }

    #[test]
    fn test_every_substring_of_code_matches() {
        let catalog = TickerCatalog::bist100();
        for ticker in catalog.list() {
            for start in 0..ticker.code.len() {
                for end in start + 1..=ticker.code.len() {
                    let query = ticker.code[start..end].to_lowercase();
                    assert!(
                        catalog.filter(&query).contains(ticker),
                        "{query} should match {}",
                        ticker.code
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_substring_of_name_matches_in_any_case() {
        let catalog = TickerCatalog::bist100();
        for ticker in catalog.list() {
            let chars: Vec<char> = ticker.display_name.chars().collect();
            for start in 0..chars.len() {
                for end in start + 1..=chars.len() {
                    let part: String = chars[start..end].iter().collect();
                    for query in [part.clone(), part.to_uppercase(), part.to_lowercase()] {
                        assert!(
                            catalog.filter(&query).contains(ticker),
                            "{query:?} should match {}",
                            ticker.display_name
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_filter_dotted_and_dotless_i() {
        let catalog = TickerCatalog::bist100();
        assert_eq!(codes(&catalog.filter("YAPI")), vec!["YKBNK"]);
        assert_eq!(codes(&catalog.filter("SABANCI")), vec!["SAHOL"]);
        assert_eq!(codes(&catalog.filter("iş bankası")), vec!["ISCTR"]);
        assert_eq!(codes(&catalog.filter("İŞ BANKASI")), vec!["ISCTR"]);
        assert_eq!(codes(&catalog.filter("TÜRK HAVA YOLLARI")), vec!["THYAO"]);
        assert_eq!(codes(&catalog.filter("bim")), vec!["BIMAS"]);
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case("İŞ BANKASI"), "iş bankasi");
        assert_eq!(fold_case(&"İş".to_lowercase()), "iş");
        assert_eq!(fold_case("Yapı"), "yapi");
        assert_eq!(fold_case("THYAO"), "thyao");
    }

    #[test]
    fn test_get_by_code() {
        let catalog = TickerCatalog::bist100();
        assert_eq!(catalog.get("asels").map(|t| t.display_name.as_str()), Some("Aselsan"));
        assert_eq!(catalog.get("ıSCTR").map(|t| t.code.as_str()), Some("ISCTR"));
        assert!(catalog.get("AAPL").is_none());
    }
}
