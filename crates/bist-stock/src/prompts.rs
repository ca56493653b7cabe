//! Stock analysis prompt templates
//!
//! Templates are bilingual (English and Turkish instructions). The narrative
//! language of the answer is passed separately as `output_language`, so a
//! language without its own template still gets answers in that language.

use bist_prompt::{Prompt, Result};

/// Template name of the analysis request
pub const ANALYSIS_PROMPT: &str = "stock.user.analyze_bist";

/// Template name of the analyst system instruction
pub const SYSTEM_PROMPT: &str = "stock.system.bist_analyst";

/// System instruction for the analyst persona
pub fn system_prompt() -> Result<Prompt> {
    Prompt::bilingual(
        SYSTEM_PROMPT,
        "You are an equity analyst covering Borsa Istanbul. Base every figure on the most recent data you can find with search, and answer only with the requested JSON.",
        "Borsa İstanbul'u takip eden bir hisse analistisin. Tüm rakamları arama ile bulabildiğin en güncel verilere dayandır ve yalnızca istenen JSON ile yanıt ver.",
    )
}

/// Analysis request for one ticker
///
/// Variables: `symbol`, `name`, `output_language`.
pub fn analysis_prompt() -> Result<Prompt> {
    Prompt::bilingual(ANALYSIS_PROMPT, ANALYSIS_EN, ANALYSIS_TR)
}

const ANALYSIS_EN: &str = r#"Analyze the current market status of {{ symbol }} ({{ name }}) on Borsa Istanbul (BIST 100).

IMPORTANT: All narrative text must be in {{ output_language }}.

1. Search grounding: use Google Search to find the latest available price, P/E ratio, market capitalization, trading volume and recent financial news or technical signals as of today.
2. Technical analysis: estimate or retrieve RSI (Relative Strength Index) and MACD. Classify each signal as Buy, Sell or Neutral.
3. Predictions: based on the technicals and the news, predict the likely trend for exactly three horizons:
   - Day (today, intraday)
   - Week (next week, short term)
   - Month (next month, medium term)
   For each, give an estimated percentage change (e.g. "+1.5%"), a direction (UP, DOWN or NEUTRAL) and a short reasoning.
4. Summary: a short two-sentence summary of the outlook.

Return a single JSON object with the keys "fundamentals" (price, peRatio, marketCap, volume), "technicals" (name, value, signal), "predictions" (period, direction, percentageChange, reasoning) and "summary".
Keep the enum values "Buy", "Sell", "Neutral", "Day", "Week", "Month", "UP", "DOWN", "NEUTRAL" in English exactly as written. The "reasoning" and "summary" texts must be in {{ output_language }}."#;

const ANALYSIS_TR: &str = r#"{{ symbol }} ({{ name }}) hissesinin Borsa İstanbul'daki (BIST 100) güncel piyasa durumunu analiz et.

ÖNEMLİ: Tüm açıklama metinleri {{ output_language }} olmalıdır.

1. Arama: Google Arama ile bugün itibarıyla en güncel fiyatı, F/K oranını, piyasa değerini, işlem hacmini ve son finansal haberleri veya teknik sinyalleri bul.
2. Teknik analiz: RSI (Göreceli Güç Endeksi) ve MACD değerlerini tahmin et veya bul. Her sinyali Buy (Al), Sell (Sat) veya Neutral (Nötr) olarak sınıflandır.
3. Tahminler: teknik göstergelere ve haberlere dayanarak tam olarak üç vade için olası eğilimi tahmin et:
   - Day (gün içi)
   - Week (gelecek hafta, kısa vade)
   - Month (gelecek ay, orta vade)
   Her biri için tahmini yüzde değişimi (ör. "+1.5%"), yönü (UP, DOWN veya NEUTRAL) ve kısa bir gerekçe ver.
4. Özet: görünümü anlatan iki cümlelik kısa bir özet.

Yanıtı "fundamentals" (price, peRatio, marketCap, volume), "technicals" (name, value, signal), "predictions" (period, direction, percentageChange, reasoning) ve "summary" anahtarlarını içeren tek bir JSON nesnesi olarak döndür.
"Buy", "Sell", "Neutral", "Day", "Week", "Month", "UP", "DOWN", "NEUTRAL" değerlerini yazıldığı gibi İngilizce bırak. "reasoning" ve "summary" metinleri {{ output_language }} olmalıdır."#;

#[cfg(test)]
mod tests {
    use super::*;
    use bist_prompt::Language;
    use serde_json::json;

    fn vars() -> serde_json::Value {
        json!({ "symbol": "THYAO", "name": "Türk Hava Yolları", "output_language": "Türkçe" })
    }

    #[test]
    fn test_prompts_created() {
        assert_eq!(system_prompt().unwrap().name(), SYSTEM_PROMPT);
        assert_eq!(analysis_prompt().unwrap().name(), ANALYSIS_PROMPT);
    }

    #[test]
    fn test_analysis_prompt_requires_every_variable() {
        let result = analysis_prompt()
            .unwrap()
            .render(&Language::Turkish, json!({ "symbol": "THYAO" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_analysis_prompt_turkish() {
        let prompt = analysis_prompt()
            .unwrap()
            .render(&Language::Turkish, &vars())
            .unwrap();

        assert!(prompt.starts_with("THYAO (Türk Hava Yolları)"));
        assert!(prompt.contains("Türkçe olmalıdır"));
        assert!(prompt.contains("F/K"));
    }

    #[test]
    fn test_analysis_prompt_english() {
        let prompt = analysis_prompt()
            .unwrap()
            .render(&Language::English, &json!({ "symbol": "GARAN", "name": "Garanti BBVA", "output_language": "English" }))
            .unwrap();

        assert!(prompt.contains("GARAN (Garanti BBVA) on Borsa Istanbul"));
        assert!(prompt.contains("must be in English"));
        assert!(prompt.contains("RSI"));
        assert!(prompt.contains("MACD"));
    }

    #[test]
    fn test_other_language_falls_back_to_english_template() {
        let prompt = analysis_prompt()
            .unwrap()
            .render(
                &Language::Other("de".to_string()),
                &json!({ "symbol": "ASELS", "name": "Aselsan", "output_language": "de" }),
            )
            .unwrap();

        assert!(prompt.starts_with("Analyze the current market status of ASELS"));
        assert!(prompt.contains("must be in de"));
    }
}
