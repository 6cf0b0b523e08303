use whatlang::{Lang, detect};

/// Returned when detection has no clear signal. Downstream this is never an
/// error; the summarizer falls back to matching the input's own language.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

const MIN_CONFIDENCE: f64 = 0.25;
const MIN_TEXT_LENGTH: usize = 20;

/// Best-effort language detection. Never fails; short or ambiguous text
/// degrades to [`UNKNOWN_LANGUAGE`].
pub fn detect_language(text: &str) -> String {
    // Skip detection for very short text
    if text.trim().len() < MIN_TEXT_LENGTH {
        return UNKNOWN_LANGUAGE.to_string();
    }

    if let Some(info) = detect(text)
        && info.confidence() >= MIN_CONFIDENCE
    {
        return lang_to_code(info.lang());
    }

    UNKNOWN_LANGUAGE.to_string()
}

fn lang_to_code(lang: Lang) -> String {
    match lang {
        Lang::Eng => "en".to_string(),
        Lang::Ben => "bn".to_string(),
        Lang::Rus => "ru".to_string(),
        Lang::Cmn => "zh".to_string(),
        Lang::Spa => "es".to_string(),
        Lang::Fra => "fr".to_string(),
        Lang::Deu => "de".to_string(),
        Lang::Jpn => "ja".to_string(),
        Lang::Kor => "ko".to_string(),
        Lang::Por => "pt".to_string(),
        Lang::Ita => "it".to_string(),
        Lang::Nld => "nl".to_string(),
        Lang::Pol => "pl".to_string(),
        Lang::Tur => "tr".to_string(),
        Lang::Swe => "sv".to_string(),
        Lang::Dan => "da".to_string(),
        Lang::Fin => "fi".to_string(),
        Lang::Heb => "he".to_string(),
        Lang::Ara => "ar".to_string(),
        Lang::Hin => "hi".to_string(),
        Lang::Tha => "th".to_string(),
        Lang::Vie => "vi".to_string(),
        _ => format!("{:?}", lang).to_lowercase(),
    }
}
