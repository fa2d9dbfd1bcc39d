//! Language registry: display names and MyMemory locale codes.
//!
//! Both tables are compiled in and never change at runtime. Lookups are
//! case-insensitive.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// A language option for selection lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    /// ISO language code (e.g., "en", "fil")
    pub code: &'static str,
    /// Display name (e.g., "English")
    pub name: &'static str,
}

const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ar", "Arabic"),
    ("as", "Assamese"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("gu", "Gujarati"),
    ("ha", "Hausa"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("ig", "Igbo"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("my", "Burmese"),
    ("nb", "Norwegian Bokmål"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("or", "Odia"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sd", "Sindhi"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Filipino"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("xh", "Xhosa"),
    ("yo", "Yoruba"),
    ("zh", "Chinese"),
    ("zu", "Zulu"),
];

/// Region-qualified codes expected by MyMemory.
const MYMEMORY_LOCALES: &[(&str, &str)] = &[
    ("af", "af-ZA"),
    ("ar", "ar-SA"),
    ("as", "as-IN"),
    ("bg", "bg-BG"),
    ("bn", "bn-IN"),
    ("ca", "ca-ES"),
    ("cs", "cs-CZ"),
    ("da", "da-DK"),
    ("de", "de-DE"),
    ("el", "el-GR"),
    ("en", "en-GB"),
    ("es", "es-ES"),
    ("et", "et-EE"),
    ("fa", "fa-IR"),
    ("fi", "fi-FI"),
    ("fr", "fr-FR"),
    ("gu", "gu-IN"),
    ("ha", "ha-NE"),
    ("he", "he-IL"),
    ("hi", "hi-IN"),
    ("hr", "hr-HR"),
    ("hu", "hu-HU"),
    ("hy", "hy-AM"),
    ("id", "id-ID"),
    ("ig", "ig-NG"),
    ("it", "it-IT"),
    ("ja", "ja-JP"),
    ("km", "km-KH"),
    ("kn", "kn-IN"),
    ("ko", "ko-KR"),
    ("lo", "lo-LA"),
    ("lt", "lt-LT"),
    ("lv", "lv-LV"),
    ("ml", "ml-IN"),
    ("mr", "mr-IN"),
    ("ms", "ms-MY"),
    ("my", "my-MM"),
    ("ne", "ne-NP"),
    ("nl", "nl-NL"),
    ("no", "nb-NO"),
    ("or", "or-IN"),
    ("pa", "pa-IN"),
    ("pl", "pl-PL"),
    ("pt", "pt-PT"),
    ("ro", "ro-RO"),
    ("ru", "ru-RU"),
    ("sd", "sd-PK"),
    ("si", "si-LK"),
    ("sk", "sk-SK"),
    ("sl", "sl-SI"),
    ("sr", "sr-Latn-RS"),
    ("sv", "sv-SE"),
    ("sw", "sw-KE"),
    ("ta", "ta-IN"),
    ("te", "te-IN"),
    ("th", "th-TH"),
    ("tl", "fil-PH"),
    ("tr", "tr-TR"),
    ("uk", "uk-UA"),
    ("ur", "ur-PK"),
    ("vi", "vi-VN"),
    ("xh", "xh-ZA"),
    ("yo", "yo-NG"),
    ("zh", "zh-CN"),
    ("zu", "zu-ZA"),
];

static NAMES: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| LANGUAGE_NAMES.iter().copied().collect());

static LOCALES: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| MYMEMORY_LOCALES.iter().copied().collect());

/// Display name for a language code, or the code itself when unknown.
pub fn name_of(code: &str) -> &str {
    NAMES
        .get(code.trim().to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(code)
}

/// MyMemory locale for a language code.
///
/// `None` means the chunked fallback cannot serve this language.
pub fn locale_of(code: &str) -> Option<&'static str> {
    LOCALES
        .get(code.trim().to_ascii_lowercase().as_str())
        .copied()
}

/// Every registered language, sorted by code.
pub fn list_all() -> Vec<LanguageOption> {
    NAMES
        .iter()
        .map(|(&code, &name)| LanguageOption { code, name })
        .collect()
}
