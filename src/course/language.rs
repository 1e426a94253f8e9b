//! Subtitle language inference from file name suffixes

/// Language used when a suffix is missing or not in the table
pub const DEFAULT_LANGUAGE: &str = "en";

/// Lowercase language names and abbreviations mapped to two-letter codes
static LANGUAGES: &[(&str, &str)] = &[
    ("english", "en"),
    ("eng", "en"),
    ("en", "en"),
    ("spanish", "es"),
    ("esp", "es"),
    ("es", "es"),
    ("french", "fr"),
    ("fre", "fr"),
    ("fr", "fr"),
    ("german", "de"),
    ("deu", "de"),
    ("de", "de"),
    ("italian", "it"),
    ("ita", "it"),
    ("it", "it"),
    ("portuguese", "pt"),
    ("por", "pt"),
    ("pt", "pt"),
    ("russian", "ru"),
    ("rus", "ru"),
    ("ru", "ru"),
    ("chinese", "zh"),
    ("chi", "zh"),
    ("zh", "zh"),
    ("japanese", "ja"),
    ("jpn", "ja"),
    ("ja", "ja"),
    ("korean", "ko"),
    ("kor", "ko"),
    ("ko", "ko"),
    ("bulgarian", "bg"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dutch", "nl"),
    ("finnish", "fi"),
    ("greek", "el"),
    ("hungarian", "hu"),
    ("indonesian", "id"),
    ("norwegian", "no"),
    ("polish", "pl"),
    ("romanian", "ro"),
    ("swedish", "sv"),
    ("thai", "th"),
    ("turkish", "tr"),
    ("ukrainian", "uk"),
    ("vietnamese", "vi"),
];

/// Look up a language name or abbreviation, case-insensitively
pub fn lookup(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();
    LANGUAGES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, code)| *code)
}

/// Language code for a subtitle suffix, falling back to English.
///
/// Suffixes that are not language names at all (`"Director's Commentary"`)
/// also end up as English.
pub fn language_code(suffix: &str) -> &'static str {
    lookup(suffix).unwrap_or(DEFAULT_LANGUAGE)
}
