//! End-to-end tests for the translate module.

#![cfg(feature = "translate")]

use futures::executor::block_on;
use futures::StreamExt;
use ngry::translate::{
    merge_text_data, BundleData, Catalog, CurrentLanguage, DebugOptions, DefaultLanguageResolver,
    Language, LanguageChangeRequest, LanguageConfig, LanguageMapping, LanguagePattern,
    LanguageStore, MappingGuard, Params, PhraseData, StandalonePhrase, StandalonePhraseData,
    SupportedGuard, Template, TextData, TranslateConfig, TranslateError, Translator,
    LanguageResolver,
};
use rstest::{fixture, rstest};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
    "language": {
        "default": "en",
        "supported": ["en", "uk", "de"],
        "mapping": [
            { "language": "uk", "patterns": [{ "exact": "ua" }, { "regex": "^ua-" }] },
            { "language": "en", "patterns": [{ "regex": "^en-" }] }
        ],
        "initial": "ua-UA"
    },
    "debug": { "enabled": false },
    "text": {
        "en": {
            "greeting": "Hello, {{ name }}!",
            "save": "Save",
            "items": "{{count}} items in {{ folder }}"
        },
        "uk": {
            "greeting": "Привіт, {{ name }}!",
            "save": "Зберегти"
        },
        "de": {
            "save": "Speichern"
        }
    }
}"#;

/// Routes fallback warnings to the test output; filter with `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[fixture]
fn translator() -> Translator {
    init_tracing();
    TranslateConfig::from_json(CONFIG)
        .unwrap()
        .into_translator()
        .unwrap()
}

fn bundle(entries: &[(&str, &str)]) -> BundleData {
    entries
        .iter()
        .map(|(key, text)| ((*key).to_string(), PhraseData::from(*text)))
        .collect()
}

// =============================================================================
// Configuration
// =============================================================================

#[rstest]
fn test_initial_language_is_resolved(translator: Translator) {
    assert_eq!(translator.language(), "uk");
}

#[rstest]
fn test_config_rejects_unsupported_default() {
    let error = TranslateConfig::from_json(r#"{ "language": { "default": "fr", "supported": ["en"] } }"#)
        .unwrap()
        .into_translator()
        .unwrap_err();

    assert!(matches!(error, TranslateError::UnsupportedDefault(language) if language == "fr"));
}

#[rstest]
fn test_config_rejects_invalid_pattern() {
    let json = r#"{
        "language": {
            "default": "en",
            "mapping": [{ "language": "en", "patterns": [{ "regex": "([a-z" }] }]
        }
    }"#;

    let error = TranslateConfig::from_json(json).unwrap().into_translator().unwrap_err();

    assert!(matches!(error, TranslateError::InvalidPattern { .. }));
}

#[rstest]
fn test_config_rejects_malformed_json() {
    assert!(matches!(
        TranslateConfig::from_json("{ \"language\": 1 }"),
        Err(TranslateError::Config(_))
    ));
}

#[rstest]
fn test_debug_is_disabled_without_debug_section() {
    let config = TranslateConfig::from_json(r#"{ "language": { "default": "en" } }"#).unwrap();

    assert_eq!(config.debug, DebugOptions::default());
    assert!(!config.debug.enabled);
    assert!(!TranslateConfig::new(LanguageConfig::new("en")).debug.enabled);
}

#[rstest]
fn test_config_without_supported_uses_default_only() {
    let translator = TranslateConfig::new(LanguageConfig::new("en")).into_translator().unwrap();

    assert_eq!(translator.use_language("uk"), "en");
    assert_eq!(translator.language_store().state().supported.len(), 1);
}

#[rstest]
fn test_with_text_merges_later_data_over_earlier() {
    let mut language = LanguageConfig::new("en");
    language.supported = vec![Language::new("en")];

    let translator = TranslateConfig::new(language)
        .with_text(TextData::from([(
            Language::new("en"),
            bundle(&[("title", "Old"), ("footer", "Footer")]),
        )]))
        .with_text(TextData::from([(Language::new("en"), bundle(&[("title", "New")]))]))
        .into_translator()
        .unwrap();

    assert_eq!(translator.translate("title", &Params::new()), "New");
    assert_eq!(translator.translate("footer", &Params::new()), "Footer");
}

// =============================================================================
// Translation
// =============================================================================

#[rstest]
#[case("save", "Зберегти")]
#[case("greeting", "Привіт, Ann!")]
#[case("items", "items")]
#[case("unknown.key", "unknown.key")]
fn test_translate_in_current_language(
    translator: Translator,
    #[case] key: &str,
    #[case] expected: &str,
) {
    assert_eq!(translator.translate(key, &Params::new().with("name", "Ann")), expected);
}

#[rstest]
fn test_translate_interpolates_every_placeholder(translator: Translator) {
    translator.use_language("en-GB");
    let params = Params::new().with("count", 3).with("folder", "Inbox");

    assert_eq!(translator.translate("items", &params), "3 items in Inbox");
}

#[rstest]
fn test_missing_parameter_renders_empty(translator: Translator) {
    translator.use_language("en");
    let params = Params::new().with_optional("count", Some(2)).with_optional::<u8>("folder", None);

    assert_eq!(translator.translate("items", &params), "2 items in ");
}

#[rstest]
fn test_translate_in_other_language(translator: Translator) {
    assert_eq!(translator.translate_in(&Language::new("de"), "save", &Params::new()), "Speichern");
    assert_eq!(translator.translate_in(&Language::new("de"), "greeting", &Params::new()), "greeting");
}

#[rstest]
fn test_function_phrase_receives_params() {
    let text = TextData::from([(
        Language::new("en"),
        BundleData::from([(
            "files".to_string(),
            PhraseData::function(|params: &Params| match params.get("count") {
                Some("1") => "1 file".to_string(),
                Some(count) => format!("{count} files"),
                None => "no files".to_string(),
            }),
        )]),
    )]);
    let translator = Translator::new(
        LanguageStore::new(Language::new("en"), "en", ["en"], SupportedGuard::new("en", ["en"])),
        Catalog::compile(&text),
    )
    .with_debug(DebugOptions { enabled: false });

    assert_eq!(translator.translate("files", &Params::new().with("count", 1)), "1 file");
    assert_eq!(translator.translate("files", &Params::new().with("count", 4)), "4 files");
    assert_eq!(translator.translate("files", &Params::new()), "no files");
}

#[rstest]
fn test_standalone_phrase_follows_language(translator: Translator) {
    let data = StandalonePhraseData::from([
        (Language::new("en"), PhraseData::from("Welcome, {{ name }}")),
        (Language::new("uk"), PhraseData::from("Ласкаво просимо, {{ name }}")),
    ]);
    let phrase = StandalonePhrase::compile(&data);
    let params = Params::new().with("name", "Ann");

    assert_eq!(translator.translate_standalone(&phrase, &params), "Ласкаво просимо, Ann");

    translator.use_language("de");
    assert_eq!(translator.translate_standalone(&phrase, &params), "");
}

// =============================================================================
// Language changes
// =============================================================================

#[rstest]
#[case("ua", "uk")]
#[case("ua-UA", "uk")]
#[case("en-US", "en")]
#[case("de", "de")]
#[case("fr", "en")]
fn test_use_language_resolves_request(
    translator: Translator,
    #[case] requested: &str,
    #[case] expected: &str,
) {
    assert_eq!(translator.use_language(requested), expected);
    assert_eq!(translator.language(), expected);
}

#[rstest]
fn test_translate_changes_follow_language(translator: Translator) {
    let saves = translator.translate_changes("save", Params::new());
    let languages = translator.language_changes();

    translator.use_language("en");
    translator.use_language("en-US");
    translator.use_language("de");
    translator.language_store().store().destroy();

    assert_eq!(
        block_on(saves.collect::<Vec<_>>()),
        vec!["Зберегти", "Save", "Speichern"]
    );
    assert_eq!(
        block_on(languages.collect::<Vec<_>>()),
        vec![Language::new("uk"), Language::new("en"), Language::new("de")]
    );
}

#[rstest]
fn test_translate_changes_skip_equal_renderings(translator: Translator) {
    let greetings = translator.translate_changes("greeting", Params::new().with("name", "Ann"));

    translator.use_language("de");
    translator.use_language("fr");
    translator.language_store().store().destroy();

    // "de" has no greeting and "fr" falls back to "en"
    assert_eq!(
        block_on(greetings.collect::<Vec<_>>()),
        vec!["Привіт, Ann!", "greeting", "Hello, Ann!"]
    );
}

#[rstest]
fn test_current_language_handler_keeps_language() {
    let store = LanguageStore::new(Language::new("en"), "en", ["en", "uk"], SupportedGuard::new("en", ["en", "uk"]))
        .with_handler(CurrentLanguage);

    assert_eq!(store.request(&Language::new("uk")), "en");
}

#[rstest]
fn test_handler_choice_must_be_supported() {
    let store = LanguageStore::new(Language::new("en"), "en", ["en", "uk"], MappingGuard::new(LanguageMapping::new()))
        .with_handler(|request: &LanguageChangeRequest| Language::new(format!("{}-x", request.target)));

    assert_eq!(store.request(&Language::new("uk")), "en");
}

#[rstest]
fn test_request_sequence_with_unsupported_language() {
    let store = LanguageStore::new(
        Language::new("en"),
        "en",
        ["en", "uk"],
        DefaultLanguageResolver::new("en", ["en", "uk"], LanguageMapping::new()),
    );

    assert_eq!(store.request(&Language::new("uk")), "uk");
    assert_eq!(store.request(&Language::new("ru")), "en");
}

// =============================================================================
// Building blocks
// =============================================================================

#[rstest]
fn test_mapping_prefers_first_matching_rule() {
    let mapping = LanguageMapping::new()
        .with("uk", [LanguagePattern::exact("UA")])
        .with("ru", [LanguagePattern::regex("^u").unwrap()]);
    let resolver = MappingGuard::new(mapping);

    assert_eq!(resolver.resolve(&Language::new("ua")), "uk");
    assert_eq!(resolver.resolve(&Language::new("uz")), "ru");
    assert_eq!(resolver.resolve(&Language::new("pl")), "pl");
}

#[rstest]
fn test_closure_is_a_resolver() {
    let upper = |language: &Language| Language::new(language.as_str().to_uppercase());

    assert_eq!(upper.resolve(&Language::new("en")), "EN");
}

#[rstest]
#[case("Plain text", false)]
#[case("{{ name }}", true)]
#[case("{{name}} and {{ other_1 }}", true)]
#[case("{{ not valid }}", false)]
fn test_template_detection(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(Template::is_template(text), expected);
}

#[rstest]
fn test_template_placeholders_in_order() {
    let template = Template::parse("{{ a }}-{{b}}-{{ a }}").unwrap();

    assert_eq!(template.placeholders().collect::<Vec<_>>(), vec!["a", "b", "a"]);
    assert_eq!(template.render(&Params::from([("a", "x"), ("b", "y")])), "x-y-x");
}

#[rstest]
fn test_merge_text_data_combines_languages() {
    let merged = merge_text_data([
        TextData::from([(Language::new("en"), bundle(&[("a", "A")]))]),
        TextData::from([
            (Language::new("en"), bundle(&[("b", "B")])),
            (Language::new("uk"), bundle(&[("a", "А")])),
        ]),
    ]);

    assert_eq!(merged[&Language::new("en")].len(), 2);
    assert_eq!(merged[&Language::new("uk")].len(), 1);
}
