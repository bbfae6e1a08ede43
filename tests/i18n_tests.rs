use falim_core::i18n::TranslationOverrides;
use falim_core::{FalimError, Language, TranslationTable, Translator};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

#[test]
fn test_every_stored_entry_is_returned_verbatim() {
    let table = Arc::new(TranslationTable::builtin());
    for language in Language::ALL {
        let translator = Translator::new(table.clone(), language);
        for key in table.keys(language) {
            assert_eq!(
                translator.translate(key),
                table.get(language, key).unwrap(),
                "{} / {}",
                language,
                key
            );
        }
    }
}

#[test]
fn test_absent_keys_resolve_to_themselves() {
    let mut translator = Translator::default();
    for language in Language::ALL {
        translator.set_language(language);
        assert_eq!(translator.translate("falnameReading"), "falnameReading");
        assert_eq!(translator.translate(""), "");
    }
}

#[test]
fn test_switching_language_is_never_stale() {
    let mut translator = Translator::builtin(Language::Tr);
    let expected = [
        (Language::En, "Coffee Reading"),
        (Language::De, "Kaffeesatz Lesen"),
        (Language::Tr, "Kahve Falı"),
    ];
    for (language, text) in expected {
        translator.set_language(language);
        assert_eq!(translator.translate("coffeeReading"), text);
    }
}

#[test]
fn test_translators_share_one_table() {
    let table = Arc::new(TranslationTable::builtin());
    let turkish = Translator::new(table.clone(), Language::Tr);
    let mut spanish = Translator::new(table, Language::Es);
    spanish.set_language(Language::Fr);

    assert_eq!(turkish.current_language(), Language::Tr);
    assert_eq!(turkish.translate("tarot"), "Tarot");
    assert_eq!(spanish.translate("home"), "Accueil");
}

#[test]
fn test_set_language_code_fails_fast() {
    let mut translator = Translator::builtin(Language::En);
    let err = translator.set_language_code("pt").unwrap_err();
    assert!(matches!(err, FalimError::UnsupportedLanguage { .. }));
    assert_eq!(translator.current_language(), Language::En);
}

#[test]
fn test_language_metadata() {
    let names: Vec<_> = Language::ALL.iter().map(|l| l.display_name()).collect();
    assert_eq!(names, ["Türkçe", "English", "Deutsch", "Français", "Español"]);
    assert_eq!(Language::Tr.flag(), "🇹🇷");
    assert_eq!(Translator::default().languages().len(), 5);
}

#[test]
fn test_overrides_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[tr]\nfalname = \"Falname\"\n\n[de]\nhome = \"Start\"").unwrap();

    let table = TranslationTable::builtin().with_overrides_file(file.path()).unwrap();
    assert_eq!(table.get(Language::Tr, "falname"), Some("Falname"));
    assert_eq!(table.get(Language::De, "home"), Some("Start"));
    assert_eq!(table.get(Language::En, "falname"), None);
}

#[test]
fn test_overrides_from_map() {
    let mut overrides = TranslationOverrides::new();
    overrides
        .entry("es".to_string())
        .or_default()
        .insert("tarot".to_string(), "Cartas".to_string());

    let table = TranslationTable::builtin().with_overrides(overrides).unwrap();
    let translator = Translator::new(Arc::new(table), Language::Es);
    assert_eq!(translator.translate("tarot"), "Cartas");
}
