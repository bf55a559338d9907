//! End-to-end tests of the public API against locale directories on disk.

use std::fs;

use plate::{Args, Config, ErrorKind, LoadWarning, Plate};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

struct Locales {
    dir: TempDir,
}

impl Locales {
    fn new(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        Self { dir }
    }

    fn config(&self) -> Config {
        Config::new(self.dir.path())
    }

    fn plate(&self) -> Plate {
        Plate::with_config(self.config()).unwrap()
    }
}

fn sample() -> Locales {
    Locales::new(&[
        (
            "en_US.json",
            r#"{
                "greeting": "Hello, {name}!",
                "items": "no items|one item|{count} items",
                "thanks": ["Thank you ", "so much ", ":RED_HEART:"],
                "later": "See you later"
            }"#,
        ),
        (
            "it_IT.json",
            r#"{
                "greeting": "Ciao, {name}!",
                "items": "nessun oggetto | un oggetto | {count} oggetti",
                "thanks": "Grazie :red_heart:",
                "later": ""
            }"#,
        ),
    ])
}

#[test]
fn every_fallback_key_resolves_in_every_locale() {
    let locales = sample();
    let plate = locales.plate();
    let args = Args::new().with("name", "Ann");
    let keys = ["greeting", "items", "thanks", "later"];

    for (locale, _) in plate.locales() {
        for key in keys {
            let result = plate.translate(key, Some(locale), None, &args);
            assert!(result.is_ok(), "{key} in {locale}: {result:?}");
        }
    }
}

#[test]
fn empty_phrase_is_replaced_by_fallback() {
    let locales = sample();
    let plate = locales.plate();

    let result = plate.translate("later", Some("it_IT"), None, &Args::new());
    assert_eq!(result.unwrap(), "See you later");
}

#[test]
fn plural_forms_are_selected_by_position() {
    let locales = sample();
    let plate = locales.plate();
    let translate = |count| {
        plate
            .translate("items", None, Some(count), &Args::new())
            .unwrap()
    };

    assert_eq!(translate(0), "no items");
    assert_eq!(translate(1), "one item");
    assert_eq!(translate(2), "2 items");
    assert_eq!(translate(5), "5 items");
}

#[test]
fn interpolation_requires_every_placeholder() {
    let locales = sample();
    let plate = locales.plate();

    let args = Args::new().with("name", "Ann");
    assert_eq!(
        plate.translate("greeting", None, None, &args).unwrap(),
        "Hello, Ann!"
    );

    let err = plate
        .translate("greeting", None, None, &Args::new())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingInterpolationValue);
    insta::assert_snapshot!(err.to_string(), @r#"Missing interpolation value for key "name""#);
}

#[test]
fn emoji_are_substituted_at_load_time() {
    let locales = sample();
    let plate = locales.plate();

    assert_eq!(
        plate.translate("thanks", None, None, &Args::new()).unwrap(),
        "Thank you so much ❤️"
    );
    assert_eq!(
        plate
            .translate("thanks", Some("it_IT"), None, &Args::new())
            .unwrap(),
        "Grazie ❤️"
    );
    assert_eq!(
        plate.warnings(),
        &[
            LoadWarning::LowercaseEmoji {
                shortcode: "red_heart".to_string(),
                key: "thanks".to_string(),
                locale: "it_IT".to_string(),
            },
            LoadWarning::EmptyPhrase {
                key: "later".to_string(),
                locale: "it_IT".to_string(),
            },
        ]
    );
}

#[test]
fn unknown_emoji_fails_construction() {
    let locales = Locales::new(&[("en_US.json", r#"{"oops": "Great :FOOBAR:"}"#)]);

    let err = Plate::with_config(locales.config()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownEmojiShortcode);
}

#[test]
fn missing_key_fails_construction() {
    let locales = Locales::new(&[
        ("en_US.json", r#"{"a": "A", "b": "B"}"#),
        ("it_IT.json", r#"{"a": "A"}"#),
    ]);

    let err = Plate::with_config(locales.config()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeySetMismatch);
    insta::assert_snapshot!(err.to_string(), @r#"Missing translation key "b" from "it_IT""#);
}

#[test]
fn extra_key_fails_construction() {
    let locales = Locales::new(&[
        ("en_US.json", r#"{"a": "A"}"#),
        ("it_IT.json", r#"{"a": "A", "b": "B"}"#),
    ]);

    let err = Plate::with_config(locales.config()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeySetMismatch);
    insta::assert_snapshot!(
        err.to_string(),
        @r#"The key "b" from "it_IT" does not exist in fallback locale "en_US""#
    );
}

#[test]
fn resolution_is_repeatable() {
    let locales = sample();
    let plate = locales.plate();
    let args = Args::new().with("name", "Ann");

    let first = plate.translate("items", Some("it_IT"), Some(4), &args);
    let second = plate.translate("items", Some("it_IT"), Some(4), &args);
    assert_eq!(first.unwrap(), second.unwrap());
}

#[test]
fn set_locale_rejects_unknown_code() {
    let locales = sample();
    let mut plate = locales.plate();

    let err = plate.set_locale("zz_ZZ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidLocale);
    assert_eq!(plate.locale(), "en_US");

    plate.set_locale("it_IT").unwrap();
    assert_eq!(plate.locale(), "it_IT");
}

#[test]
fn bound_translators_are_shareable() {
    let locales = sample();
    let plate = locales.plate();
    let italian = plate.translator("it_IT").unwrap();

    let handle = std::thread::spawn(move || {
        italian
            .translate("items", Some(1), &Args::new())
            .unwrap()
    });
    assert_eq!(handle.join().unwrap(), "un oggetto");
}

#[test]
fn fallback_can_differ_from_default_locale() {
    let locales = sample();
    let config = locales.config().with_locale("it_IT").with_fallback("en_US");
    let plate = Plate::with_config(config).unwrap();

    assert_eq!(plate.locale(), "it_IT");
    assert_eq!(plate.fallback(), "en_US");
    assert_eq!(
        plate.translate("later", None, None, &Args::new()).unwrap(),
        "See you later"
    );
}

#[test]
fn fallback_without_file_fails_construction() {
    let locales = sample();
    let config = locales.config().with_fallback("de_DE");

    let err = Plate::with_config(config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeySetMismatch);
}
