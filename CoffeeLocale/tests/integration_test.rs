use coffeelocale::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

const HEADER: &str = "# Sourced from the Unicode Common Locale Data Repository (CLDR).\n\
                      # https://cldr.unicode.org/index\n\n";

const EN: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE ldml SYSTEM "../../common/dtd/ldml.dtd">
<ldml>
    <identity>
        <version number="$Revision$"/>
        <language type="en"/>
    </identity>
    <localeDisplayNames>
        <languages>
            <language type="de">German</language>
            <language type="de_CH">Swiss High German</language>
            <language type="en_GB" alt="short">UK English</language>
            <language type="nqo">N’Ko</language>
        </languages>
        <territories>
            <territory type="CI">Côte d’Ivoire</territory>
            <territory type="CI" alt="variant">Ivory Coast</territory>
            <territory type="GB">United Kingdom</territory>
            <territory type="GB" alt="short">UK</territory>
            <territory type="PS">Palestinian Territories</territory>
            <territory type="PS" alt="short">Palestine</territory>
            <territory type="US">United States</territory>
            <territory type="US" alt="short">US</territory>
        </territories>
    </localeDisplayNames>
</ldml>
"#;

const EN_US: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<ldml>
    <identity>
        <version number="$Revision$"/>
        <language type="en"/>
        <territory type="US"/>
    </identity>
</ldml>
"#;

struct Fixture {
    cldr: TempDir,
    out: TempDir,
}

impl Fixture {
    fn new(files: &[(&str, &str)]) -> Self {
        let cldr = tempdir().unwrap();
        let main = cldr.path().join("common").join("main");
        fs::create_dir_all(&main).unwrap();
        for (name, content) in files {
            fs::write(main.join(format!("{name}.xml")), content).unwrap();
        }
        Self {
            cldr,
            out: tempdir().unwrap(),
        }
    }

    fn language_dir(&self, name: &str) -> PathBuf {
        let dir = self.out.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }
}

fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).unwrap()
}

#[test]
fn test_variant_locale_end_to_end() {
    let fixture = Fixture::new(&[("en", EN), ("en_US", EN_US)]);
    let lang_dir = fixture.language_dir("en-US");

    let config = ScraperConfig::new(&lang_dir, fixture.cldr.path());
    let summary = convert_cldr_to_i18n(&config).unwrap();

    assert_eq!(summary.locale_name, "en_US");
    assert_eq!(summary.base_locale.as_deref(), Some("en"));

    assert_eq!(
        read(&lang_dir, "language_names.i18n"),
        format!(
            "{HEADER}de: \"German\"\n\
             de_CH: \"Swiss High German\"\n\
             nqo: \"N’Ko\"\n"
        )
    );
    assert_eq!(
        read(&lang_dir, "country_names.i18n"),
        format!(
            "{HEADER}CI: \"Côte d’Ivoire\"\n\
             GB: \"United Kingdom\"\n\
             PS: \"Palestine\"\n\
             US: \"United States\"\n"
        )
    );
}

#[test]
fn test_manual_name_overrides_folder() {
    let fixture = Fixture::new(&[("en", EN)]);
    let lang_dir = fixture.language_dir("en-XX");

    let config = ScraperConfig::new(&lang_dir, fixture.cldr.path()).with_manual_name("en");
    let summary = convert_cldr_to_i18n(&config).unwrap();

    assert_eq!(summary.locale_name, "en");
    assert_eq!(summary.base_locale, None);
    assert_eq!(summary.language_count, 3);
    assert_eq!(summary.country_count, 4);
}

#[test]
fn test_escaping_in_output() {
    let xml = r#"<ldml><identity><language type="xx"/></identity>
        <localeDisplayNames><languages>
            <language type="q">say "hi" to o'brien \ co</language>
        </languages><territories/></localeDisplayNames></ldml>"#;
    let fixture = Fixture::new(&[("xx", xml)]);
    let lang_dir = fixture.language_dir("xx");

    convert_cldr_to_i18n(&ScraperConfig::new(&lang_dir, fixture.cldr.path())).unwrap();

    let languages = read(&lang_dir, "language_names.i18n");
    assert!(languages.ends_with("q: \"say \\\"hi\\\" to o\\'brien \\\\ co\"\n"));
    assert_eq!(read(&lang_dir, "country_names.i18n"), HEADER);
}

#[test]
fn test_crlf_source_writes_no_carriage_returns() {
    let xml = EN.replace('\n', "\r\n").replace(
        "<language type=\"de\">German</language>",
        "<language type=\"de\">Ger\r\nman</language>",
    );
    let fixture = Fixture::new(&[("en", xml.as_str())]);
    let lang_dir = fixture.language_dir("en");

    convert_cldr_to_i18n(&ScraperConfig::new(&lang_dir, fixture.cldr.path())).unwrap();

    let languages = read(&lang_dir, "language_names.i18n");
    assert!(!languages.contains('\r'));
    assert!(languages.contains("de: \"Ger\\nman\"\n"));
    assert!(!read(&lang_dir, "country_names.i18n").contains('\r'));
}

#[test]
fn test_existing_output_is_replaced() {
    let fixture = Fixture::new(&[("en", EN)]);
    let lang_dir = fixture.language_dir("en");
    fs::write(lang_dir.join("language_names.i18n"), "stale: \"value\"\n").unwrap();

    convert_cldr_to_i18n(&ScraperConfig::new(&lang_dir, fixture.cldr.path())).unwrap();

    let languages = read(&lang_dir, "language_names.i18n");
    assert!(languages.starts_with(HEADER));
    assert!(!languages.contains("stale"));
}

#[test]
fn test_missing_source_writes_nothing() {
    let fixture = Fixture::new(&[]);
    let lang_dir = fixture.language_dir("en-US");

    let err = convert_cldr_to_i18n(&ScraperConfig::new(&lang_dir, fixture.cldr.path())).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound { .. }));
    assert!(!lang_dir.join("language_names.i18n").exists());
    assert!(!lang_dir.join("country_names.i18n").exists());
}

#[test]
fn test_bad_territory_keeps_language_file() {
    let xml = r#"<ldml><identity><language type="xx"/></identity>
        <localeDisplayNames>
            <languages><language type="en">English</language></languages>
            <territories><territory type="US"/></territories>
        </localeDisplayNames></ldml>"#;
    let fixture = Fixture::new(&[("xx", xml)]);
    let lang_dir = fixture.language_dir("xx");

    let err = convert_cldr_to_i18n(&ScraperConfig::new(&lang_dir, fixture.cldr.path())).unwrap_err();
    assert!(err.is_malformed());
    assert!(lang_dir.join("language_names.i18n").is_file());
    assert!(!lang_dir.join("country_names.i18n").exists());
}
