//! End to end parsing of whole documents.

use inidoc::ini::formats::{serialize, treeviz::to_treeviz_str};
use inidoc::ini::testing::assert_document;
use inidoc::{parse, parse_with, DanglingKeys, LexErrorKind, ParseError, ParseOptions};
use rstest::{fixture, rstest};

const PROFILE: &str = "
key=abcdefg

[user]
name=Adam Eury
age=35
job=Software Engineer
email=adam@test.com

[address]
street=1800 Test Lane
city=Testy Mctestersonville
state=North Carolina
zip=90210
";

#[fixture]
fn profile() -> inidoc::Document {
    parse("test", PROFILE).unwrap()
}

#[test]
fn test_empty_input() {
    let doc = parse("t", "").unwrap();
    assert_document(&doc)
        .name("t")
        .section_count(1)
        .section(0, |s| s.preamble().pair_count(0));
}

#[test]
fn test_preamble_only() {
    let doc = parse("t", "key=abcdefg\n").unwrap();
    assert_document(&doc)
        .section_count(1)
        .section(0, |s| s.preamble().pairs(&[("key", "abcdefg")]));
}

#[test]
fn test_empty_preamble_is_not_recorded() {
    let doc = parse("t", "[user]\nname=Adam\n").unwrap();
    assert_document(&doc)
        .section_names(&["user"])
        .section(0, |s| s.pairs(&[("name", "Adam")]));
}

#[rstest]
fn test_profile_structure(profile: inidoc::Document) {
    assert_document(&profile)
        .name("test")
        .section_names(&["", "user", "address"])
        .section(0, |s| s.preamble().pair(0, "key", "abcdefg"))
        .section(1, |s| {
            s.name("user").pairs(&[
                ("name", "Adam Eury"),
                ("age", "35"),
                ("job", "Software Engineer"),
                ("email", "adam@test.com"),
            ])
        })
        .section(2, |s| {
            s.name("address")
                .pair_count(4)
                .value("city", "Testy Mctestersonville")
                .value("zip", "90210")
        });
}

#[rstest]
fn test_lookup(profile: inidoc::Document) {
    assert_eq!(profile.get("user", "age"), Some("35"));
    assert_eq!(profile.get("", "key"), Some("abcdefg"));
    assert_eq!(profile.get("user", "zip"), None);
    assert_eq!(profile.get("nowhere", "key"), None);
    assert_eq!(profile.pair_count(), 9);
}

#[test]
fn test_two_headers_in_a_row() {
    let source = "[first]\n[second]\nk=v\n";

    let doc = parse("t", source).unwrap();
    assert_document(&doc).section_names(&["second"]);

    let kept = parse_with("t", source, &ParseOptions::default().keep_empty_sections(true)).unwrap();
    assert_document(&kept)
        .section_names(&["first", "second"])
        .section(0, |s| s.pair_count(0));
}

#[test]
fn test_trailing_empty_section_is_kept() {
    let doc = parse("t", "k=v\n[tail]\n").unwrap();
    assert_document(&doc)
        .section_names(&["", "tail"])
        .section(1, |s| s.pair_count(0));
}

#[test]
fn test_repeated_sections_and_keys_are_preserved() {
    let doc = parse("t", "[a]\nk=1\nk=2\n[b]\nx=y\n[a]\nk=3\n").unwrap();
    assert_document(&doc)
        .section_names(&["a", "b", "a"])
        .section(0, |s| s.pairs(&[("k", "1"), ("k", "2")]).value("k", "2"));
    assert_eq!(doc.sections_named("a").count(), 2);
}

#[test]
fn test_values_keep_surrounding_whitespace() {
    let doc = parse("t", "k=  padded  \n").unwrap();
    assert_document(&doc).section(0, |s| s.pair(0, "k", "  padded  "));
}

#[test]
fn test_empty_value() {
    let doc = parse("t", "k=\n").unwrap();
    assert_document(&doc).section(0, |s| s.pair(0, "k", ""));
}

#[rstest]
#[case::unclosed("[user\nname=x\n", LexErrorKind::UnclosedSection)]
#[case::unterminated_value("key=abc", LexErrorKind::UnexpectedEndOfInput)]
#[case::unassigned("[a]\nkey\n", LexErrorKind::UnassignedKey)]
#[case::bad_key("[a]\nmy key=1\n", LexErrorKind::InvalidKey)]
#[case::bad_header("[a.b]\n", LexErrorKind::InvalidSectionName)]
#[case::stray("[a]\n#k=v\n", LexErrorKind::UnexpectedCharacter)]
fn test_lexical_failures(#[case] source: &str, #[case] expected: LexErrorKind) {
    let err = parse("t", source).unwrap_err();
    assert!(matches!(err, ParseError::Lex(_)));
    assert_eq!(err.lex_kind(), Some(expected));
}

#[test]
fn test_error_message_names_the_position() {
    let err = parse("t", "k=v\n[user\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unclosed section `user`, reached end of line before `]` at line 2, column 6"
    );
}

#[test]
fn test_skipping_stray_characters() {
    let options = ParseOptions::default().stray_characters(inidoc::StrayCharacters::Skip);
    let doc = parse_with("t", "[a]\n#k=v\n", &options).unwrap();
    assert_document(&doc).section(0, |s| s.name("a").pairs(&[("k", "v")]));
}

#[test]
fn test_strict_options_parse_well_formed_input() {
    let options = ParseOptions::strict();
    assert_eq!(options.dangling_keys, DanglingKeys::Reject);
    let doc = parse_with("t", PROFILE, &options).unwrap();
    assert_eq!(doc, parse("t", PROFILE).unwrap());
}

#[test]
fn test_parsing_is_repeatable() {
    assert_eq!(parse("t", PROFILE).unwrap(), parse("t", PROFILE).unwrap());
    assert_eq!(
        parse("t", "[x\n").unwrap_err(),
        parse("t", "[x\n").unwrap_err()
    );
}

#[rstest]
fn test_json_compact_snapshot(profile: inidoc::Document) {
    insta::assert_snapshot!(
        serialize(&profile, "json-compact").unwrap(),
        @r#"{"name":"test","sections":[{"name":"","keyValuePairs":[{"key":"key","value":"abcdefg"}]},{"name":"user","keyValuePairs":[{"key":"name","value":"Adam Eury"},{"key":"age","value":"35"},{"key":"job","value":"Software Engineer"},{"key":"email","value":"adam@test.com"}]},{"name":"address","keyValuePairs":[{"key":"street","value":"1800 Test Lane"},{"key":"city","value":"Testy Mctestersonville"},{"key":"state","value":"North Carolina"},{"key":"zip","value":"90210"}]}]}"#
    );
}

#[rstest]
fn test_treeviz_snapshot(profile: inidoc::Document) {
    insta::assert_snapshot!(to_treeviz_str(&profile), @r"
⧉ test
├─ § (preamble)
│ └─ ≔ key = abcdefg
├─ § user
│ ├─ ≔ name = Adam Eury
│ ├─ ≔ age = 35
│ ├─ ≔ job = Software Engineer
│ └─ ≔ email = adam@test.com
└─ § address
  ├─ ≔ street = 1800 Test Lane
  ├─ ≔ city = Testy Mctestersonville
  ├─ ≔ state = North Carolina
  └─ ≔ zip = 90210
");
}

#[rstest]
fn test_json_round_trips_through_serde(profile: inidoc::Document) {
    let json = serialize(&profile, "json").unwrap();
    let back: inidoc::Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, profile);
}
