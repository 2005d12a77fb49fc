use super::*;

#[test]
fn acronyms_round_trip() {
    for &platform in Platform::all() {
        let parsed: Platform = platform.acronym().parse().unwrap();
        assert_eq!(parsed, platform, "round-trip failed for {:?}", platform);
    }
}

#[test]
fn acronyms_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for &platform in Platform::all() {
        assert!(
            seen.insert(platform.acronym()),
            "duplicate acronym {}",
            platform.acronym()
        );
    }
}

#[test]
fn known_acronyms_resolve_to_display_names() {
    assert_eq!(resolve_platform("NA"), "Naver Webtoon");
    assert_eq!(resolve_platform("DA"), "Daum Webtoon");
    assert_eq!(resolve_platform("LZ"), "Lezhin Comics");
}

#[test]
fn unknown_acronyms_pass_through() {
    assert_eq!(resolve_platform("ZZ"), "ZZ");
    assert_eq!(resolve_platform("WT"), "WT");
    assert_eq!(resolve_platform(""), "");
}

#[test]
fn acronym_matching_is_case_sensitive() {
    let result: Result<Platform, _> = "na".parse();
    assert!(result.is_err());
    assert_eq!(resolve_platform("na"), "na");
}

#[test]
fn display_returns_display_name() {
    assert_eq!(Platform::Naver.to_string(), "Naver Webtoon");
    assert_eq!(Platform::MrBlue.to_string(), "Mr.Blue");
}
