use d2lootfilter::{
    evaluate, parse, parse_lines, validate, Filter, FormatErrorKind, Instruction, ItemClass,
    LootFilterError, MemoryCatalog, ParseErrorKind, PropertyKind, ResolvedRule, Verb,
};

fn catalog() -> MemoryCatalog {
    MemoryCatalog::new()
        .with_name("cap", "Cap")
        .with_name("xap", "War Cap")
        .with_name("key", "Key")
        .with_rune("r01", "El Rune")
        .with_rune("Runeword1", "Ancient's Pledge")
        .with_class(ItemClass::Helmet, ["cap", "xap"])
}

fn format_kind(src: &str) -> FormatErrorKind {
    match Filter::from_source(src, &catalog()) {
        Err(LootFilterError::Format(err)) => err.kind,
        other => panic!("expected format error, got {other:?}"),
    }
}

// --- Block splitting -------------------------------------------------------

#[test]
fn empty_input_has_no_blocks() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("\n\n# only comments\n").unwrap().is_empty());
}

#[test]
fn block_at_end_of_input_without_newline() {
    let blocks = parse("Hide\n    BaseType Cap").unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].properties[0].raw, "Cap");
}

#[test]
fn comment_line_closes_block() {
    let err = parse("Show\n# note\n    BaseType Cap\n").unwrap_err();
    assert_eq!(err.line(), 3);
    assert_eq!(err.kind(), &ParseErrorKind::OrphanProperty);
}

#[test]
fn whitespace_only_line_inside_block_is_invalid_property() {
    let err = parse("Show\n    \n    BaseType Cap\n").unwrap_err();
    assert_eq!(err.line(), 2);
    assert_eq!(err.kind(), &ParseErrorKind::InvalidProperty(String::new()));
}

#[test]
fn whitespace_only_line_outside_block_is_orphan() {
    let err = parse("   \nShow\n").unwrap_err();
    assert_eq!(err.line(), 1);
    assert_eq!(err.kind(), &ParseErrorKind::OrphanProperty);
}

#[test]
fn verb_without_separator_is_rejected() {
    let err = parse("Show\nHide\n").unwrap_err();
    assert_eq!(err.line(), 2);
    assert_eq!(err.kind(), &ParseErrorKind::ExpectedIndentation);
}

#[test]
fn indented_first_line_is_orphan() {
    let err = parse("    BaseType Cap\n").unwrap_err();
    assert_eq!(err.line(), 1);
    assert_eq!(err.kind(), &ParseErrorKind::OrphanProperty);
}

#[test]
fn unknown_keywords() {
    let err = parse("Shw\n").unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::InvalidVerb("Shw".into()));
    assert_eq!(err.to_string(), "parse error @ line 1: invalid verb 'Shw'");

    let err = parse("Show\n    basetype Cap\n").unwrap_err();
    assert_eq!(err.line(), 2);
    assert_eq!(err.kind(), &ParseErrorKind::InvalidProperty("basetype".into()));
}

#[test]
fn tab_indentation_and_crlf() {
    let blocks = parse("Show\r\n\tBaseType Cap\r\n").unwrap();
    assert_eq!(blocks[0].properties[0].kind, PropertyKind::BaseType);
    assert_eq!(blocks[0].properties[0].raw, "Cap");
}

#[test]
fn parse_lines_matches_parse() {
    let text = "Rename\n    BaseType Cap\n    To \"x\"\n\nHide\n";
    let from_lines = parse_lines(text.lines().map(str::to_owned)).unwrap();
    assert_eq!(from_lines, parse(text).unwrap());
}

// --- Argument lexing -------------------------------------------------------

#[test]
fn unterminated_quote() {
    assert_eq!(
        format_kind("Show\n    BaseType \"Cap\n"),
        FormatErrorKind::UnterminatedQuote
    );
}

#[test]
fn quote_must_be_followed_by_space() {
    assert_eq!(
        format_kind("Show\n    BaseType \"Cap\"x\n"),
        FormatErrorKind::MissingSpaceAfterQuote
    );
}

#[test]
fn empty_quoted_first_argument() {
    assert_eq!(
        format_kind("Show\n    BaseType \"\"\n"),
        FormatErrorKind::EmptyArgument
    );
    assert_eq!(
        format_kind("Show\n    Class \"  \" Helmet\n"),
        FormatErrorKind::EmptyArgument
    );
}

#[test]
fn empty_quoted_argument_ends_the_list() {
    let filter = Filter::from_source("Show\n    BaseType == Cap \"\"\n", &catalog()).unwrap();
    assert_eq!(filter.rules()[0].targets().collect::<Vec<_>>(), ["cap"]);

    assert_eq!(
        format_kind("Show\n    BaseType Cap \"  \" Key\n"),
        FormatErrorKind::TrailingData {
            property: PropertyKind::BaseType,
            rest: "Key".into(),
        }
    );
}

#[test]
fn trailing_blanks_are_ignored() {
    let filter = Filter::from_source("Show\n    BaseType Key   \n    AddVfx Beam \t\n", &catalog())
        .unwrap();
    assert_eq!(filter.rules()[0].targets().collect::<Vec<_>>(), ["key"]);
}

#[test]
fn operator_must_stand_alone() {
    assert_eq!(
        format_kind("Show\n    BaseType ==Cap\n"),
        FormatErrorKind::NoBaseTypeMatch("==Cap".into())
    );
}

#[test]
fn base_type_needs_an_argument() {
    assert_eq!(
        format_kind("Show\n    BaseType\n"),
        FormatErrorKind::MissingArgument(PropertyKind::BaseType)
    );
    assert_eq!(
        format_kind("Show\n    BaseType ==\n"),
        FormatErrorKind::MissingArgument(PropertyKind::BaseType)
    );
}

// --- Evaluation ------------------------------------------------------------

#[test]
fn block_without_properties_is_unconstrained() {
    let rule = evaluate(&Instruction::new(1, Verb::Hide), &catalog()).unwrap();
    assert_eq!(rule.base_types, None);
    assert_eq!(rule.targets().count(), 0);
}

#[test]
fn error_line_is_the_verb_line() {
    let err = Filter::from_source("\n\nShow\n    AddVfx Beam\n    AddVfx Sparkle\n", &catalog())
        .unwrap_err();
    let LootFilterError::Format(err) = err else {
        panic!("expected format error");
    };
    assert_eq!(err.line, 3);
    assert_eq!(err.kind, FormatErrorKind::InvalidVfx("Sparkle".into()));
}

#[test]
fn add_vfx_takes_one_token() {
    assert_eq!(
        format_kind("Show\n    AddVfx Beam Flash\n"),
        FormatErrorKind::TrailingData {
            property: PropertyKind::AddVfx,
            rest: "Flash".into(),
        }
    );
}

#[test]
fn to_takes_one_argument() {
    assert_eq!(
        format_kind("Rename\n    BaseType Key\n    To \"a\" \"b\"\n"),
        FormatErrorKind::TrailingData {
            property: PropertyKind::To,
            rest: "\"b\"".into(),
        }
    );
}

#[test]
fn play_sound_is_unsupported() {
    assert_eq!(
        format_kind("Show\n    PlaySound drop.wav\n"),
        FormatErrorKind::Unsupported(PropertyKind::PlaySound)
    );
}

#[test]
fn non_rune_keys_in_rune_table_are_ignored() {
    assert_eq!(
        format_kind("Show\n    BaseType Pledge\n"),
        FormatErrorKind::NoBaseTypeMatch("Pledge".into())
    );
}

#[test]
fn empty_class_intersection_is_not_an_error() {
    let filter = Filter::from_source("Show\n    BaseType Key\n    Class Helmet\n", &catalog())
        .unwrap();
    assert_eq!(filter.rules()[0].base_types, Some(Default::default()));
}

#[test]
fn class_names_are_case_sensitive() {
    assert_eq!(
        format_kind("Show\n    Class helmet\n"),
        FormatErrorKind::InvalidClass("helmet".into())
    );
}

#[test]
fn na_class_is_unknown() {
    let catalog = catalog().with_class(ItemClass::Unknown, ["key"]);
    let filter = Filter::from_source("Hide\n    Class N/A\n", &catalog).unwrap();
    assert_eq!(filter.rules()[0].targets().collect::<Vec<_>>(), ["key"]);
}

// --- Validation ------------------------------------------------------------

#[test]
fn overlapping_fragments_in_one_rule_are_not_a_conflict() {
    let filter = Filter::from_source("Hide\n    BaseType Cap \"War Cap\"\n", &catalog()).unwrap();
    assert_eq!(filter.rules()[0].targets().count(), 2);
}

#[test]
fn unconstrained_rules_never_conflict() {
    let rules = [ResolvedRule::new(1, Verb::Show), ResolvedRule::new(3, Verb::Hide)];
    assert!(validate(&rules).is_ok());
}

#[test]
fn conflict_reports_first_claim() {
    let src = "Show\n    BaseType \"War Cap\"\n\nHide\n    Class Helmet\n\nRename\n    BaseType Cap\n";
    let err = Filter::from_source(src, &catalog()).unwrap_err();
    let LootFilterError::Conflict(conflict) = err else {
        panic!("expected conflict");
    };
    assert_eq!(conflict.base_type, "xap");
    assert_eq!((conflict.first_line, conflict.second_line), (1, 4));
}
