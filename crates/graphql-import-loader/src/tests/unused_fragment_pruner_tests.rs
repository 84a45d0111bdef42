use crate::remove_unused_fragments;
use crate::tests::test_utils::definition_names;
use crate::tests::test_utils::parse;

#[test]
fn unreferenced_fragment_is_removed() {
    let doc = parse(concat!(
        "query { ...a }\n",
        "fragment a on T { f }\n",
        "fragment b on T { g }\n",
    ));

    assert_eq!(definition_names(&remove_unused_fragments(&doc)), vec!["<anon>", "a"]);
}

#[test]
fn spreads_nested_in_fields_and_inline_fragments_count() {
    let doc = parse(concat!(
        "query Q {\n",
        "  user {\n",
        "    ... on User { ...inInline }\n",
        "    friends { ...inField }\n",
        "  }\n",
        "}\n",
        "fragment inInline on User { id }\n",
        "fragment inField on User { name }\n",
    ));

    assert_eq!(remove_unused_fragments(&doc), doc);
}

#[test]
fn fragments_referenced_by_other_fragments_are_kept() {
    let doc = parse(concat!(
        "query Q { ...a }\n",
        "fragment a on T { ...b }\n",
        "fragment b on T { ...c }\n",
        "fragment c on T { f }\n",
    ));

    assert_eq!(remove_unused_fragments(&doc), doc);
}

#[test]
fn chains_of_unused_fragments_are_removed_over_several_passes() {
    let doc = parse(concat!(
        "query Q { f }\n",
        "fragment a on T { ...b }\n",
        "fragment b on T { ...c }\n",
        "fragment c on T { g }\n",
    ));

    assert_eq!(definition_names(&remove_unused_fragments(&doc)), vec!["Q"]);
}

#[test]
fn fragments_only_document_is_emptied() {
    let doc = parse("fragment a on T { ...b } fragment b on T { f }");
    assert!(remove_unused_fragments(&doc).definitions.is_empty());
}

#[test]
fn self_referencing_fragment_is_retained() {
    let doc = parse("query Q { f } fragment loop on T { ...loop }");
    assert_eq!(definition_names(&remove_unused_fragments(&doc)), vec!["Q", "loop"]);
}

#[test]
fn dangling_spread_is_left_alone() {
    let doc = parse("query Q { ...missing } fragment unused on T { f }");
    assert_eq!(definition_names(&remove_unused_fragments(&doc)), vec!["Q"]);
}

#[test]
fn pruning_reaches_a_fixed_point() {
    let doc = parse(concat!(
        "query Q { ...a }\n",
        "fragment a on T { f }\n",
        "fragment x on T { ...y }\n",
        "fragment y on T { g }\n",
    ));

    let once = remove_unused_fragments(&doc);
    assert_eq!(remove_unused_fragments(&once), once);
    assert_eq!(definition_names(&once), vec!["Q", "a"]);
}
