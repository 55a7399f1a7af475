use graphascii_core::string_util::{longest_common_prefix, longest_common_suffix};

#[test]
fn prefix_of_a_single_item_is_the_item_itself() {
    assert_eq!(longest_common_prefix(&["solo"]), "solo");
}

#[test]
fn prefix_of_an_empty_list_is_empty() {
    assert_eq!(longest_common_prefix(&[]), "");
}

#[test]
fn prefix_stops_at_the_shortest_common_run() {
    assert_eq!(
        longest_common_prefix(&["interest", "internet", "internal"]),
        "inter"
    );
}

#[test]
fn suffix_mirrors_prefix_on_reversed_strings() {
    assert_eq!(
        longest_common_suffix(&["compression", "expression", "impression"]),
        "pression"
    );
}

#[test]
fn no_shared_affix_yields_the_empty_string() {
    assert_eq!(longest_common_prefix(&["apple", "banana"]), "");
    assert_eq!(longest_common_suffix(&["apple", "banana"]), "");
}
