use graphascii_core::printer::{print_canvas, RenderOptions, Spacing};
use graphascii_core::Symbol;

fn node_row(labels: &[&str]) -> Vec<Symbol> {
    let mut row = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            row.push(Symbol::Space);
        }
        row.push(Symbol::Node(label.to_string()));
    }
    row
}

#[test]
fn prefix_and_suffix_grouping_strips_both_ends() {
    let canvas = vec![node_row(&["foo-a-bar", "foo-b-bar"])];
    let options = RenderOptions::default();
    assert_eq!(print_canvas(&canvas, &options), "o o    foo-{a,b}-bar\n");
}

#[test]
fn grouping_below_min_length_falls_back_to_a_plain_list() {
    let canvas = vec![node_row(&["ab", "ac"])];
    let options = RenderOptions::default();
    // Common prefix "a" has length 1, below the default prefix_min_length of 4.
    assert_eq!(print_canvas(&canvas, &options), "o o    ab,ac\n");
}

#[test]
fn fixed_spacing_ignores_row_width() {
    let canvas = vec![node_row(&["short"]), node_row(&["a-much-longer-label"])];
    let options = RenderOptions {
        spacing: Spacing::Fixed,
        spaces: 4,
        ..RenderOptions::default()
    };
    let printed = print_canvas(&canvas, &options);
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines[0], "o    short");
    assert_eq!(lines[1], "o    a-much-longer-label");
}

#[test]
fn justified_spacing_pads_to_a_fixed_column_per_row() {
    let canvas = vec![node_row(&["x"])];
    let options = RenderOptions {
        spacing: Spacing::Justified,
        spaces: 6,
        ..RenderOptions::default()
    };
    assert_eq!(print_canvas(&canvas, &options), "o     x\n");
}

#[test]
fn a_row_with_only_empty_labels_skips_the_label_section_entirely() {
    let canvas = vec![vec![Symbol::Hold, Symbol::Space, Symbol::Hold]];
    let options = RenderOptions::default();
    assert_eq!(print_canvas(&canvas, &options), "| |\n");
}

#[test]
fn disabling_grouping_renders_every_label_verbatim() {
    let canvas = vec![node_row(&["foo-a-bar", "foo-b-bar"])];
    let options = RenderOptions {
        group_labels_by_prefix: false,
        group_labels_by_suffix: false,
        ..RenderOptions::default()
    };
    assert_eq!(print_canvas(&canvas, &options), "o o    foo-a-bar,foo-b-bar\n");
}
