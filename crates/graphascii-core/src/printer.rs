//! Printer: turns a canvas of symbol rows into the final diagram string.

use crate::error::Error;
use crate::string_util::{longest_common_prefix, longest_common_suffix};
use crate::symbol::Symbol;

/// Policy for separating the diagram from its labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spacing {
    /// Always insert exactly `spaces` blanks before the labels.
    Fixed,
    /// Pad to column `spaces` (at least one blank if the row already reached it).
    Justified,
    /// Pad to `global_max_row_width + spaces`, aligning labels across the whole diagram.
    AutoJustified,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::AutoJustified
    }
}

/// Printer configuration: spacing discipline and label-grouping thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    pub spacing: Spacing,
    pub spaces: usize,
    pub group_labels_by_prefix: bool,
    pub group_labels_by_suffix: bool,
    pub min_group_size: usize,
    pub prefix_min_length: usize,
    pub suffix_min_length: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            spacing: Spacing::AutoJustified,
            spaces: 4,
            group_labels_by_prefix: true,
            group_labels_by_suffix: true,
            min_group_size: 2,
            prefix_min_length: 4,
            suffix_min_length: 4,
        }
    }
}

impl RenderOptions {
    /// Reject configurations that would overflow column arithmetic. Not reachable through the
    /// `spacing` field itself (it is a closed enum), but `spaces` is caller-supplied.
    pub fn validate<N: std::fmt::Debug>(&self) -> Result<(), Error<N>> {
        if self.spaces == usize::MAX {
            return Err(Error::InvalidConfig {
                reason: "spaces must leave room for column arithmetic".to_string(),
            });
        }
        Ok(())
    }
}

/// Render a canvas (sequence of symbol rows) to its final string form. Empty input renders as
/// the empty string, rather than a lone trailing newline.
pub fn print_canvas(canvas: &[Vec<Symbol>], options: &RenderOptions) -> String {
    if canvas.is_empty() {
        return String::new();
    }

    let max_size = canvas.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = String::new();
    for row in canvas {
        out.push_str(&print_row(row, max_size, options));
        out.push('\n');
    }
    out
}

fn print_row(row: &[Symbol], max_size: usize, options: &RenderOptions) -> String {
    let mut output = String::new();
    let mut labels: Vec<String> = Vec::new();

    for symbol in row {
        if let Some(label) = symbol.label() {
            labels.push(label.to_string());
        }
        output.push(symbol.to_char());
    }

    if labels.iter().any(|l| !l.is_empty()) {
        output.push_str(&spacing_suffix(&output, max_size, options));
        output.push_str(&format_labels(labels, options));
    }

    output
}

fn spacing_suffix(output: &str, max_size: usize, options: &RenderOptions) -> String {
    let used_chars = output.chars().count();
    if used_chars == 0 {
        return String::new();
    }

    let spaces = match options.spacing {
        Spacing::Fixed => options.spaces,
        Spacing::Justified => (options.spaces as isize - used_chars as isize).max(1) as usize,
        Spacing::AutoJustified => {
            let alignment = max_size + options.spaces;
            (alignment as isize - used_chars as isize).max(0) as usize
        }
    };

    " ".repeat(spaces)
}

fn format_labels(labels: Vec<String>, options: &RenderOptions) -> String {
    let (prefix, labels) = maybe_group_by_prefix(labels, options);
    let (labels, suffix) = maybe_group_by_suffix(labels, options);

    let joined = labels
        .iter()
        .map(|name| if name.is_empty() { "?" } else { name.as_str() })
        .collect::<Vec<_>>()
        .join(",");

    if !prefix.is_empty() || !suffix.is_empty() {
        format!("{prefix}{{{joined}}}{suffix}")
    } else {
        joined
    }
}

fn maybe_group_by_prefix(labels: Vec<String>, options: &RenderOptions) -> (String, Vec<String>) {
    if !options.group_labels_by_prefix || labels.len() < options.min_group_size {
        return (String::new(), labels);
    }

    let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let prefix = longest_common_prefix(&refs);
    if prefix.chars().count() < options.prefix_min_length {
        return (String::new(), labels);
    }

    let prefix_len = prefix.len();
    let stripped = labels.iter().map(|l| l[prefix_len..].to_string()).collect();
    (prefix, stripped)
}

fn maybe_group_by_suffix(labels: Vec<String>, options: &RenderOptions) -> (Vec<String>, String) {
    if !options.group_labels_by_suffix || labels.len() < options.min_group_size {
        return (labels, String::new());
    }

    let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let suffix = longest_common_suffix(&refs);
    if suffix.chars().count() < options.suffix_min_length {
        return (labels, String::new());
    }

    let suffix_len = suffix.len();
    let stripped = labels
        .iter()
        .map(|l| l[..l.len() - suffix_len].to_string())
        .collect();
    (stripped, suffix)
}
