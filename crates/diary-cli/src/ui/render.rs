//! Rendering primitives for CLI output.

use diary_core::EntryView;

use super::context::UiContext;
use super::format::{format_timestamp, underline};
use super::theme::{styled, styles};

/// Per-entry commands offered while browsing, in display order.
pub const BROWSE_ACTIONS: &[(&str, &str)] = &[
    ("n", "next entry"),
    ("p", "next page"),
    ("e", "edit entry"),
    ("d", "delete entry"),
    ("q", "return to menu"),
];

/// Render one entry with its position, bracketed by `+` rules.
pub fn entry_block(ctx: &UiContext, view: &EntryView<'_>) -> String {
    let stamp = format_timestamp(&view.entry.timestamp);
    let rule = underline(&stamp);

    let mut out = String::new();
    out.push_str(&styled(
        &format!("Page {} of {}.", view.page, view.total_pages),
        styles::dim(),
        ctx.color,
    ));
    out.push('\n');
    out.push_str(&styled(
        &format!("Entry {} of {}.", view.record, view.total_records),
        styles::dim(),
        ctx.color,
    ));
    out.push_str("\n\n");
    out.push_str(&styled(&stamp, styles::bold(), ctx.color));
    out.push('\n');
    out.push_str(&rule);
    out.push_str("\n\n");
    out.push_str(&view.entry.content);
    out.push_str("\n\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&choices(BROWSE_ACTIONS));
    out
}

/// Render `key) label` lines.
pub fn choices(items: &[(&str, &str)]) -> String {
    items
        .iter()
        .map(|(key, label)| format!("{}) {}\n", key, label))
        .collect()
}
