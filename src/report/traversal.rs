// src/report/traversal.rs
// =============================================================================
// This module walks a LibGuides export and records every link it finds.
//
// Each link becomes one row of five cells:
//
//   URL | Object Type | Id | LibGuides Link | Embedded
//
// - Object Type says where the link lives, e.g.
//   "Guide (10) Page (20) Boxes (30) Pane (1) Asset"
// - Id is the id of the object holding the URL, or "i of n" when the link
//   was pulled out of a description (the i-th of n links found there)
// - LibGuides Link points back at the page a person would open to fix it
// - Embedded is "true" for links found inside description text
//
// Walk order is fixed: accounts, groups, subjects, then each guide with its
// group, subjects and pages, each page with its boxes, each box with its
// assets and then its panes. Rows come out in the same order as the export.
//
// Hidden pages and hidden boxes are skipped along with everything inside
// them.
// =============================================================================

use crate::export::{Asset, Document, Guide, GuideBox, Page};
use crate::table::ReportTable;

use super::scanner::extract_http_links;

/// Column names of a link report
pub const LINK_REPORT_HEADINGS: [&str; 5] = ["URL", "Object Type", "Id", "LibGuides Link", "Embedded"];

// Builds a fresh link report table for a document
//
// Parameters:
//   doc: the decoded export
//   site_prefix: base URL of the LibGuides site, e.g. "https://libguides.example.edu"
pub fn build_link_report(doc: &Document, site_prefix: &str) -> ReportTable {
    let mut table = ReportTable::new();
    table.append_headings(LINK_REPORT_HEADINGS);
    collect_links(doc, site_prefix, &mut table);
    table
}

// Appends one row per link found in the document to `table`
pub fn collect_links(doc: &Document, site_prefix: &str, table: &mut ReportTable) {
    for account in &doc.accounts {
        if !account.website.is_empty() {
            push_row(table, &account.website, "Account", account.id, "", false);
        }
    }

    for group in &doc.groups {
        if !group.url.is_empty() {
            push_row(table, &group.url, "Group", group.id, &group.url, false);
        }
    }

    for subject in &doc.subjects {
        if !subject.url.is_empty() {
            let back_link = format!("{}/sb.php?subject_id={}", site_prefix, subject.id);
            push_row(table, &subject.url, "Subject", subject.id, &back_link, false);
        }
    }

    for guide in &doc.guides {
        walk_guide(guide, site_prefix, table);
    }
}

fn walk_guide(guide: &Guide, site_prefix: &str, table: &mut ReportTable) {
    let label = format!("Guide ({})", guide.id);

    if !guide.url.is_empty() {
        push_row(table, &guide.url, "Guide", guide.id, &guide.url, false);
    }

    let group = &guide.group;
    if !group.url.is_empty() {
        push_row(table, &group.url, &format!("{} Group", label), group.id, &group.url, false);
    }

    for subject in &guide.subjects {
        if !subject.url.is_empty() {
            push_row(table, &subject.url, &format!("{} Subject", label), subject.id, &subject.url, false);
        }
    }

    for page in &guide.pages {
        walk_page(guide, page, &label, site_prefix, table);
    }
}

fn walk_page(guide: &Guide, page: &Page, guide_label: &str, site_prefix: &str, table: &mut ReportTable) {
    if page.is_hidden() {
        return;
    }

    // Everything under a page links back to the page view
    let back_link = format!("{}/c.php?g={}&p={}", site_prefix, guide.id, page.id);

    if !page.url.is_empty() {
        push_row(table, &page.url, &format!("{} Page", guide_label), page.id, &page.url, false);
    }

    let page_label = format!("{} Page ({})", guide_label, page.id);
    push_embedded_rows(table, &page.description, &format!("{} Description", page_label), &back_link);

    for guide_box in &page.boxes {
        walk_box(guide_box, &page_label, &back_link, table);
    }
}

fn walk_box(guide_box: &GuideBox, page_label: &str, back_link: &str, table: &mut ReportTable) {
    if guide_box.is_hidden() {
        return;
    }

    let box_label = format!("{} Boxes ({})", page_label, guide_box.id);

    for asset in &guide_box.assets {
        walk_asset(asset, &box_label, back_link, table);
    }

    // Panes have no id of their own, so they are numbered from 1
    for (i, pane) in guide_box.panes.iter().enumerate() {
        let pane_label = format!("{} Pane ({})", box_label, i + 1);
        for asset in &pane.assets {
            walk_asset(asset, &pane_label, back_link, table);
        }
    }
}

fn walk_asset(asset: &Asset, container_label: &str, back_link: &str, table: &mut ReportTable) {
    if !asset.url.is_empty() {
        push_row(table, &asset.url, &format!("{} Asset", container_label), asset.id, back_link, false);
    }

    let label = format!("{} Asset ({}) Description", container_label, asset.id);
    push_embedded_rows(table, &asset.description, &label, back_link);
}

// Scans a description and adds one row per URL found, numbered "i of n"
fn push_embedded_rows(table: &mut ReportTable, description: &str, object_type: &str, back_link: &str) {
    if description.is_empty() {
        return;
    }

    let links = extract_http_links(description);
    let count = links.len();
    for (i, url) in links.into_iter().enumerate() {
        let position = format!("{} of {}", i + 1, count);
        table.append_row([url, object_type.to_string(), position, back_link.to_string(), "true".to_string()]);
    }
}

fn push_row(table: &mut ReportTable, url: &str, object_type: &str, id: i64, back_link: &str, embedded: bool) {
    let id = id.to_string();
    let embedded = if embedded { "true" } else { "false" };
    table.append_row([url, object_type, id.as_str(), back_link, embedded]);
}
