//! End-to-end pipeline runs against the offline stub provider.

use clausediff::{compare, AlignConfig, CompareRequest, StubProvider};

fn provider() -> StubProvider {
    StubProvider::new(384, true)
}

fn request(original: &str, html: &str) -> CompareRequest {
    CompareRequest {
        original_document: original.to_string(),
        html_content: html.to_string(),
        start_marker: "START".to_string(),
        end_marker: "END".to_string(),
    }
}

#[tokio::test]
async fn changed_clause_gets_inline_diff_markup() {
    let original = "C1. Payment is due within 30 days.\nC2. The fee is $100.";
    let html = "<html><body><p>START</p>\
                <p>C1. Payment is due within 30 days.</p>\
                <p>C2. The fee is $200.</p>\
                <p>END</p></body></html>";
    let outcome = compare(&request(original, html), &provider(), &AlignConfig::default())
        .await
        .unwrap();

    assert_eq!(
        outcome.message,
        "Comparison completed successfully. Processed 2 original clauses and 2 revised clauses."
    );
    // The changed digit shows up as one deleted and one inserted span.
    assert!(outcome.html.contains("<span style=\"color:red;\">1</span>"));
    assert!(outcome
        .html
        .contains("&nbsp<span style=\"color:red;text-decoration:line-through;\">2</span>"));
    assert!(outcome.html.contains("<span>00.</span>"));
    // Matched rows must not carry whole-row coloring.
    assert!(!outcome
        .html
        .contains("<div style='font-family:Courier; font-size:15px; white-space:pre-wrap; color:red;'>C1."));
}

#[tokio::test]
async fn deleted_clause_renders_as_red_row() {
    let original = "C1. Delivery occurs at the buyer premises.\n\
                    C2. Risk passes upon acceptance of goods.\n\
                    C3. Warranty lasts twelve months after delivery.";
    let html = "<p>START</p>\
                <p>C1. Delivery occurs at the buyer premises.</p>\
                <p>C3. Warranty lasts twelve months after delivery.</p>\
                <p>END</p>";
    let outcome = compare(&request(original, html), &provider(), &AlignConfig::default())
        .await
        .unwrap();

    assert_eq!(outcome.original_clauses, 3);
    assert_eq!(outcome.revised_clauses, 2);
    // C2 survives only as a red (non struck-through) row, sentinel expanded.
    assert!(outcome.html.contains(
        "<div style='font-family:Courier; font-size:15px; white-space:pre-wrap; color:red;'>\
         C2. Risk passes upon acceptance of goods.<br></div>"
    ));
}

#[tokio::test]
async fn inserted_clause_renders_as_struck_row() {
    let original = "C1. Payment is due within 30 days.\nC2. The fee is $100.";
    let html = "<p>START</p>\
                <p>C1. Payment is due within 30 days.</p>\
                <p>C2. The fee is $100.</p>\
                <p>C3. Interest accrues on late payment.</p>\
                <p>END</p>";
    let outcome = compare(&request(original, html), &provider(), &AlignConfig::default())
        .await
        .unwrap();

    assert_eq!(outcome.original_clauses, 2);
    assert_eq!(outcome.revised_clauses, 3);
    assert!(outcome.html.contains(
        "<div style='font-family:Courier; font-size:15px; white-space:pre-wrap; \
         color:red;text-decoration:line-through;'>C3. Interest accrues on late payment.</div>"
    ));
}

#[tokio::test]
async fn identical_documents_render_without_edit_spans() {
    let original = "C1. Payment is due within 30 days.";
    let html = "<p>START</p><p>C1. Payment is due within 30 days.</p><p>END</p>";
    let outcome = compare(&request(original, html), &provider(), &AlignConfig::default())
        .await
        .unwrap();

    // Only the trailing sentinel differs between the sides, so the one
    // allowed red span is the sentinel deletion.
    assert!(outcome.html.contains("<span>C1. Payment is due within 30 days.</span>"));
    assert!(outcome.html.contains("<span style=\"color:red;\"><br></span>"));
    assert!(!outcome.html.contains("text-decoration:line-through"));
}

#[tokio::test]
async fn empty_original_yields_bare_wrapper() {
    let outcome = compare(
        &request("no clause heads here", "<p>START</p><p>C1. New clause.</p><p>END</p>"),
        &provider(),
        &AlignConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.original_clauses, 0);
    assert_eq!(outcome.revised_clauses, 1);
    assert_eq!(
        outcome.html,
        "<html><body style='font-family:Courier; font-size:15px; white-space:pre-wrap;'></body></html>"
    );
    assert_eq!(
        outcome.message,
        "Comparison completed successfully. Processed 0 original clauses and 1 revised clauses."
    );
}

#[tokio::test]
async fn empty_revised_side_deletes_everything() {
    let original = "C1. Payment is due.\nC2. Fees apply.";
    let outcome = compare(
        &request(original, "<p>START</p><p>no clause heads</p><p>END</p>"),
        &provider(),
        &AlignConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.revised_clauses, 0);
    assert_eq!(outcome.html.matches("color:red;'>").count(), 2);
    assert!(!outcome.html.contains("line-through"));
}

#[tokio::test]
async fn missing_markers_fall_back_to_whole_text() {
    let original = "C1. Payment is due within 30 days.";
    // No START/END anywhere: the whole stripped text is the window.
    let html = "<p>C1. Payment is due within 30 days.</p>";
    let outcome = compare(&request(original, html), &provider(), &AlignConfig::default())
        .await
        .unwrap();
    assert_eq!(outcome.revised_clauses, 1);
    assert!(outcome.html.contains("<span>C1. Payment is due within 30 days.</span>"));
}

#[tokio::test]
async fn document_rows_appear_in_slot_order() {
    let original = "C1. Alpha obligations apply fully.\nC2. Beta obligations apply fully.";
    let html = "<p>START</p>\
                <p>C1. Alpha obligations apply fully.</p>\
                <p>C2. Beta obligations apply fully.</p>\
                <p>C3. Gamma obligations apply fully.</p>\
                <p>END</p>";
    let outcome = compare(&request(original, html), &provider(), &AlignConfig::default())
        .await
        .unwrap();

    let alpha = outcome.html.find("Alpha").unwrap();
    let beta = outcome.html.find("Beta").unwrap();
    let gamma = outcome.html.find("Gamma").unwrap();
    assert!(alpha < beta && beta < gamma);
}
