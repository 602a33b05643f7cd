// tests/reconstruct_tests.rs

use luau_reconstruct::ast::{AstDocument, Node, StatBlock};
use luau_reconstruct::buffer::{PositionedBuffer, WriteMode};
use luau_reconstruct::diagnostics::{CollectingSink, NullSink, ReconstructError};
use luau_reconstruct::render::{
    build_default_registry, default_registry, reconstruct, walk, RenderContext, RenderOutcome,
};
use serde_json::{json, Value};

// A helper to decode a block from inline JSON.
fn block(body: Value) -> StatBlock {
    let node: Node = serde_json::from_value(json!({
        "type": "AstStatBlock",
        "location": "0,0 - 9,0",
        "hasEnd": false,
        "body": body
    }))
    .unwrap();
    match node {
        Node::Block(block) => block,
        other => panic!("expected a block, got {other:?}"),
    }
}

fn global_assign(name: &str, row: usize, value: f64) -> Value {
    json!({
        "type": "AstStatAssign",
        "location": format!("{row},0 - {row},5"),
        "vars": [{"type": "AstExprGlobal", "global": name, "location": format!("{row},0 - {row},1")}],
        "values": [{"type": "AstExprConstantNumber", "value": value, "location": format!("{row},4 - {row},5")}]
    })
}

// ---
// Whole-document reconstruction
// ---

#[test]
fn fixture_keeps_layout_except_for_end_offset() {
    let doc = AstDocument::from_path("tests/fixtures/simple.json".as_ref()).unwrap();
    let mut sink = CollectingSink::new();
    let result = reconstruct(&doc.root, default_registry(), &mut sink).unwrap();

    // The dump records the block end after the `end` keyword, and `end` is written there.
    assert_eq!(
        result.text,
        "local x = 1\ny = \"hi\"\ndo\n  local z\n   end"
    );
    let original = std::fs::read_to_string("tests/fixtures/simple.luau").unwrap();
    let lines: Vec<&str> = result.text.lines().collect();
    assert_eq!(lines[..4], original.lines().collect::<Vec<_>>()[..4]);
    assert!(result.outcome.is_complete());
    assert!(sink.is_empty());
}

#[test]
fn unknown_statement_halts_the_walk() {
    let root = block(json!([
        global_assign("a", 0, 1.0),
        {"type": "AstStatWhile", "location": "1,0 - 1,20"},
        global_assign("b", 2, 2.0)
    ]));
    let mut sink = CollectingSink::new();
    let result = reconstruct(&root, default_registry(), &mut sink).unwrap();

    assert_eq!(result.text, "a = 1");
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.reported[0].kind, "AstStatWhile");
    match &result.outcome {
        RenderOutcome::Partial { unsupported } => {
            assert_eq!(unsupported.len(), 1);
            assert_eq!(unsupported[0].location, "1,0 - 1,20");
        }
        RenderOutcome::Complete => panic!("expected a partial outcome"),
    }
}

#[test]
fn halt_inside_do_block_does_not_stop_the_enclosing_block() {
    let root = block(json!([
        {
            "type": "AstStatBlock",
            "location": "0,0 - 2,0",
            "hasEnd": true,
            "body": [
                {"type": "AstStatRepeat", "location": "1,2 - 1,12"},
                global_assign("lost", 1, 0.0)
            ]
        },
        global_assign("c", 3, 3.0)
    ]));
    let result = reconstruct(&root, default_registry(), &mut NullSink).unwrap();

    assert_eq!(result.text, "do\n\nend\nc = 3");
    assert_eq!(result.outcome.unsupported().len(), 1);
}

#[test]
fn type_annotations_are_skipped_silently() {
    let root = block(json!([
        {"type": "AstTypeReference", "location": "0,0 - 0,6", "name": "number"},
        global_assign("a", 1, 1.0)
    ]));
    let mut sink = CollectingSink::new();
    let result = reconstruct(&root, default_registry(), &mut sink).unwrap();

    assert_eq!(result.text, "\na = 1");
    assert!(sink.is_empty());
    assert!(result.outcome.is_complete());
}

#[test]
fn do_block_without_explicit_end_emits_no_end() {
    let root = block(json!([
        {"type": "AstStatBlock", "location": "0,0 - 1,0", "hasEnd": false, "body": []}
    ]));
    let result = reconstruct(&root, default_registry(), &mut NullSink).unwrap();
    assert_eq!(result.text, "do");
}

#[test]
fn malformed_span_fails_fast() {
    let doc = AstDocument::from_path("tests/fixtures/malformed_span.json".as_ref()).unwrap();
    let err = reconstruct(&doc.root, default_registry(), &mut NullSink).unwrap_err();
    assert!(matches!(err, ReconstructError::MalformedSpan { location, .. } if location == "zero - five"));
}

// ---
// Extending and composing
// ---

#[test]
fn custom_renderer_handles_an_unmodelled_kind() {
    fn render_while(
        node: &Node,
        cx: &mut RenderContext<'_>,
    ) -> Result<(), ReconstructError> {
        let span = node.location().span()?;
        cx.write("while true do", span.start);
        cx.write("end", span.end);
        Ok(())
    }

    let mut registry = build_default_registry();
    registry.register("AstStatWhile", render_while);

    let root = block(json!([
        {"type": "AstStatWhile", "location": "0,0 - 1,0"},
        global_assign("a", 2, 1.0)
    ]));
    let mut sink = CollectingSink::new();
    let result = reconstruct(&root, &registry, &mut sink).unwrap();

    assert_eq!(result.text, "while true do\nend\na = 1");
    assert!(sink.is_empty());
}

#[test]
fn walk_writes_into_a_caller_supplied_buffer() {
    let mut buffer = PositionedBuffer::new();
    buffer.write_at("-- header", Default::default(), WriteMode::Overwrite);

    let root = block(json!([global_assign("a", 1, 1.0)]));
    let mut sink = NullSink;
    let mut cx = RenderContext::with_buffer(buffer, default_registry(), &mut sink);
    walk(&root, &mut cx).unwrap();
    let (buffer, outcome) = cx.finish();

    assert_eq!(buffer.render(), "-- header\na = 1");
    assert!(outcome.is_complete());
}

#[test]
fn missing_do_block_renderer_reports_nested_block() {
    let mut registry = build_default_registry();
    registry.remove("DoBlock");

    let root = block(json!([
        {"type": "AstStatBlock", "location": "0,0 - 1,0", "hasEnd": true, "body": []},
        global_assign("a", 2, 1.0)
    ]));
    let mut sink = CollectingSink::new();
    let result = reconstruct(&root, &registry, &mut sink).unwrap();

    assert_eq!(result.text, "");
    assert_eq!(sink.reported[0].kind, "AstStatBlock");
}

#[test]
fn insert_mode_renderer_pushes_later_rows_down() {
    // Materializes lines that were not in the original text above the node.
    fn render_with_banner(
        node: &Node,
        cx: &mut RenderContext<'_>,
    ) -> Result<(), ReconstructError> {
        let start = node.location().start()?;
        cx.write_with("-- moved\n-- here", start, WriteMode::Insert);
        Ok(())
    }

    let mut registry = build_default_registry();
    registry.register("AstStatBanner", render_with_banner);

    let root = block(json!([
        global_assign("a", 0, 1.0),
        {"type": "AstStatBanner", "location": "0,0 - 0,8"}
    ]));
    let result = reconstruct(&root, &registry, &mut NullSink).unwrap();

    assert_eq!(result.text, "-- moved\n-- here\na = 1");
}

#[test]
fn single_line_insert_does_not_shift_rows() {
    let mut buffer = PositionedBuffer::new();
    buffer.write_at("a = 1", Default::default(), WriteMode::Overwrite);
    buffer.write_at("b", Default::default(), WriteMode::Insert);
    assert_eq!(buffer.row_count(), 1);
    assert_eq!(buffer.render(), "b = 1");
}

#[test]
fn out_of_range_span_is_malformed_not_a_panic() {
    let root = block(json!([
        {"type": "AstExprConstantNil", "location": "0,18446744073709551615 - 0,0"}
    ]));
    let err = reconstruct(&root, default_registry(), &mut NullSink).unwrap_err();
    assert!(matches!(err, ReconstructError::MalformedSpan { reason, .. } if reason.contains("exceeds")));
}
