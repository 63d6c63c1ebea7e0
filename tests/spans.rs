//! Behavioural tests for links and macro calls at spacing boundaries.

mod prelude;
use prelude::*;

#[test]
fn inserts_space_before_link_after_ideograph() {
    assert_fixed(
        "你好[World](http://example.com)",
        "你好 [World](http://example.com)",
    );
}

#[test]
fn punctuation_before_link_suppresses_the_space() {
    assert_unchanged("你好，[World](http://example.com)");
}

#[test]
fn ideographic_display_glues_to_ideographic_context() {
    assert_unchanged("中文[世界](url)继续");
}

#[rstest]
#[case("[a](u)[b](v)", "[a](u) [b](v)")]
#[case("[a](u)  [b](v)", "[a](u) [b](v)")]
#[case("{{a(\"中\")}}{{b(\"文\")}}", "{{a(\"中\")}}{{b(\"文\")}}")]
#[case("{{a(\"中\")}} {{b(\"文\")}}", "{{a(\"中\")}}{{b(\"文\")}}")]
fn adjacent_spans_get_one_decision(#[case] input: &str, #[case] expected: &str) {
    assert_fixed(input, expected);
}

#[test]
fn macro_uses_second_parameter_for_boundaries() {
    // 顯...字 are ideographs, so the macro glues to ideographic context.
    assert_unchanged("前文{{domxref(\"Foo\", \"顯示文字\")}}后文");
    // With only the Latin first parameter the same context needs spaces.
    assert_fixed(
        "前文{{domxref(\"Foo\")}}后文",
        "前文 {{domxref(\"Foo\")}} 后文",
    );
}

#[test]
fn span_content_is_copied_verbatim() {
    let input = "说明[點擊here](https://example.com/路径?q=1)军文";
    let output = mdspacefix::process_document(input);
    assert!(output.contains("[點擊here](https://example.com/路径?q=1)"));
}

#[rstest]
#[case("{{Compat}}")]
#[case("{{EmbedLiveSample('示例')}}")]
#[case("中文{{jsxref(\"a\", \"b\", \"c\")}}后")]
#[case("[broken link")]
#[case("[]()文字")]
fn unrecognised_syntax_is_inert(#[case] input: &str) {
    assert_unchanged(input);
}

#[test]
fn malformed_spans_still_get_plain_text_spacing() {
    assert_fixed("中文[broken后记", "中文[broken 后记");
}

#[test]
fn image_prefix_is_plain_text() {
    // The bang sits outside the link grammar and spaces like any symbol.
    assert_fixed("图片![alt](u)", "图片! [alt](u)");
}

#[test]
fn link_at_line_start_drops_leading_blanks() {
    assert_fixed("  [a](u)中文", "[a](u) 中文");
}

#[test]
fn macro_second_parameter_empty_falls_back_to_first() {
    assert_fixed(
        "集成{{domxref(\"Foo\", \"\")}}测试",
        "集成 {{domxref(\"Foo\", \"\")}} 测试",
    );
}
