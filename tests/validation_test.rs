//! Tests for DSL validation and the validation report

use flkit::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

const DOUBLE_FRAME_MISUSE: &str = r#"
let doubleLayout = DoubleFrameLayout()
doubleLayout <+ imageView
doubleLayout +> label
doubleLayout +> anotherLabel // Error: multiple right views

let stack = VStackLayout()
stack + + view1 // Error: double + operator
"#;

const NSLAYOUT_MESSAGE: &str = "NSLayoutConstraint is not allowed in FrameLayoutKit code. Replace constraint activation with a FrameLayoutKit layout.";

#[test]
fn test_doubled_attach_operator() {
    let result = validate_source("stack + + view1", CheckLevel::Full);

    assert!(!result.is_valid);
    assert!(result
        .error_messages()
        .contains(&"Double + operator detected. Each + should have a view on both sides."));
}

#[test]
fn test_constraint_activation_at_syntax_level() {
    let source = "NSLayoutConstraint.activate([\n    a.widthAnchor.constraint(equalToConstant: 10)\n])";
    let result = validate_source(source, CheckLevel::Syntax);

    assert!(!result.is_valid);
    assert_eq!(result.errors[0].code, "FLK001");
    assert_eq!(result.errors[0].message, NSLAYOUT_MESSAGE);
}

#[test]
fn test_double_frame_misuse_report() {
    let result = validate_source(DOUBLE_FRAME_MISUSE, CheckLevel::Full);

    assert!(!result.is_valid);
    assert_eq!(
        result.report,
        "# FrameLayoutKit Validation Report\n\
         \n\
         ❌ **2 Errors Found:**\n\
         \n\
         1. Double + operator detected. Each + should have a view on both sides.\n\
         2. Multiple +> operators. DoubleFrameLayout can only have one right view.\n\
         \n\
         ⚠️ **1 Warnings:**\n\
         \n\
         1. DoubleFrameLayout should only contain 2 views, but more were added\n\
         \n"
    );
}

#[test]
fn test_syntax_level_skips_semantic_rules() {
    let result = validate_source(DOUBLE_FRAME_MISUSE, CheckLevel::Syntax);
    assert_eq!(result.errors.len(), 2);
    assert!(result.warnings.is_empty());

    let result = validate_source(DOUBLE_FRAME_MISUSE, CheckLevel::Semantic);
    assert!(result.is_valid);
    assert_eq!(result.warnings.len(), 1);
}

#[rstest]
#[case("view.translatesAutoresizingMaskIntoConstraints = false", "FLK004")]
#[case("label.topAnchor", "FLK002")]
#[case("view.addConstraints(list)", "FLK003")]
#[case("left <+ a\nleft <+ b", "FLK011")]
#[case("let d = DoubleFrameLayout()\nd <+ a <+ b\n", "FLK011")]
#[case("let d = DoubleFrameLayout()\nd +> a +> b\n", "FLK012")]
#[case("let l = FrameLayout()\n    .padding(4)\n    .shadow(2)", "FLK020")]
fn test_forbidden_and_malformed(#[case] source: &str, #[case] code: &str) {
    let result = validate_source(source, CheckLevel::Syntax);
    assert!(!result.is_valid);
    assert!(
        result.errors.iter().any(|d| d.code == code),
        "expected {} in {:?}",
        code,
        result.errors
    );
}

#[test]
fn test_chained_and_repeated_binds_report_once() {
    let source = "let d = DoubleFrameLayout()\nd <+ a <+ b\nd <+ c\n";
    let result = validate_source(source, CheckLevel::Syntax);

    let codes: Vec<&str> = result.errors.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["FLK011"]);
}

#[test]
fn test_suggestions_never_invalidate() {
    let source = "let stackLayout = VStackLayout()\nstackLayout.distribution = .justified\n";
    let result = validate_source(source, CheckLevel::Full);

    assert!(result.is_valid);
    assert_eq!(
        result.suggestion_messages(),
        vec!["When using .justified distribution, consider setting isJustified = true"]
    );
    assert!(result.report.starts_with(
        "# FrameLayoutKit Validation Report\n\n✅ **No syntax errors found**\n\n💡 **1 Suggestions:**\n\n1. "
    ));
}

#[test]
fn test_empty_grid_views_warns() {
    let source = "let grid = GridFrameLayout()\ngrid.views = []\n";
    let result = validate_source(source, CheckLevel::Full);
    assert!(result.is_valid);
    assert_eq!(result.warning_messages(), vec!["GridFrameLayout has empty views array"]);
}

#[rstest]
#[case(ConfigStyle::Statements)]
#[case(ConfigStyle::Chained)]
fn test_generated_code_validates(#[case] style: ConfigStyle) {
    let generator = LayoutGenerator::with_config(GenerateConfig {
        style: Some(style),
        ..Default::default()
    });
    let config = LayoutConfig {
        axis: Some(Axis::Horizontal),
        spacing: Some(8.0),
        padding: Some(Padding::Uniform(12.0)),
        distribution: Some(Distribution::Fill),
        alignment: Some(Alignment::default()),
        inter_item_spacing: Some(4.0),
        line_spacing: Some(6.0),
        rows: Some(1),
        columns: Some(2),
        is_overlapped: Some(true),
    };

    for kind in LayoutKind::ALL {
        let views = match kind {
            LayoutKind::SingleFrame => vec![ViewSpec::new("icon", "UIImageView").with_image("logo")],
            _ => vec![
                ViewSpec::new("icon", "UIImageView").with_image("systemName: star"),
                ViewSpec::new("caption", "UIButton").with_text("Go"),
            ],
        };
        let code = generator.generate(kind, &views, &config).unwrap();
        let result = validate_source(&code, CheckLevel::Full);

        assert!(result.errors.is_empty(), "{} produced {:?}\n{}", kind, result.errors, code);
        assert!(result.warnings.is_empty(), "{} produced {:?}\n{}", kind, result.warnings, code);
    }
}

#[test]
fn test_result_json_shape() {
    let result = validate_source("stack + + view1", CheckLevel::Syntax);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["isValid"], false);
    assert_eq!(json["errors"][0]["code"], "FLK010");
    assert_eq!(json["errors"][0]["severity"], "error");
}
