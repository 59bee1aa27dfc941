//! End-to-end translation tests
//!
//! Runs the full pipeline (read, parse, dispatch, stringify) over the
//! fixtures and checks the properties every translation keeps.

use std::path::PathBuf;

use rstest::rstest;
use tsxlate_ast::{AstArena, SourceFile, SyntaxKind};
use tsxlate_core::{
    Context, DefaultVisitor, EMPTY_NODE, NoopVisitor, OutputTree, PythonVisitor, Target,
    TranslateError, Visitor, translate, translate_source, visit,
};
use tsxlate_parser::{Parser, TypeScriptParser};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn render_fixture(name: &str, visitor: &dyn Visitor) -> String {
    translate(&TypeScriptParser::new(), fixtures_dir().join(name), visitor)
        .unwrap()
        .to_string()
}

fn render(text: &str, visitor: &dyn Visitor) -> OutputTree {
    let source = SourceFile::new("inline.ts", text);
    translate_source(&TypeScriptParser::new(), &source, visitor).unwrap()
}

mod python_examples {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn function_with_return() {
        assert_eq!(
            render_fixture("add.ts", &PythonVisitor),
            "def add(a, b):\n    return a + b"
        );
    }

    #[test]
    fn identifier_casing() {
        assert_eq!(
            render_fixture("server_name.ts", &PythonVisitor),
            "my_http_server"
        );
    }

    #[test]
    fn if_statement() {
        assert_eq!(
            render_fixture("if_return.ts", &PythonVisitor),
            "if x:\n    return 1"
        );
    }

    #[test]
    fn import_require() {
        assert_eq!(
            render_fixture("import_require.ts", &PythonVisitor),
            "import ./foo"
        );
    }

    #[test]
    fn module_with_imports_and_branches() {
        let expected = [
            "import ./format",
            "import fs",
            "def greet_user(user_name, is_loud):",
            "    if is_loud:",
            "        return format.shout(user_name)",
            "    elif user_name:",
            "        return \"Hello, \" + user_name",
            "    else:",
            "        console.log(\"no name\")",
            "    return \"Hello\"",
        ]
        .join("\n");

        let output = translate(
            &TypeScriptParser::new(),
            fixtures_dir().join("greeter.ts"),
            &PythonVisitor,
        )
        .unwrap();

        assert_eq!(output.to_string(), expected);
        assert_eq!(output.unknown_count(), 0);
    }
}

mod properties {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case(Target::Noop)]
    #[case(Target::Default)]
    #[case(Target::Python)]
    fn translation_is_pure(#[case] target: Target) {
        let visitor = target.visitor();
        let first = render_fixture("greeter.ts", visitor.as_ref());
        let second = render_fixture("greeter.ts", visitor.as_ref());
        assert_eq!(first, second);
    }

    #[test]
    fn children_keep_source_order() {
        let output = render("first();\nsecond();\nthird();", &DefaultVisitor).to_string();
        let positions: Vec<usize> = ["first", "second", "third"]
            .iter()
            .map(|name| output.find(name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_nodes_are_absorbed() {
        let parts = vec![OutputTree::text("a"), OutputTree::text("b")];
        let mut padded = vec![EMPTY_NODE];
        for part in parts.clone() {
            padded.push(part);
            padded.push(OutputTree::empty());
        }

        let builders: [fn(Vec<OutputTree>) -> OutputTree; 3] = [
            |c| OutputTree::new("p", c),
            |c| OutputTree::new("p", c).with_newline().with_indent(2),
            |c| OutputTree::new("p", c).with_separator(" ").with_suffix(";"),
        ];
        for build in builders {
            assert_eq!(build(padded.clone()).to_string(), build(parts.clone()).to_string());
        }
    }

    #[test]
    fn every_kind_renders_without_error() {
        let source = "class A extends B { #x = 1; get y() { return this.#x; } }\n\
                      enum Color { Red, Green }\n\
                      type T = { a: number };\n\
                      const f = async (x) => await x ?? [1, 2].map(n => n * 2);\n\
                      label: for (let i = 0; i < 3; i++) { continue label; }\n\
                      try { throw new Error(`bad ${f}`); } catch { } finally { }\n\
                      switch (k) { case 1: break; default: }";

        for target in Target::ALL {
            let output = render(source, target.visitor().as_ref());
            assert!(output.unknown_count() > 0);
            assert!(!output.to_string().is_empty());
        }
    }

    #[rstest]
    #[case(Target::Noop)]
    #[case(Target::Default)]
    #[case(Target::Python)]
    fn unknown_syntax_keeps_kind_and_source_text(#[case] target: Target) {
        let class = "class Greeter {\n  greet() {\n    return 1;\n  }\n}";
        let source = format!("function wrap() {{\n{class}\n}}");

        let output = render(&source, target.visitor().as_ref());
        assert!(output.unknown_count() > 0);
        assert!(output.to_string().contains(&format!("(class_declaration {class})")));
    }

    #[test]
    fn indentation_accumulates_across_levels() {
        let width = 3;
        let level3 = OutputTree::new("", vec![OutputTree::text("\nx")]).with_indent(width);
        let level2 = OutputTree::new("", vec![level3]).with_indent(width);
        let tree = OutputTree::new("", vec![level2]).with_indent(width);

        assert_eq!(tree.to_string(), format!("\n{}x", " ".repeat(3 * width)));
    }

    #[test]
    fn nested_blocks_indent_cumulatively() {
        let output = render(
            "function outer() { function inner() { if (deep) { return 1; } } }",
            &PythonVisitor,
        );
        assert_eq!(
            output.to_string(),
            "def outer():\n    def inner():\n        if deep:\n            return 1"
        );
    }
}

mod visitors {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Renders identifiers in brackets and leaves everything else alone.
    struct Bracketed;

    impl Visitor for Bracketed {
        fn identifier<'a>(
            &self,
            node: &tsxlate_ast::SyntaxNode<'a>,
            ctx: &Context<'_, 'a>,
        ) -> Result<OutputTree, TranslateError> {
            Ok(OutputTree::text(format!("[{}]", ctx.text_of(node))))
        }
    }

    #[test]
    fn custom_visitor_overrides_one_kind() {
        assert_eq!(
            render("total = price * count;", &Bracketed).to_string(),
            "[total] = [price] * [count]"
        );
    }

    #[test]
    fn noop_marks_every_handled_node() {
        let output = render("f(x);", &NoopVisitor);
        // SyntaxList, ExpressionStatement, CallExpression, 2 Identifiers, arguments
        assert_eq!(output.unknown_count(), 6);
    }

    #[test]
    fn visit_translates_a_subtree() {
        let arena = AstArena::new();
        let source = SourceFile::new("sub.ts", "if (a) { b(); }");
        let root = TypeScriptParser::new().parse(&arena, source.text()).unwrap();
        let statement = &root.children[0].children[0];
        assert_eq!(statement.kind, SyntaxKind::IfStatement);

        let condition = statement.field("condition").unwrap();
        let output = visit(&source, condition, &PythonVisitor).unwrap();
        assert_eq!(output.to_string(), "a");
    }
}
