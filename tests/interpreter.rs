use monkey::prelude::*;

fn run_program(source: &str) -> Object {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "parser errors: {:?}",
        parser.errors()
    );

    Evaluator::new().eval_program(&program)
}

macro_rules! assert_object {
    ($source:expr, $expected:expr, $obj_type:path) => {
        assert_eq!(run_program($source), $obj_type($expected));
    };
}

macro_rules! assert_integer {
    ($source:expr, $expected:expr) => {
        assert_object!($source, $expected, Object::Integer);
    };
}

macro_rules! assert_boolean {
    ($source:expr, $expected:expr) => {
        assert_object!($source, $expected, Object::Boolean);
    };
}

macro_rules! assert_string {
    ($source:expr, $expected:expr) => {
        assert_object!($source, $expected.to_owned(), Object::String);
    };
}

macro_rules! assert_error {
    ($source:expr, $expected:expr) => {
        assert_object!($source, $expected.to_owned(), Object::Error);
    };
}

#[test]
fn let_bindings_feed_conditionals() {
    assert_integer!(
        "let a = 5; let b = a > 3; let c = a * 99; if (b) { 10 } else { 1 };",
        10
    );
}

#[test]
fn closures_add() {
    assert_integer!(
        "let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3);",
        5
    );
}

#[test]
fn recursion_returns_through_if() {
    assert_boolean!(
        "let counter = fn(x) { if (x > 100) { return true; } else { counter(x + 1); } }; counter(0);",
        true
    );
}

#[test]
fn hash_access_by_mixed_keys() {
    let setup = r#"let h = {"name": "Monkey", "age": 0, true: "yes", 99: "n"};"#;

    assert_string!(&format!(r#"{setup} h["name"]"#), "Monkey");
    assert_string!(&format!("{setup} h[true]"), "yes");
    assert_string!(&format!("{setup} h[99]"), "n");
    assert_error!(
        &format!("{setup} h[fn(x){{x}}]"),
        "unusable as hash key: FUNCTION"
    );
}

#[test]
fn len_builtin() {
    assert_integer!(r#"len("hello world")"#, 11);
    assert_error!("len(1)", "argument to 'len' not supported, got INTEGER");
    assert_error!(
        r#"len("one", "two")"#,
        "wrong number of arguments. got=2, want=1"
    );
}

#[test]
fn error_catalogue() {
    assert_error!("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error!("-true", "unknown operator: -BOOLEAN");
    assert_error!("foobar", "identifier not found: foobar");
}

#[test]
fn truthiness() {
    assert_boolean!("!0", false);
    assert_boolean!(r#"!"""#, false);
    assert_boolean!("!!5", true);
}

#[test]
fn guest_equality_agrees_with_hash_keys() {
    // Two values that compare equal under guest `==` retrieve each other's
    // hash entries, and unequal ones do not.
    assert_integer!(r#"{"a": 1}["a"]"#, 1);
    assert_integer!("{42: 1}[41 + 1]", 1);
    assert_eq!(run_program("{42: 1}[43]"), Object::Null);
    assert_integer!("{true: 1}[1 == 1]", 1);
}

#[test]
fn array_builtins_compose() {
    assert_integer!("first(rest([1, 2, 3]))", 2);
    assert_integer!("last(push([1], 9))", 9);
    assert_object!("rest([1])", vec![], Object::Array);
}

#[test]
fn higher_order_functions() {
    let source = r#"
        let apply = fn(f, x) { f(x) };
        let square = fn(x) { x * x };
        apply(square, 9)
    "#;
    assert_integer!(source, 81);
}

#[test]
fn rendered_function_evaluates_identically() {
    // The round-trip promise: render the AST, parse the rendering, get the
    // same behavior.
    let source = "let add = fn(x, y) { x + y; }; add(2, 3)";

    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());

    let rendered = program.to_string();
    assert_eq!(run_program(source), run_program(&rendered));
}
