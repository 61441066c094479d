use super::eval;
use crate::object::prelude::{Environment, HashKey, Object, NULL};
use crate::parser::prelude::parse_module;

fn run(input: &str) -> Object {
    let parsed = parse_module(input);

    assert_eq!(parsed.errors, vec![], "unexpected parse errors for {input:?}");

    eval(&parsed.program, Environment::new())
}

fn assert_integer(object: &Object, expected: i64) {
    assert_eq!(object, &Object::Integer { value: expected });
}

#[test]
fn test_integer_expressions() {
    let cases = [
        ("5", 5),
        ("10", 10),
        ("-5", -5),
        ("-10", -10),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
    ];

    for (input, expected) in cases {
        assert_integer(&run(input), expected);
    }
}

#[test]
fn test_integer_arithmetic_wraps() {
    // i64::MIN has no literal of its own, it is built by expression
    let cases = [
        ("9223372036854775807 + 1", i64::MIN),
        ("0 - 9223372036854775807 - 1", i64::MIN),
        ("-(0 - 9223372036854775807 - 1)", i64::MIN),
        ("(0 - 9223372036854775807 - 1) / (0 - 1)", i64::MIN),
        ("(0 - 9223372036854775807 - 1) * (0 - 1)", i64::MIN),
        ("9223372036854775807 * 2", -2),
    ];

    for (input, expected) in cases {
        assert_integer(&run(input), expected);
    }
}

#[test]
fn test_boolean_expressions() {
    let cases = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 > 1", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 == 2", false),
        ("1 != 2", true),
        ("true == true", true),
        ("false == false", true),
        ("true == false", false),
        ("true != false", true),
        ("false != true", true),
        ("(1 < 2) == true", true),
        ("(1 < 2) == false", false),
        ("(1 > 2) == true", false),
        ("(1 > 2) == false", true),
    ];

    for (input, expected) in cases {
        assert_eq!(run(input), Object::Boolean { value: expected }, "for {input:?}");
    }
}

#[test]
fn test_bang_operator() {
    let cases = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!!true", true),
        ("!!false", false),
        ("!!5", true),
    ];

    for (input, expected) in cases {
        assert_eq!(run(input), Object::Boolean { value: expected }, "for {input:?}");
    }
}

#[test]
fn test_if_else_expressions() {
    let cases = [
        ("if (true) { 10 }", Object::Integer { value: 10 }),
        ("if (false) { 10 }", NULL),
        ("if (1) { 10 }", Object::Integer { value: 10 }),
        ("if (1 < 2) { 10 }", Object::Integer { value: 10 }),
        ("if (1 > 2) { 10 }", NULL),
        ("if (1 > 2) { 10 } else { 20 }", Object::Integer { value: 20 }),
        ("if (1 < 2) { 10 } else { 20 }", Object::Integer { value: 10 }),
    ];

    for (input, expected) in cases {
        assert_eq!(run(input), expected, "for {input:?}");
    }
}

#[test]
fn test_return_statements() {
    let cases = [
        ("return 10;", 10),
        ("return 10; 9;", 10),
        ("return 2 * 5; 9;", 10),
        ("9; return 2 * 5; 9;", 10),
        (
            "if (10 > 1) {
                if (10 > 1) {
                    return 10;
                }

                return 1;
            }",
            10,
        ),
    ];

    for (input, expected) in cases {
        assert_integer(&run(input), expected);
    }
}

#[test]
fn test_error_handling() {
    let cases = [
        ("5 + true;", "type mismatch: Integer + Boolean"),
        ("5 + true; 5;", "type mismatch: Integer + Boolean"),
        ("-true", "unknown operator: -Boolean"),
        ("true + false;", "unknown operator: Boolean + Boolean"),
        ("5; true + false; 5", "unknown operator: Boolean + Boolean"),
        ("if (10 > 1) { true + false; }", "unknown operator: Boolean + Boolean"),
        (
            "if (10 > 1) {
                if (10 > 1) {
                    return true + false;
                }

                return 1;
            }",
            "unknown operator: Boolean + Boolean",
        ),
        ("foobar", "identifier not found: foobar"),
        ("\"Hello\" - \"World\"", "unknown operator: String - String"),
        (
            "{\"name\": \"Monkey\"}[fn(x) { x }];",
            "unusable as hash key: Function",
        ),
        ("{fn(x) { x }: \"Monkey\"}", "unusable as hash key: Function"),
        ("[1, 2, 3][\"hi\"]", "index operator not supported: Array"),
        ("5[0]", "index operator not supported: Integer"),
        ("5(1)", "not a function: Integer"),
        ("10 / 0", "division by zero"),
    ];

    for (input, expected) in cases {
        assert_eq!(
            run(input),
            Object::Error { message: expected.to_string() },
            "for {input:?}",
        );
    }
}

#[test]
fn test_let_statements() {
    let cases = [
        ("let a = 5; a;", 5),
        ("let a = 5 * 5; a;", 25),
        ("let a = 5; let b = a; b;", 5),
        ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
        // a let statement itself evaluates to the bound value
        ("let a = 5;", 5),
    ];

    for (input, expected) in cases {
        assert_integer(&run(input), expected);
    }
}

#[test]
fn test_function_object() {
    let Object::Function(function) = run("fn(x) { x + 2; };") else {
        panic!("expected a function object");
    };

    assert_eq!(function.params.len(), 1);
    assert_eq!(function.params[0].value, "x");
    assert_eq!(function.body.to_string(), "(x + 2)");
}

#[test]
fn test_function_application() {
    let cases = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
    ];

    for (input, expected) in cases {
        assert_integer(&run(input), expected);
    }
}

#[test]
fn test_wrong_argument_count() {
    let cases = [
        ("fn(x) { x; }();", "wrong number of arguments. got=0, want=1"),
        ("fn() { 1; }(2);", "wrong number of arguments. got=1, want=0"),
        ("let add = fn(x, y) { x + y; }; add(1);", "wrong number of arguments. got=1, want=2"),
    ];

    for (input, expected) in cases {
        assert_eq!(
            run(input),
            Object::Error { message: expected.to_string() },
            "for {input:?}",
        );
    }
}

#[test]
fn test_closures() {
    let input = "
        let newAdder = fn(x) {
            fn(y) { x + y };
        };

        let addTwo = newAdder(2);
        addTwo(2);
    ";

    assert_integer(&run(input), 4);
}

#[test]
fn test_closures_share_captured_environment() {
    let input = "
        let counter = fn(x) {
            fn() { x + 1 };
        };

        let once = counter(41);
        once() + once();
    ";

    assert_integer(&run(input), 84);
}

#[test]
fn test_recursion() {
    let input = "
        let fib = fn(n) {
            if (n < 2) { n } else { fib(n - 1) + fib(n - 2) }
        };

        fib(10);
    ";

    assert_integer(&run(input), 55);
}

#[test]
fn test_string_literal() {
    assert_eq!(
        run("\"Hello World!\""),
        Object::Str { value: "Hello World!".to_string() },
    );
}

#[test]
fn test_string_concatenation() {
    assert_eq!(
        run("\"Hello\" + \" \" + \"World!\""),
        Object::Str { value: "Hello World!".to_string() },
    );
}

#[test]
fn test_builtin_len() {
    let cases = [
        ("len(\"\")", Object::Integer { value: 0 }),
        ("len(\"four\")", Object::Integer { value: 4 }),
        ("len(\"hello world\")", Object::Integer { value: 11 }),
        ("len([1, 2, 3])", Object::Integer { value: 3 }),
        ("len([])", Object::Integer { value: 0 }),
        (
            "len(1)",
            Object::Error {
                message: "argument to `len` not supported, got Integer".to_string(),
            },
        ),
        (
            "len(\"one\", \"two\")",
            Object::Error {
                message: "wrong number of arguments. got=2, want=1".to_string(),
            },
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(run(input), expected, "for {input:?}");
    }
}

#[test]
fn test_builtin_array_functions() {
    let cases = [
        ("first([1, 2, 3])", Object::Integer { value: 1 }),
        ("first([])", NULL),
        ("last([1, 2, 3])", Object::Integer { value: 3 }),
        ("last([])", NULL),
        (
            "rest([1, 2, 3])",
            Object::Array {
                elements: vec![Object::Integer { value: 2 }, Object::Integer { value: 3 }],
            },
        ),
        ("rest([1])", Object::Array { elements: vec![] }),
        ("rest([])", NULL),
        (
            "push([1], 2)",
            Object::Array {
                elements: vec![Object::Integer { value: 1 }, Object::Integer { value: 2 }],
            },
        ),
        (
            "first(1)",
            Object::Error {
                message: "argument to `first` not supported, got Integer".to_string(),
            },
        ),
        (
            "push(1, 1)",
            Object::Error {
                message: "argument to `push` not supported, got Integer".to_string(),
            },
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(run(input), expected, "for {input:?}");
    }
}

#[test]
fn test_push_leaves_original_untouched() {
    let input = "
        let a = [1, 2];
        let b = push(a, 3);
        len(a);
    ";

    assert_integer(&run(input), 2);
}

#[test]
fn test_builtins_can_be_shadowed() {
    assert_integer(&run("let len = fn(x) { 42 }; len([1, 2, 3]);"), 42);
}

#[test]
fn test_array_literals() {
    let Object::Array { elements } = run("[1, 2 * 2, 3 + 3]") else {
        panic!("expected an array object");
    };

    assert_eq!(elements.len(), 3);
    assert_integer(&elements[0], 1);
    assert_integer(&elements[1], 4);
    assert_integer(&elements[2], 6);
}

#[test]
fn test_array_index_expressions() {
    let cases = [
        ("[1, 2, 3][0]", Object::Integer { value: 1 }),
        ("[1, 2, 3][1]", Object::Integer { value: 2 }),
        ("[1, 2, 3][2]", Object::Integer { value: 3 }),
        ("let i = 0; [1][i];", Object::Integer { value: 1 }),
        ("[1, 2, 3][1 + 1];", Object::Integer { value: 3 }),
        ("let myArray = [1, 2, 3]; myArray[2];", Object::Integer { value: 3 }),
        (
            "let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];",
            Object::Integer { value: 6 },
        ),
        ("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", Object::Integer { value: 2 }),
        ("[1, 2, 3][3]", NULL),
        ("[1, 2, 3][-1]", NULL),
    ];

    for (input, expected) in cases {
        assert_eq!(run(input), expected, "for {input:?}");
    }
}

#[test]
fn test_hash_literals() {
    let input = "
        let two = \"two\";
        {
            \"one\": 10 - 9,
            two: 1 + 1,
            \"thr\" + \"ee\": 6 / 2,
            4: 4,
            true: 5,
            false: 6,
        }
    ";

    let Object::Hash { pairs } = run(input) else {
        panic!("expected a hash object");
    };

    let expected = [
        (HashKey::Str("one".to_string()), 1),
        (HashKey::Str("two".to_string()), 2),
        (HashKey::Str("three".to_string()), 3),
        (HashKey::Integer(4), 4),
        (HashKey::Boolean(true), 5),
        (HashKey::Boolean(false), 6),
    ];

    assert_eq!(pairs.len(), expected.len());

    for (key, value) in expected {
        let pair = pairs.get(&key).unwrap_or_else(|| panic!("missing key {key:?}"));

        assert_integer(&pair.value, value);
    }
}

#[test]
fn test_hash_index_expressions() {
    let cases = [
        ("{\"foo\": 5}[\"foo\"]", Object::Integer { value: 5 }),
        ("{\"foo\": 5}[\"bar\"]", NULL),
        ("let key = \"foo\"; {\"foo\": 5}[key]", Object::Integer { value: 5 }),
        ("{}[\"foo\"]", NULL),
        ("{5: 5}[5]", Object::Integer { value: 5 }),
        ("{true: 5}[true]", Object::Integer { value: 5 }),
        ("{false: 5}[false]", Object::Integer { value: 5 }),
        // content equality: an equal key built elsewhere finds the entry
        ("{\"fo\" + \"o\": 5}[\"foo\"]", Object::Integer { value: 5 }),
    ];

    for (input, expected) in cases {
        assert_eq!(run(input), expected, "for {input:?}");
    }
}

#[test]
fn test_hash_duplicate_keys_last_wins() {
    assert_integer(&run("{\"a\": 1, \"a\": 2}[\"a\"]"), 2);
}

#[test]
fn test_empty_program() {
    assert_eq!(run(""), NULL);
}
