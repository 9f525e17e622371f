use std::fs;

use cixac::{error::RuntimeError, interpreter::value::core::Value, run, run_script};

fn eval_ok(source: &str) -> Value {
    let (outcome, errors) = run(source);
    assert!(errors.is_empty(), "parse errors for {source:?}: {errors:?}");
    match outcome {
        Ok(Some(value)) => value,
        Ok(None) => Value::Empty,
        Err(error) => panic!("runtime error for {source:?}: {error}"),
    }
}

fn eval_err(source: &str) -> RuntimeError {
    let (outcome, errors) = run(source);
    assert!(errors.is_empty(), "parse errors for {source:?}: {errors:?}");
    match outcome {
        Err(error) => error,
        Ok(value) => panic!("expected runtime error for {source:?}, got {value:?}"),
    }
}

fn inspect(source: &str) -> String {
    eval_ok(source).to_string()
}

fn assert_integer(source: &str, expected: i64) {
    match eval_ok(source) {
        Value::Integer(value) => assert_eq!(value, expected, "wrong value for {source:?}"),
        other => panic!("expected integer for {source:?}, got {other:?}"),
    }
}

fn assert_float(source: &str, expected: f64) {
    match eval_ok(source) {
        Value::Float(value) => assert!(
            (value - expected).abs() < 1e-5,
            "wrong value for {source:?}: got {value}, want {expected}"
        ),
        other => panic!("expected float for {source:?}, got {other:?}"),
    }
}

fn assert_bool(source: &str, expected: bool) {
    match eval_ok(source) {
        Value::Bool(value) => assert_eq!(value, expected, "wrong value for {source:?}"),
        other => panic!("expected boolean for {source:?}, got {other:?}"),
    }
}

fn assert_string(source: &str, expected: &str) {
    match eval_ok(source) {
        Value::Str(value) => assert_eq!(value, expected, "wrong value for {source:?}"),
        other => panic!("expected string for {source:?}, got {other:?}"),
    }
}

fn assert_null(source: &str) {
    match eval_ok(source) {
        Value::Null => {},
        other => panic!("expected null for {source:?}, got {other:?}"),
    }
}

fn assert_error(source: &str, expected: &str) {
    assert_eq!(eval_err(source).to_string(), expected, "wrong error for {source:?}");
}

#[test]
fn integer_arithmetic() {
    let tests = [
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
        ("4 % 10", 4),
        ("-4 % 10", 6),
        ("10 % 4", 2),
        ("10 % -4", -2),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
    ];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }
}

#[test]
fn float_arithmetic() {
    let tests = [
        ("5.5", 5.5),
        ("5.", 5.0),
        (".5", 0.5),
        ("10.0", 10.0),
        ("-5.0", -5.0),
        ("5.1 + 5.2 + 5.1 + 5.2 - 10", 10.6),
        ("2.2 * 2.2 * 2.2 * 2.2 * 2.2", 51.53632),
        ("-50.55 + 100.55 + -50.55", -0.55),
        ("5.5 * 2.2 + 10.10", 22.20),
        ("5.5 + 2.2 * 10.10", 27.72),
        ("20.2 + 2.2 * -10.1", -2.02),
        ("4.5 % 10.5", 4.50),
        ("-4.5 % 10.55", 6.05),
        ("10.5 % 4.4", 1.70),
        ("10.5 % -4.5", -3.00),
        ("55.55 / 2 * 2 + 10", 65.55),
        ("2 * (5 + 10.55)", 31.10),
        ("3 * 33.3 * 3 + 10", 309.70),
        ("3 * (3.33 * 3.3) + 10", 42.967),
        ("(5 + 10.95 * 2 + 15 / 3) * 2 + -10.55", 53.25),
    ];

    for (source, expected) in tests {
        assert_float(source, expected);
    }
}

#[test]
fn boolean_expressions() {
    let tests = [
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
        ("1 <= 2", true),
        ("1 >= 2", false),
        ("1.1 >= 1.1", true),
        ("1.1 >= 1.2", false),
        ("1.1 <= 1.1", true),
        ("1.1 <= 0.2", false),
        ("1.1 == 1.1", true),
        ("1.1 == 1.2", false),
        ("1.1 != 1.2", true),
        ("1.1 != 1.1", false),
        ("1.1 > 1.2", false),
        ("1.1 > 0.2", true),
        ("1.1 < 1.2", true),
        ("1.1 < 0.2", false),
        ("true == true", true),
        ("false == false", true),
        ("true == false", false),
        ("true != false", true),
        ("false != true", true),
        ("(1 < 2) == true", true),
        ("(1 < 2) == false", false),
        ("(1 > 2) == true", false),
        ("(1 > 2) == false", true),
        ("(1 < 2) && true", true),
        ("(1 > 2) && true", false),
        ("(1 > 2) || false", false),
        ("(1 > 2) || true", true),
        (r#""foobar" == "foobar""#, true),
        (r#""foobar" == "foo""#, false),
        (r#""foobar" != "foo""#, true),
        (r#""foobar" != "foobar""#, false),
        ("null == null", true),
        ("null != null", false),
    ];

    for (source, expected) in tests {
        assert_bool(source, expected);
    }
}

#[test]
fn float_comparison_tolerance() {
    assert_bool("1.000001 == 1.0", true);
    assert_bool("1.00002 == 1.0", false);
    assert_bool("1.0 <= 0.999999", true);
    assert_bool("1.0 >= 1.000009", true);
    assert_bool("1.000001 != 1.0", false);
}

#[test]
fn null_expressions() {
    assert_null("let a = null; a");
    assert_null("if (5 == 5) { return null }");
    assert_null("null");
}

#[test]
fn bang_operator() {
    let tests = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!!true", true),
        ("!!false", false),
        ("!!5", true),
        ("!null", true),
    ];

    for (source, expected) in tests {
        assert_bool(source, expected);
    }
}

#[test]
fn incr_decr_operator() {
    let tests = [
        ("let i = 5; i++; i", 6),
        ("let j = 4; j--; j", 3),
        ("let k = 5; k++", 5),
        ("let l = 5; l--", 5),
    ];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }

    assert_float("let f = 1.5; f++; f", 2.5);
    assert_float("let f = 1.5; f--", 1.5);
}

#[test]
fn if_else_expressions() {
    assert_integer("if (true) { 10 }", 10);
    assert_null("if (false) { 10 }");
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 }", 10);
    assert_null("if (1 > 2) { 10 }");
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_integer("if (1 < 2) { 10 } else { 20 }", 10);
    assert_integer("if (1 > 2) { 10 } else if (1 == 1) { 1 + 11 } else { 20 }", 12);
    assert_integer("if (null) { 10 } else { 20 }", 20);
    assert_null("if (1 < 2) { null } else { 20 }");
}

#[test]
fn return_statements() {
    let tests = [
        ("return 10;", 10),
        ("return 10; 9;", 10),
        ("return 2 * 5; 9;", 10),
        ("9; return 2 * 5; 9;", 10),
        (
            "
            if (10 > 1) {
                if (10 > 1) {
                    return 10;
                }
                // this is a comment
                return 1;
            }",
            10,
        ),
        (
            "
            let f = fn(x) {
                /* multi
                   multi-line comment
                */
                return x;
                x + 10;
            };
            f(10);",
            10,
        ),
        (
            "
            let f = fn(x) {
                let result = x + 10;
                return result;
                return 10;
            };
            f(10);",
            20,
        ),
    ];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }
}

#[test]
fn error_handling() {
    let tests = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "
            if (10 > 1) {
                if (10 > 1) {
                    return true + false;
                }
                return 1;
            }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "Identifier not found: foobar"),
        (r#""Hello" - "World""#, "unknown operator: STRING - STRING"),
        ("999[1]", "index operator not supported: INTEGER"),
        ("null + null", "unknown operator: NULL + NULL"),
        (
            r#"{"name": "Hello"}[fn(x) { x }];"#,
            "unusable as hash key: FUNCTION",
        ),
        ("let four = 4; let four = 5", "Identifier four has already been declared"),
        ("fn five() { 5 } fn five() { 6 }", "Function five has already been declared"),
        ("fn decl() { 5 } let decl = 6", "Identifier decl has already been declared"),
        ("let len = 1", "Identifier len has same name as builtin"),
        (r#"print = "foo""#, "Can't reassign print builtin function"),
        (r#"object = "Person""#, "Identifier object doesn't exists"),
        (
            "fn adder(x, y) { x + y } adder = 8",
            "Identifier adder is const and can't be reassigned",
        ),
        ("const a = 7; a = 10", "Identifier a is const and can't be reassigned"),
        ("const i = 5; i++", "Identifier i is const and can't be reassigned"),
        ("5++", "Invalid left-hand expression for postfix operation"),
        (r#"let s = "x"; s++"#, "wrong type for postfix operator"),
        ("break", "break not in for statement"),
        ("continue", "continue not in for statement"),
        ("1 / 0", "division by zero"),
        ("1 % 0", "division by zero"),
        ("let f = fn() { break }; for (let i = 0; i < 1; i++) { f() }", "break not in for statement"),
        ("for (k, v in 5) { k }", "not iterable: INTEGER"),
        ("5()", "not a function: INTEGER"),
    ];

    for (source, expected) in tests {
        assert_error(source, expected);
    }
}

#[test]
fn let_statements() {
    let tests = [
        ("let a = 5; a;", 5),
        ("let a = 5 * 5; a;", 25),
        ("let a = 5; let b = a; b;", 5),
        ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
    ];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }

    let (outcome, errors) = run("let x = 1");
    assert!(errors.is_empty());
    assert!(matches!(outcome, Ok(None)), "a bare declaration has no user-visible value");
}

#[test]
fn reassign_statements() {
    let tests = [
        ("let a = 5; a = 10; a;", 10),
        ("let a = 5 * 5; a = 5 * 11; a;", 55),
        ("let a = 5; let b = a; a = a * b; a;", 25),
        ("let a = 5; let b = a; let c = a + b + 5; c = c + 100; c;", 115),
        ("let a = 5; a += 2", 7),
        ("let a = 5; a -= 2", 3),
        ("let a = 5; a *= 2", 10),
        ("let a = 6; a /= 2", 3),
    ];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }

    assert_float("let a = 5; a += 2.2", 7.2);
    assert_float("let a = 5; a -= 2.2", 2.8);
    assert_float("let a = 5; a *= 2.2", 11.0);
    assert_float("let a = 11; a /= 2.2", 5.0);

    assert_string(r#"let s = "foo"; s += "bar"; s"#, "foobar");
}

#[test]
fn for_loop_statements() {
    let tests = [
        ("let j = 0; for (let i = 0; i < 5; i += 1) { j++ }; j", 5),
        ("let j = 0; for (let i = 0; i < 5; i = i + 1) { j++ }; j", 5),
        ("let j = 0; for (let i = 0; i < 5; i++) { j++ }; j", 5),
        ("let j = 0; for (let i = 5; i > 0; i--) { j += i }; j", 15),
    ];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }
}

#[test]
fn for_in_loop_statements() {
    let tests = [
        ("let j = 0; for (i, ele in [1, 2, 3]) { j += i + ele }; j", 9),
        ("let j = 0; for (key, val in {0: 1, 1: 2, 2: 3}) { j += key + val}; j", 9),
        (r#"let j = 0; for (i, ch in "string") { j += i; }; j"#, 15),
        (r#"let s = ""; for (i, ch in "abc") { s += ch; }; len(s)"#, 3),
    ];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }
}

#[test]
fn while_statements() {
    assert_integer("let i = 0; while (i < 5) { i++ }; i", 5);
    assert_integer("let i = 0; let j = 0; while (i < 3) { i++; j += 10 }; j", 30);
}

#[test]
fn break_and_continue() {
    assert_integer("let j = 0; for (let i = 0; i < 5; i++) { j++; break; }; j", 1);
    assert_integer("let j = 0; for (let i = 0; i < 5; i++) { continue; j++; } j", 0);
    assert_integer("let i = 0; while (true) { i++; if (i == 3) { break } }; i", 3);
    // break only exits the loop that sees it
    assert_integer(
        "let j = 0;
         for (let i = 0; i < 3; i++) {
             for (let k = 0; k < 3; k++) { break; };
             j++;
         };
         j",
        3,
    );
}

#[test]
fn loop_outer_writes() {
    // writes from a loop body reach the scope that owns the name
    assert_integer("let total = 0; for (let i = 1; i < 4; i++) { total += i }; total", 6);
    // a loop-local let shadows without touching the outer binding
    assert_integer(
        "let x = 1; for (let i = 0; i < 2; i++) { let x = 99; }; x",
        1,
    );
}

#[test]
fn function_objects() {
    let value = eval_ok("fn(x) { x + 2; };");
    match &value {
        Value::Function(function) => {
            assert_eq!(function.parameters, vec!["x".to_string()]);
        },
        other => panic!("expected function, got {other:?}"),
    }
    assert_eq!(value.to_string(), "fn(x) { (x + 2) }");
}

#[test]
fn function_application() {
    let tests = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
        ("fn adder(x, y) { return x + y }; adder(5, 5)", 10),
    ];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }

    assert_error(
        "let f = fn(x) { x }; f(1, 2)",
        "wrong number of arguments. got=2, want=1",
    );
}

#[test]
fn closures() {
    assert_integer(
        "let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(2)",
        4,
    );
    // closures share their captured environment and observe mutations of it
    assert_integer("let x = 1; let get = fn() { x }; x = 2; get()", 2);
    assert_integer(
        "let log = []; let record = fn(v) { log.push(v) }; record(1); record(2); len(log)",
        2,
    );
    // a reassignment inside a call writes the call's own scope, leaving the
    // captured binding alone
    assert_integer("let n = 0; let bump = fn() { n += 1; n }; bump(); bump(); n", 0);
}

#[test]
fn enclosing_environments() {
    assert_integer(
        "
        let x = 10;
        let y = 10;
        let z = 10;
        // this is a comment

        let ourFunction = fn(x) {
            // this is a comment
            let y = 20;

            x + y + z;
        };

        ourFunction(20) + x + y;",
        70,
    );
}

#[test]
fn string_literals() {
    assert_string(r#""Hello World!""#, "Hello World!");
    // an unterminated literal runs to end of input
    assert_string(r#""abc"#, "abc");
}

#[test]
fn string_concatenation() {
    assert_string(r#""Hello" + " " + 5"#, "Hello 5");
    assert_string(r#""Hello" + " " + 5.5"#, "Hello 5.5");
    assert_string(r#""Hello" + " " + "World!""#, "Hello World!");
    assert_string(r#""items: " + [1, 2]"#, "items: [1, 2]");
    assert_string(r#""flag: " + true"#, "flag: true");
}

#[test]
fn string_index_expressions() {
    assert_string(r#""jump"[0]"#, "j");
    assert_string(r#""blender"[1]"#, "l");
    assert_string(r#"let str = "string"; let length = len(str); str[length-1];"#, "g");
    assert_string(r#""elden"[1 + 1];"#, "d");
    assert_string(r#"let str = "finished"; str[0] + str[1] + str[2];"#, "fin");
    assert_null(r#""string"[9]"#);
    assert_null(r#""string"[-1]"#);
}

#[test]
fn builtin_functions() {
    assert_integer(r#"len("")"#, 0);
    assert_integer(r#"len("four")"#, 4);
    assert_integer(r#"len("hello world")"#, 11);
    assert_integer("len([1, 2, 3])", 3);
    assert_integer("len([])", 0);
    assert_integer("len({})", 0);
    assert_integer(r#"len({"key1": 5, "key2": 10})"#, 2);

    assert_error("len(1)", "argument to `len` not supported, got INTEGER");
    assert_error(r#"len("one", "two")"#, "wrong number of arguments. got=2, want=1");

    assert_integer("first([7, 8, 9])", 7);
    assert_integer("last([7, 8, 9])", 9);
    assert_eq!(inspect("rest([7, 8, 9])"), "[8, 9]");
    assert_eq!(inspect("let a = []; push(a, 1); a"), "[1]");
    assert_integer("pop([1, 2, 3])", 3);
    assert_eq!(inspect("let a = [2, 3]; pushleft(a, 1); a"), "[1, 2, 3]");
    assert_integer("popleft([1, 2, 3])", 1);
    assert_error("first(1)", "argument to `first` must be ARRAY, got INTEGER");

    assert_null(r#"print("printed by the test suite")"#);
}

#[test]
fn array_literals_and_indexing() {
    assert_eq!(inspect("[1, 2 * 2, 3 + 3]"), "[1, 4, 6]");

    assert_integer("[1, 2, 3][0]", 1);
    assert_integer("[1, 2, 3][1]", 2);
    assert_integer("[1, 2, 3][2]", 3);
    assert_integer("let i = 0; [1][i];", 1);
    assert_integer("[1, 2, 3][1 + 1];", 3);
    assert_integer("let myArray = [1, 2, 3]; myArray[2];", 3);
    assert_integer("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", 6);
    assert_integer("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", 2);
    assert_null("[1, 2, 3][3]");
    assert_null("[1, 2, 3][-1]");
}

#[test]
fn array_methods() {
    assert_integer("[1, 2, 3].first()", 1);
    assert_null("[].first()");
    assert_integer("[1, 2, 3].last()", 3);
    assert_null("[].last()");
    assert_eq!(inspect("[1, 2, 3].rest()"), "[2, 3]");
    assert_null("[].rest()");
    assert_integer("let myArray = [1, 2, 3]; myArray.push(1 + 1); len(myArray)", 4);
    assert_eq!(inspect("[].push(1)"), "[1]");
    assert_eq!(inspect("[].pushleft(1)"), "[1]");
    assert_eq!(inspect("[1, 2, 3].pushleft(4)"), "[4, 1, 2, 3]");
    assert_integer("[1, 2, 3].pop()", 3);
    assert_eq!(inspect("let arr = [1, 2, 3]; arr.pop(); arr"), "[1, 2]");
    assert_integer("[1, 2, 3].popleft()", 1);
    assert_eq!(inspect("let arr = [1, 2, 3]; arr.popleft(); arr"), "[2, 3]");

    assert_error("[].pop()", "ARRAY must have elements for `pop`");
    assert_error("[].popleft()", "ARRAY must have elements for `popleft`");
    assert_error("1.pop()", "Identifier not found: 1.pop");
    assert_error("1.first()", "Identifier not found: 1.first");
    assert_error("1.push(1)", "Identifier not found: 1.push");

    assert_eq!(inspect("let arr = [1, 2, 3, 4, 5]; arr.slice(1, 3)"), "[2, 3]");
    assert_eq!(inspect("[1, 2, 3, 4, 5].slice(1, 3)"), "[2, 3]");
    assert_error(
        "[1, 2, 3, 4, 5].slice(1, 8)",
        "slice bounds out of range, [1:8] with array len of 5",
    );
    assert_error(
        "[1, 2, 3, 4, 5].slice(3, 1)",
        "slice bounds out of range, [3:1] with array len of 5",
    );
    assert_error("[1, 2, 3, 4, 5].slice(1, 3, 5)", "wrong number of arguments. got=3, want=2");
    assert_error("[].slice(1, 3)", "array must have elements");

    assert_eq!(inspect("let arr = [1, 2]; arr.clear(); arr"), "[]");

    // methods chain because each mutator returns the receiver
    assert_integer("let arr = [1, 2, 3]; arr.push(4).pop()", 4);
    assert_eq!(inspect("let arr = [1, 2, 3]; arr.push(4).pop(); arr"), "[1, 2, 3]");
}

#[test]
fn array_aliasing() {
    assert_eq!(inspect("let a = [1, 2, 3]; let b = a; b.pop(); a"), "[1, 2]");
    // language-level == compares arrays by identity, not contents
    assert_bool("let a = [1]; let b = a; a == b", true);
    assert_bool("[1] == [1]", false);
}

#[test]
fn hash_literals_and_indexing() {
    let source = r#"let two = "two";
        let h = {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        };"#;

    assert_integer(&format!(r#"{source} h["one"]"#), 1);
    assert_integer(&format!(r#"{source} h["two"]"#), 2);
    assert_integer(&format!(r#"{source} h["three"]"#), 3);
    assert_integer(&format!(r#"{source} h[4]"#), 4);
    assert_integer(&format!(r#"{source} h[true]"#), 5);
    assert_integer(&format!(r#"{source} h[false]"#), 6);
    assert_integer(&format!(r#"{source} len(h)"#), 6);

    assert_integer(r#"{"foo": 5}["foo"]"#, 5);
    assert_null(r#"{"foo": 5}["bar"]"#);
    assert_integer(r#"let key = "foo"; {"foo": 5}[key]"#, 5);
    assert_null(r#"{}["foo"]"#);
    assert_integer("{5: 5}[5]", 5);
    assert_integer("{true: 5}[true]", 5);
    assert_integer("{false: 5}[false]", 5);
}

#[test]
fn hash_methods() {
    assert_integer(r#"{"key": 5}.get("key")"#, 5);
    assert_integer(r#"let map = {"key": 5}; map.get("key")"#, 5);
    assert_error(r#"{}.get("key")"#, "key doesn't exist in HASH");
    assert_error(r#"1.get("key")"#, "Identifier not found: 1.get");
    assert_integer(r#"let map = {"key": 5}; map.set("new", 8); map.get("new")"#, 8);
    assert_error(r#"1.set("key")"#, "Identifier not found: 1.set");
    assert_error(
        r#"let map = {"key": 5}; map.delete("key"); map.get("key")"#,
        "key doesn't exist in HASH",
    );

    // set and delete evaluate to no user-visible value
    let (outcome, errors) = run(r#"let m = {}; m.set(1, 2)"#);
    assert!(errors.is_empty());
    assert!(matches!(outcome, Ok(None)));

    assert_integer("let m = {1: 10, 2: 20}; let ks = m.keys(); ks[0] + ks[1]", 3);
    assert_integer("let m = {1: 10, 2: 20}; let vs = m.values(); vs[0] + vs[1]", 30);
    assert_integer("let m = {1: 2, 3: 4}; m.clear(); len(m)", 0);
    assert_bool("{1: 2}.contains(1)", true);
    assert_bool("{1: 2}.contains(2)", false);
    assert_error("{1: 2}.contains([1])", "argument key to `contains` must be Hashable");
    assert_error("{1: 2}.get(1.5)", "argument key to `get` must be Hashable");
}

#[test]
fn string_methods() {
    assert_string(r#""ABC".lower()"#, "abc");
    assert_string(r#""abc".upper()"#, "ABC");
    assert_string(r#""hello world".capitalize()"#, "Hello world");
    assert_eq!(inspect(r#""a,b,c".split(",")"#), "[a, b, c]");
    assert_eq!(inspect(r#""abc".split("")"#), "[a, b, c]");
    assert_integer(r#"len("keep calm and carry on".split(" "))"#, 5);

    // string methods never mutate the receiver
    assert_string(r#"let s = "abc"; s.upper(); s"#, "abc");
    // they chain through the returned value
    assert_string(r#""aBc".lower().upper()"#, "ABC");

    assert_error(r#""".lower()"#, "string must have length greater than 0");
    assert_error(r#""".split(",")"#, "string must have length greater than 0");
    assert_error(r#""abc".split(1)"#, "argument to `split` must be STRING, got INTEGER");
}

#[test]
fn method_dispatch() {
    assert_error("(5).first()", "Object does not implement Methodable");
    assert_error(r#""abc".nosuch()"#, "Method not found in object methods");
    // an environment binding shadows the per-type method table
    assert_string(r#"let upper = fn(s) { "shadowed" }; "abc".upper()"#, "shadowed");
}

#[test]
fn spec_scenarios() {
    assert_eq!(run_script("let j=0; for (let i=0; i<5; i++) { j++; }; j"), "5");
    assert_eq!(
        run_script("let sum=0; for (k,v in {1:10, 2:20, 3:30}) { sum += k+v; }; sum"),
        "66"
    );
    assert_eq!(
        run_script("let newAdder = fn(x){ fn(y){ x + y } }; let addTwo = newAdder(2); addTwo(3)"),
        "5"
    );
    assert_eq!(run_script("let arr=[1,2,3]; arr.push(4); arr.pop(); arr"), "[1, 2, 3]");
    assert_eq!(run_script(r#""foo" + " " + 5"#), "foo 5");
    assert_eq!(
        run_script("const a=7; a = 10"),
        "Error: Identifier a is const and can't be reassigned"
    );
    assert_eq!(run_script("-4 % 10"), "6");
    assert_eq!(
        run_script("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }"),
        "Error: unknown operator: BOOLEAN + BOOLEAN"
    );
}

#[test]
fn python_style_modulo() {
    // (a / b) * b + a % b == a, and the remainder takes the divisor's sign
    for (a, b) in [(7i64, 3i64), (-7, 3), (7, -3), (-7, -3), (10, 4), (-4, 10)] {
        assert_integer(&format!("({a} / {b}) * {b} + {a} % {b}"), a);
        let remainder = match eval_ok(&format!("{a} % {b}")) {
            Value::Integer(value) => value,
            other => panic!("expected integer remainder, got {other:?}"),
        };
        if remainder != 0 {
            assert_eq!(remainder.signum(), b.signum(), "sign of {a} % {b}");
        }
    }
}

#[test]
fn inspect_is_idempotent() {
    for source in ["5", "5.5", "true", "null", "[1, 2, 3]", "[1, [2, 3], 4.5, true]", "{1: 2}"] {
        let once = inspect(source);
        assert_eq!(inspect(&once), once, "inspect not stable for {source:?}");
    }
}

#[test]
fn parse_errors_are_accumulated() {
    let (outcome, errors) = run("let = 5");
    assert!(matches!(outcome, Ok(None)));
    assert!(!errors.is_empty());
    assert!(
        errors[0].to_string().starts_with("expected next token to be IDENT, got = instead"),
        "unexpected message: {}",
        errors[0]
    );

    let (_, errors) = run("let x = 5 @");
    assert!(!errors.is_empty());
    assert!(errors[0].to_string().starts_with("illegal token `@`"), "got: {}", errors[0]);

    let (_, errors) = run("let a = ; let b = 2;");
    assert!(!errors.is_empty());
    assert!(
        errors[0].to_string().starts_with("no prefix parse function for ; found"),
        "got: {}",
        errors[0]
    );

    let (_, errors) = run("for (5) { 1 }");
    assert!(!errors.is_empty());
    assert!(errors[0].to_string().starts_with("could not parse INT for a for loop"));
}

#[test]
fn example_script_runs() {
    let source = fs::read_to_string("tests/scripts/example.cix").expect("missing script file");
    assert_eq!(run_script(&source), "pass");
}
