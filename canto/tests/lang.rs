//! Tests for implementation of language
use assert_matches::assert_matches;
use canto::{parse, Binding, Env, EnvRef, Error, Evaluator, Expr, Limits, Result, SymbolId};
use std::cell::RefCell;
use std::rc::Rc;

// Convenience to eval top-level expr against a fresh standard env
fn eval_expr(e: &str) -> Result<Expr> {
    let env: EnvRef = Rc::new(RefCell::new(Env::standard()));
    eval_in(&env, e)
}

// Convenience to eval against a shared env
fn eval_in(env: &EnvRef, e: &str) -> Result<Expr> {
    Evaluator::new().eval(&parse(e)?, env)
}

#[test]
fn self_evaluating_atoms() {
    assert_eq!(eval_expr("5").unwrap(), Expr::Int(5));
    assert_eq!(eval_expr("-99").unwrap(), Expr::Int(-99));
    assert_eq!(eval_expr("\"hello\"").unwrap(), Expr::string("hello"));
    assert_eq!(eval_expr("t").unwrap(), Expr::T);
}

#[test]
fn nil_is_the_empty_list() {
    assert_eq!(eval_expr("nil").unwrap(), Expr::nil());
    assert_eq!(eval_expr("()").unwrap(), Expr::nil());
    assert_eq!(eval_expr("(EQ nil ())").unwrap(), Expr::T);
    assert_eq!(eval_expr("(NULL nil)").unwrap(), Expr::T);
    assert_eq!(eval_expr("(NULL ())").unwrap(), Expr::T);
}

#[test]
fn sentinel_names_resolve_in_any_case() {
    assert_eq!(eval_expr("NIL").unwrap(), Expr::nil());
    assert_eq!(eval_expr("Nil").unwrap(), Expr::nil());
    assert_eq!(eval_expr("T").unwrap(), Expr::T);
}

#[test]
fn symbols_undefined() {
    assert_matches!(eval_expr("greeting"), Err(Error::UnboundSymbol(_)));
}

#[test]
fn symbols_resolve_to_defined_values() {
    let env: EnvRef = Rc::new(RefCell::new(Env::standard()));
    env.borrow_mut().define(
        SymbolId::from("greeting"),
        Binding::Value(Expr::string("Hello world")),
    );
    assert_eq!(eval_in(&env, "greeting").unwrap(), Expr::string("Hello world"));
}

#[test]
fn quoting_protects_from_evaluation() {
    assert_eq!(eval_expr("'greeting").unwrap(), Expr::symbol("greeting"));
    assert_eq!(
        eval_expr("'(EQ 1 2)").unwrap(),
        Expr::List(vec![Expr::symbol("EQ"), Expr::Int(1), Expr::Int(2)])
    );
}

#[test]
fn eq_compares_structurally() {
    assert_eq!(eval_expr("(EQ 1 1)").unwrap(), Expr::T);
    assert_eq!(eval_expr("(EQ 1 2)").unwrap(), Expr::nil());
    assert_eq!(eval_expr("(EQ \"a\" \"a\")").unwrap(), Expr::T);
    assert_eq!(eval_expr("(EQ 'a 'a)").unwrap(), Expr::T);
    assert_eq!(eval_expr("(EQ '(1 2) '(1 2))").unwrap(), Expr::T);
    assert_eq!(eval_expr("(EQ 1 \"1\")").unwrap(), Expr::nil());
}

#[test]
fn eq_has_an_alias() {
    assert_eq!(eval_expr("(= 2 2)").unwrap(), Expr::T);
    assert_eq!(eval_expr("(= 2 3)").unwrap(), Expr::nil());
}

#[test]
fn null_tests_for_the_empty_list() {
    assert_eq!(eval_expr("(NULL '(1))").unwrap(), Expr::nil());
    assert_eq!(eval_expr("(NULL 5)").unwrap(), Expr::nil());
    assert_eq!(eval_expr("(NULL (EQ 1 2))").unwrap(), Expr::T);
}

#[test]
fn not_preserves_truthiness_when_doubled() {
    assert_eq!(eval_expr("(NOT (NOT t))").unwrap(), Expr::T);
    assert_eq!(eval_expr("(NOT (NOT nil))").unwrap(), Expr::nil());
    assert_eq!(eval_expr("(NOT (NOT 0))").unwrap(), Expr::T, "0 is truthy");
    assert_eq!(eval_expr("(NOT (NOT \"\"))").unwrap(), Expr::T, "empty string is truthy");
}

#[test]
fn and_short_circuits() {
    assert_eq!(eval_expr("(AND t t nil t)").unwrap(), Expr::nil());
    assert_eq!(eval_expr("(AND t t 3)").unwrap(), Expr::Int(3));
    assert_eq!(eval_expr("(AND)").unwrap(), Expr::T);
}

#[test]
fn or_returns_first_truthy() {
    assert_eq!(eval_expr("(OR nil nil 3)").unwrap(), Expr::Int(3));
    assert_eq!(eval_expr("(OR nil nil nil)").unwrap(), Expr::nil());
    assert_eq!(eval_expr("(OR)").unwrap(), Expr::nil());
}

#[test]
fn cond_selects_the_first_truthy_clause() {
    assert_eq!(
        eval_expr("(COND ((EQ 1 2) \"no\") ((EQ 1 1) \"yes\"))").unwrap(),
        Expr::string("yes")
    );
    assert_eq!(eval_expr("(COND (nil 1) (nil 2))").unwrap(), Expr::nil());
}

#[test]
fn if_behaves_identically_to_cond() {
    let clauses = "((EQ 1 2) \"no\") ((EQ 1 1) \"yes\")";
    assert_eq!(
        eval_expr(&format!("(COND {clauses})")).unwrap(),
        eval_expr(&format!("(IF {clauses})")).unwrap()
    );
}

#[test]
fn gt_compares_ints_and_strings() {
    assert_eq!(eval_expr("(> 2 1)").unwrap(), Expr::T);
    assert_eq!(eval_expr("(> 1 2)").unwrap(), Expr::nil());
    assert_eq!(eval_expr("(> \"b\" \"a\")").unwrap(), Expr::T);
    assert_matches!(eval_expr("(> 1 \"a\")"), Err(Error::TypeMismatch(_)));
}

#[test]
fn symbolp_reports_bound_names() {
    assert_eq!(eval_expr("(SYMBOLP \"UNDEFINED_NAME\")").unwrap(), Expr::nil());
    assert_eq!(eval_expr("(SYMBOLP 'COND)").unwrap(), Expr::T);
    assert_eq!(eval_expr("(SYMBOLP 'cond)").unwrap(), Expr::T);
    assert_eq!(eval_expr("(SYMBOLP 'NIL)").unwrap(), Expr::T);

    let env: EnvRef = Rc::new(RefCell::new(Env::standard()));
    assert_eq!(eval_in(&env, "(SYMBOLP \"X\")").unwrap(), Expr::nil());
    env.borrow_mut()
        .define(SymbolId::from("X"), Binding::Value(Expr::Int(5)));
    assert_eq!(eval_in(&env, "(SYMBOLP \"X\")").unwrap(), Expr::T);
    assert_eq!(eval_in(&env, "(SYMBOLP 'X)").unwrap(), Expr::T);
}

#[test]
fn symbolp_rejects_other_operands() {
    assert_matches!(eval_expr("(SYMBOLP 5)"), Err(Error::TypeMismatch(_)));
}

#[test]
fn apropos_finds_entries_with_documentation() {
    let result = eval_expr("(APROPOS \"COND\")").unwrap();
    let entries = match result {
        Expr::List(entries) => entries,
        other => panic!("expected a list of entries, got {other}"),
    };
    assert_eq!(entries.len(), 1);
    assert_matches!(
        &entries[0],
        Expr::List(pair) if pair[0] == Expr::symbol("COND") && matches!(&pair[1], Expr::String(doc) if doc.contains("cond"))
    );

    // the alias is indexed under its own name
    let result = eval_expr("(APROPOS \"IF\")").unwrap();
    assert_matches!(
        result,
        Expr::List(entries) if entries.iter().any(|e| matches!(e, Expr::List(pair) if pair[0] == Expr::symbol("IF")))
    );
}

#[test]
fn apropos_includes_host_defined_symbols() {
    let env: EnvRef = Rc::new(RefCell::new(Env::standard()));
    env.borrow_mut().define(
        SymbolId::from("MY_VALUE"),
        Binding::Value(Expr::Int(42)),
    );
    let result = eval_in(&env, "(APROPOS \"MY_\")").unwrap();
    assert_eq!(
        result,
        Expr::List(vec![Expr::List(vec![
            Expr::symbol("MY_VALUE"),
            Expr::nil(),
        ])])
    );
}

#[test]
fn documentation_returns_docstring_or_nil() {
    assert_matches!(
        eval_expr("(DOCUMENTATION 'EQ)").unwrap(),
        Expr::String(doc) if doc.contains("eq")
    );
    // EQ evaluates to itself, so the unquoted form works too
    assert_matches!(
        eval_expr("(DOCUMENTATION EQ)").unwrap(),
        Expr::String(_)
    );
    assert_eq!(eval_expr("(DOCUMENTATION \"missing\")").unwrap(), Expr::nil());
}

#[test]
fn undefined_function_names_the_operator() {
    assert_eq!(
        eval_expr("(UNDEFINEDFUNC 1 2)"),
        Err(Error::UndefinedFunction(SymbolId::from("UNDEFINEDFUNC")))
    );
}

#[test]
fn operator_names_are_case_insensitive() {
    assert_eq!(eval_expr("(eq 1 1)").unwrap(), Expr::T);
    assert_eq!(eval_expr("(and t nil)").unwrap(), Expr::nil());
    assert_eq!(eval_expr("(apropos \"null\")").unwrap(), eval_expr("(APROPOS \"null\")").unwrap());
}

#[test]
fn arity_violations_are_errors() {
    assert_matches!(eval_expr("(EQ 1)"), Err(Error::ArityMismatch { got: 1, .. }));
    assert_matches!(
        eval_expr("(EQ 1 2 3)"),
        Err(Error::ArityMismatch { got: 3, .. })
    );
    assert_matches!(eval_expr("(NOT)"), Err(Error::ArityMismatch { got: 0, .. }));
}

#[test]
fn failures_propagate_out_of_nested_forms() {
    assert_eq!(
        eval_expr("(COND ((EQ 1 1) missing))"),
        Err(Error::UnboundSymbol(SymbolId::from("missing")))
    );
    assert_eq!(
        eval_expr("(NOT (UNDEFINEDFUNC))"),
        Err(Error::UndefinedFunction(SymbolId::from("UNDEFINEDFUNC")))
    );
}

#[test]
fn deep_recursion_is_guarded() {
    let mut source = String::new();
    for _ in 0..300 {
        source.push_str("(NOT ");
    }
    source.push('t');
    for _ in 0..300 {
        source.push(')');
    }
    assert_eq!(eval_expr(&source), Err(Error::RecursionLimitExceeded(200)));
}

#[test]
fn step_budget_is_enforced_when_configured() {
    let env: EnvRef = Rc::new(RefCell::new(Env::standard()));
    let mut evaluator = Evaluator::with_limits(Limits {
        max_steps: Some(3),
        ..Limits::default()
    });
    let expr = parse("(AND t t t t t t)").unwrap();
    assert_eq!(
        evaluator.eval(&expr, &env),
        Err(Error::StepBudgetExhausted(3))
    );
}

#[test]
fn comments_are_ignored_by_the_reader() {
    assert_eq!(
        eval_expr("(AND t # trailing comment\n t)").unwrap(),
        Expr::T
    );
}

#[test]
fn evaluation_is_deterministic() {
    let env: EnvRef = Rc::new(RefCell::new(Env::standard()));
    let first = eval_in(&env, "(APROPOS \"\")").unwrap();
    let second = eval_in(&env, "(APROPOS \"\")").unwrap();
    assert_eq!(first, second);
}
