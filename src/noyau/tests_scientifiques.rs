//! Tests scientifiques (campagne) : priorités, associativité, signes,
//! produits implicites, erreurs typées.
//!
//! Notes :
//! - Division entière tronquée vers zéro (jamais plancher) : -7/2 = -3.
//! - Les espaces sont ignorés, sauf entre deux chiffres où ils séparent deux nombres.
//! - Les piles sont locales à l’appel : deux appels identiques donnent le même résultat.

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use super::erreur::EvaluationError;
use super::evaluate;

fn eval_ok(expr: &str) -> BigInt {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_vaut(expr: &str, attendu: i64) {
    assert_eq!(eval_ok(expr), BigInt::from(attendu), "expr={expr:?}");
}

fn assert_echec(expr: &str, attendu: EvaluationError) {
    assert_eq!(evaluate(expr), Err(attendu), "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Priorités + associativité ------------------------ */

#[test]
fn sci_priorites() {
    assert_vaut("2*3-4*5", -14);
    assert_vaut("1-2*3-4", -9);
    assert_vaut("1+2*3-4", 3);
    assert_vaut("1-2*3*4", -23);
    assert_vaut("10-6/3", 8);
    assert_vaut("2+8/4*3", 8);
}

#[test]
fn sci_associativite_gauche() {
    assert_vaut("1-2-3", -4);
    assert_vaut("8/4/2", 1);
    assert_vaut("8/2*3", 12);
    assert_vaut("2*3-4+5", 7);
    assert_vaut("100/10/5/2", 1);
    assert_vaut("10-3+2", 9);
}

#[test]
fn sci_nombres_multichiffres() {
    assert_vaut("12+345", 357);
    assert_vaut("1000*1000", 1_000_000);
    assert_vaut("007+1", 8);
}

#[test]
fn sci_grands_entiers_sans_debordement() {
    let n = eval_ok("99999999999999999999*99999999999999999999");
    assert_eq!(
        n.to_string(),
        "9999999999999999999800000000000000000001"
    );
}

/* ------------------------ Division tronquée ------------------------ */

#[test]
fn sci_division_tronquee() {
    assert_vaut("7/2", 3);
    assert_vaut("-7/2", -3);
    assert_vaut("7/-2", -3);
    assert_vaut("-7/-2", 3);
    assert_vaut("1/3", 0);
    assert_vaut("-1/3", 0);
    assert_vaut("8/-3/2", -1);
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn sci_parentheses() {
    assert_vaut("(2+3)*4", 20);
    assert_vaut("2*(3+4)", 14);
    assert_vaut("((1+2)*(3+4))", 21);
    assert_vaut("(1-(2-(3-4)))", -2);
    assert_vaut("(((7)))", 7);
    assert_vaut("100/(2*(3+2))", 10);
}

#[test]
fn sci_produits_implicites() {
    assert_vaut("(2)(3)", 6);
    assert_vaut("(1+1)(2+2)", 8);
    assert_vaut("2(3)", 6);
    assert_vaut("(2)3", 6);
    assert_vaut("2(3)4", 24);
    assert_vaut("1+(2)(3)", 7);
    assert_vaut("(2)(3)+4", 10);
    assert_vaut("8/(2)(2)", 8);
}

/* ------------------------ Signes ------------------------ */

#[test]
fn sci_signes() {
    assert_vaut("-5+3", -2);
    assert_vaut("+5", 5);
    assert_vaut("-5", -5);
    assert_vaut("2*-3", -6);
    assert_vaut("2*-3+1", -5);
    assert_vaut("2-3*-4", 14);
    assert_vaut("3--5", 8);
    assert_vaut("3+-5", -2);
    assert_vaut("(-4)*2", -8);
    assert_vaut("-(2+3)", -5);
    assert_vaut("-(1)+1", 0);
    assert_vaut("2*-(3+1)", -8);
}

#[test]
fn sci_espaces_ignores() {
    assert_vaut(" 1 + 2 ", 3);
    assert_vaut("( 2 + 3 ) * 4", 20);
    assert_vaut("12 + 34", 46);
}

#[test]
fn sci_espace_entre_chiffres_separe_les_nombres() {
    // un espace ne colle jamais deux nombres
    assert_echec("1 2", EvaluationError::Malformed("operands without operator"));
    assert_echec("12 34+1", EvaluationError::Malformed("operands without operator"));
    assert_echec("1 2 + 1", EvaluationError::Malformed("operands without operator"));
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_echec("5/0", EvaluationError::DivideByZero);
    assert_echec("1/(2-2)", EvaluationError::DivideByZero);
    assert_echec("0/0", EvaluationError::DivideByZero);
}

#[test]
fn sci_vide_et_operateur_seul() {
    assert_echec("", EvaluationError::Malformed("no value to return"));
    assert_echec("   ", EvaluationError::Malformed("no value to return"));
    assert_echec("+", EvaluationError::Malformed("no value to return"));
}

#[test]
fn sci_sous_depassement() {
    assert!(matches!(
        evaluate("(2"),
        Err(EvaluationError::StackUnderflow(_))
    ));
    assert!(matches!(
        evaluate("()"),
        Err(EvaluationError::Malformed(_))
    ));
    assert!(matches!(
        evaluate("-()"),
        Err(EvaluationError::StackUnderflow(_))
    ));
    assert!(matches!(
        evaluate("12+a"),
        Err(EvaluationError::StackUnderflow(_))
    ));
}

#[test]
fn sci_nombre_invalide() {
    assert_echec("1a", EvaluationError::InvalidNumber("1a".into()));
    assert_echec("2*3x+1", EvaluationError::InvalidNumber("3x".into()));
}

#[test]
fn sci_parenthese_orpheline_droite() {
    assert_echec("1)2", EvaluationError::UnsupportedOperator(')'));
}

#[test]
fn sci_groupe_non_ferme() {
    assert_echec(
        "(1)(2",
        EvaluationError::StackUnderflow("closing bracket"),
    );
}

#[test]
fn sci_operandes_sans_operateur() {
    assert_echec("(2)a3", EvaluationError::Malformed("operands without operator"));
    assert_echec("(2)(3)a4", EvaluationError::Malformed("operands without operator"));
}

/* ------------------------ Stress borné ------------------------ */

#[test]
fn sci_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let n = 5_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_vaut(&expr, 1);
    budget(t0, max);
}

#[test]
fn sci_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = vec!["3"; 2_000].join("+");
    assert_vaut(&expr, 6_000);

    let expr = vec!["1"; 2_000].join("-");
    assert_vaut(&expr, 1 - 1_999);
    budget(t0, max);
}
