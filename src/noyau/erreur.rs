// src/noyau/erreur.rs
//
// Erreurs du noyau (typées, sans état).
// Toutes remontent telles quelles à l’appelant : aucune reprise ici,
// c’est la saisie (terminal ou fenêtre) qui efface et redemande.

use thiserror::Error;

/// Échec d’une évaluation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    /// État final des piles incohérent (vide, ou opérandes en trop).
    #[error("malformed expression: {0}")]
    Malformed(&'static str),

    /// Une réduction manque d’opérande ou d’opérateur.
    #[error("stack underflow: missing {0}")]
    StackUnderflow(&'static str),

    /// Suite numérique illisible en base 10.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("division by zero")]
    DivideByZero,

    /// Jeton non calculable arrivé jusqu’au calcul (ex: parenthèse orpheline).
    #[error("unsupported operator: '{0}'")]
    UnsupportedOperator(char),
}
