// src/noyau/classement.rs
//
// Prédicats de classement (purs) : un caractère de l’expression, vu à
// l’indice `i`, avec ses deux voisins. Ils remplacent un tokenizer :
// la lecture droite -> gauche décide par adjacence.
//
// `s` est l’expression SANS espaces (voir eval.rs).

use super::jetons::Symbole;

fn operateur_en(s: &[char], i: usize) -> bool {
    s.get(i)
        .and_then(|&c| Symbole::depuis(c))
        .is_some_and(Symbole::est_operateur)
}

fn chiffre_en(s: &[char], i: usize) -> bool {
    s.get(i).is_some_and(|c| c.is_ascii_digit())
}

/// Opérateur binaire : ni en tête ni en queue, et le voisin de gauche
/// n’est ni un opérateur ni '(' (sinon c’est un signe, ou un débris).
pub fn est_operateur(s: &[char], i: usize) -> bool {
    i > 0 && i + 1 < s.len() && operateur_en(s, i) && !operateur_en(s, i - 1) && s[i - 1] != '('
}

/// Signe unaire : '+' ou '-' suivi d’un chiffre (ou d’un groupe '('),
/// en tête, ou après un opérateur / une '('.
pub fn est_signe(s: &[char], i: usize) -> bool {
    let signe = matches!(s.get(i), Some('+') | Some('-'));
    let suivi = chiffre_en(s, i + 1) || s.get(i + 1) == Some(&'(');
    let precede = i == 0 || operateur_en(s, i - 1) || s[i - 1] == '(';
    signe && suivi && precede
}

pub fn est_par_gauche(s: &[char], i: usize) -> bool {
    s.get(i) == Some(&'(')
}

pub fn est_par_droite(s: &[char], i: usize) -> bool {
    s.get(i) == Some(&')')
}

/// Début (à gauche) d’une suite de chiffres.
pub fn debut_nombre(s: &[char], i: usize) -> bool {
    chiffre_en(s, i) && (i == 0 || !chiffre_en(s, i - 1))
}

/// Tout symbole reconnu (sert seulement à recaler la borne droite des nombres).
pub fn est_symbole(s: &[char], i: usize) -> bool {
    s.get(i).and_then(|&c| Symbole::depuis(c)).is_some()
}

/// Multiplication implicite à gauche d’une '(' : "2(3)", "(2)(3)".
pub fn produit_avant_groupe(s: &[char], i: usize) -> bool {
    i > 0 && (chiffre_en(s, i - 1) || s[i - 1] == ')')
}

/// Multiplication implicite à droite d’une ')' : "(2)3".
pub fn produit_apres_groupe(s: &[char], i: usize) -> bool {
    chiffre_en(s, i + 1)
}
