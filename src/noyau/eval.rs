//! Noyau: évaluation (lecture droite -> gauche, deux piles)
//!
//! Pas de liste de jetons ni d’arbre : on parcourt l’expression de la fin
//! vers le début, on empile opérandes et opérateurs, et on réduit dès que
//! la priorité l’exige. La ')' empilée borne le groupe jusqu’à sa '('.
//!
//! Ordre d’une réduction : x = premier dépilé, y = second, résultat `x op y`.
//! En lisant à rebours, x est l’opérande qui était À GAUCHE dans le texte.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use super::classement::{
    debut_nombre, est_operateur, est_par_droite, est_par_gauche, est_signe, est_symbole,
    produit_apres_groupe, produit_avant_groupe,
};
use super::erreur::EvaluationError;
use super::jetons::Symbole;
use super::pile::Pile;

/// Démarche : une ligne par réduction, dans l’ordre où elles ont eu lieu.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub etapes: Vec<String>,
}

impl Demarche {
    pub fn texte(&self) -> String {
        self.etapes.join("\n")
    }
}

/// API publique : évalue une expression entière.
pub fn evaluate(expression: &str) -> Result<BigInt, EvaluationError> {
    Evaluateur::new(false)
        .executer(expression)
        .map(|(valeur, _)| valeur)
}

/// Comme `evaluate`, mais garde aussi la démarche (réductions successives).
pub fn evaluate_with_trace(expression: &str) -> Result<(BigInt, Demarche), EvaluationError> {
    Evaluateur::new(true).executer(expression)
}

/// Piles locales à UN appel : créées ici, jetées au retour.
struct Evaluateur {
    operandes: Pile<BigInt>,
    operateurs: Pile<Symbole>,
    trace: Option<Vec<String>>,
}

impl Evaluateur {
    fn new(avec_trace: bool) -> Self {
        Self {
            operandes: Pile::new(),
            operateurs: Pile::new(),
            trace: avec_trace.then(Vec::new),
        }
    }

    fn executer(mut self, expression: &str) -> Result<(BigInt, Demarche), EvaluationError> {
        log::debug!("évaluation de {expression:?}");

        let s = compacter(expression);

        // borne droite (exclue) de la prochaine suite de chiffres
        let mut borne = s.len();

        for i in (0..s.len()).rev() {
            if est_operateur(&s, i) {
                let op = Symbole::depuis(s[i]).ok_or(EvaluationError::UnsupportedOperator(s[i]))?;
                self.empiler_operateur(op)?;
            } else if est_signe(&s, i) {
                // l’opérande signé vient d’être empilé (nombre ou groupe) : on
                // l’inverse sur place ; "+n" ne fait rien
                if s[i] == '-' {
                    self.inverser_sommet()?;
                }
            } else if est_par_gauche(&s, i) {
                self.fermer_groupe()?;
                if produit_avant_groupe(&s, i) {
                    self.empiler_operateur(Symbole::Fois)?;
                }
            } else if est_par_droite(&s, i) {
                if produit_apres_groupe(&s, i) {
                    self.empiler_operateur(Symbole::Fois)?;
                }
                self.operateurs.push(Symbole::ParD);
            } else if debut_nombre(&s, i) {
                let n = lire_nombre(&s[i..borne])?;
                self.operandes.push(n);
            }

            if est_symbole(&s, i) || s[i] == ' ' {
                borne = i;
            }
        }

        while !self.operateurs.is_empty() {
            self.reduire()?;
        }

        let resultat = self
            .operandes
            .pop()
            .ok_or(EvaluationError::Malformed("no value to return"))?;

        if !self.operandes.is_empty() {
            log::debug!("{} opérande(s) sans opérateur", self.operandes.len());
            return Err(EvaluationError::Malformed("operands without operator"));
        }

        log::debug!("{expression:?} = {resultat}");

        let demarche = Demarche {
            etapes: self.trace.unwrap_or_default(),
        };
        Ok((resultat, demarche))
    }

    /// Réduit tant que le sommet est un opérateur STRICTEMENT plus prioritaire,
    /// puis empile `op`. Égalité : on laisse en pile (associativité gauche
    /// obtenue au vidage, qui repart de la gauche).
    fn empiler_operateur(&mut self, op: Symbole) -> Result<(), EvaluationError> {
        while let Some(&sommet) = self.operateurs.peek() {
            match (sommet.priorite(), op.priorite()) {
                (Some(p_sommet), Some(p_op)) if p_sommet > p_op => self.reduire()?,
                _ => break,
            }
        }
        self.operateurs.push(op);
        Ok(())
    }

    /// Sur une '(' : réduit jusqu’à la borne ')' puis la retire.
    fn fermer_groupe(&mut self) -> Result<(), EvaluationError> {
        loop {
            match self.operateurs.peek().copied() {
                Some(Symbole::ParD) => {
                    self.operateurs.pop();
                    return Ok(());
                }
                Some(_) => self.reduire()?,
                None => return Err(EvaluationError::StackUnderflow("closing bracket")),
            }
        }
    }

    /// Signe '-' : le sommet des opérandes est la valeur juste à droite.
    /// L’inverser sur place garde "8/-3" = 8/(-3) (et non (8/-1)*3).
    fn inverser_sommet(&mut self) -> Result<(), EvaluationError> {
        let n = self
            .operandes
            .pop()
            .ok_or(EvaluationError::StackUnderflow("signed operand"))?;
        log::trace!("signe : -({n})");
        self.operandes.push(-n);
        Ok(())
    }

    /// Une réduction : deux opérandes + un opérateur -> un opérande.
    fn reduire(&mut self) -> Result<(), EvaluationError> {
        let x = self
            .operandes
            .pop()
            .ok_or(EvaluationError::StackUnderflow("left operand"))?;
        let y = self
            .operandes
            .pop()
            .ok_or(EvaluationError::StackUnderflow("right operand"))?;
        let op = self
            .operateurs
            .pop()
            .ok_or(EvaluationError::StackUnderflow("operator"))?;

        let r = calculer(&x, &y, op)?;

        log::trace!("{} {op} {} = {r}", terme(&x), terme(&y));
        if let Some(trace) = self.trace.as_mut() {
            trace.push(format!("{} {op} {} = {r}", terme(&x), terme(&y)));
        }

        self.operandes.push(r);
        Ok(())
    }
}

/// `x op y`, division entière tronquée vers zéro (BigInt le fait déjà).
fn calculer(x: &BigInt, y: &BigInt, op: Symbole) -> Result<BigInt, EvaluationError> {
    match op {
        Symbole::Plus => Ok(x + y),
        Symbole::Moins => Ok(x - y),
        Symbole::Fois => Ok(x * y),
        Symbole::Divise => {
            if y.is_zero() {
                return Err(EvaluationError::DivideByZero);
            }
            Ok(x / y)
        }
        Symbole::ParG | Symbole::ParD => Err(EvaluationError::UnsupportedOperator(op.as_char())),
    }
}

/// Retire les espaces, sauf un seul entre deux chiffres : il borne alors les
/// deux nombres ("1 2" reste deux opérandes, jamais 12).
fn compacter(expression: &str) -> Vec<char> {
    let mut s = Vec::with_capacity(expression.len());
    let mut blanc = false;
    for c in expression.chars() {
        if c.is_whitespace() {
            blanc = true;
            continue;
        }
        if blanc && c.is_ascii_digit() && s.last().is_some_and(|d: &char| d.is_ascii_digit()) {
            s.push(' ');
        }
        blanc = false;
        s.push(c);
    }
    s
}

/// Suite numérique -> entier. Tout caractère non décimal la rend invalide.
fn lire_nombre(suite: &[char]) -> Result<BigInt, EvaluationError> {
    let texte: String = suite.iter().collect();
    if texte.is_empty() || !texte.chars().all(|c| c.is_ascii_digit()) {
        return Err(EvaluationError::InvalidNumber(texte));
    }
    BigInt::parse_bytes(texte.as_bytes(), 10).ok_or(EvaluationError::InvalidNumber(texte))
}

/// Négatifs entre parenthèses dans la démarche : "2 - (-3)".
fn terme(n: &BigInt) -> String {
    if n.is_negative() {
        format!("({n})")
    } else {
        n.to_string()
    }
}
