//! Noyau — évaluation entière
//!
//! Number(n) -> n ; BinOp -> opérateur appliqué aux valeurs des deux branches.
//! Division : tronquée vers zéro (BigInt `/`), indéfinie si le diviseur vaut 0.
//!
//! Remarque : l’indéfini est un `Err` explicite, jamais une valeur sentinelle.
//! La politique ±∞ / NaN vit à part (`lecture_etendue`), hors du contrat de base.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use std::fmt;

use super::expr::{Expr, Op};

/// Résultat indéfini d’une évaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Indefini {
    /// `dividende / 0` : on garde le dividende pour la lecture étendue.
    DivisionParZero { dividende: BigInt },
}

impl fmt::Display for Indefini {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indefini::DivisionParZero { dividende } => {
                write!(f, "division par zéro ({dividende} / 0)")
            }
        }
    }
}

impl std::error::Error for Indefini {}

/// API publique : valeur entière de l’arbre, ou indéfini.
///
/// Le premier indéfini rencontré (branche gauche d’abord) remonte tel quel.
pub fn eval(e: &Expr) -> Result<BigInt, Indefini> {
    match e {
        Expr::Number(n) => Ok(n.clone()),
        Expr::BinOp(op, a, b) => {
            let x = eval(a)?;
            let y = eval(b)?;
            applique(*op, x, y)
        }
    }
}

fn applique(op: Op, x: BigInt, y: BigInt) -> Result<BigInt, Indefini> {
    match op {
        Op::Plus => Ok(x + y),
        Op::Minus => Ok(x - y),
        Op::Times => Ok(x * y),
        Op::Div => {
            if y.is_zero() {
                return Err(Indefini::DivisionParZero { dividende: x });
            }
            Ok(x / y)
        }
    }
}

/* ------------------------ Lecture étendue (±∞ / NaN) ------------------------ */

/// Lecture “calculatrice” : l’indéfini est remplacé selon le signe du dividende.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lecture {
    Entier(BigInt),
    PlusInfini,
    MoinsInfini,
    PasUnNombre,
}

impl fmt::Display for Lecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lecture::Entier(n) => write!(f, "{n}"),
            Lecture::PlusInfini => write!(f, "∞"),
            Lecture::MoinsInfini => write!(f, "-∞"),
            Lecture::PasUnNombre => write!(f, "NaN"),
        }
    }
}

pub fn lecture_etendue(e: &Expr) -> Lecture {
    match eval(e) {
        Ok(n) => Lecture::Entier(n),
        Err(Indefini::DivisionParZero { dividende }) => {
            if dividende.is_positive() {
                Lecture::PlusInfini
            } else if dividende.is_negative() {
                Lecture::MoinsInfini
            } else {
                Lecture::PasUnNombre
            }
        }
    }
}
