// src/noyau/expr.rs
//
// AST exact (entiers sans débordement).
// - Number : littéral entier (BigInt)
// - BinOp  : opérateur binaire + deux sous-arbres
//
// IMPORTANT :
// - Ensemble de variantes FERMÉ : tout match sur Expr reste exhaustif, sans bras `_`.
// - Arbres immuables : chaque transformation rend un nouvel arbre.
// - Égalité structurelle (derive) ; l’identité reste std::ptr::eq.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use std::fmt;

use super::eval::{eval, lecture_etendue, Indefini, Lecture};
use super::format::format_expr;
use super::simplif::{simplify_all, simplify_point_fixe, simplify_top};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Plus,
    Minus,
    Times,
    Div,
}

impl Op {
    /// Ordre stable (sélecteurs UI, générateurs de tests).
    pub const TOUS: [Op; 4] = [Op::Plus, Op::Minus, Op::Times, Op::Div];

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Times => "*",
            Op::Div => "/",
        }
    }

    /// Plus petit = lie plus fort.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Times | Op::Div => 1,
            Op::Plus | Op::Minus => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    Number(BigInt),
    BinOp(Op, Box<Expr>, Box<Expr>),
}

/* ------------------------ Fabriques ------------------------ */

pub fn number(n: impl Into<BigInt>) -> Expr {
    Expr::Number(n.into())
}

pub fn bin_op(op: Op, gauche: Expr, droite: Expr) -> Expr {
    Expr::BinOp(op, Box::new(gauche), Box::new(droite))
}

pub fn plus(gauche: Expr, droite: Expr) -> Expr {
    bin_op(Op::Plus, gauche, droite)
}

pub fn minus(gauche: Expr, droite: Expr) -> Expr {
    bin_op(Op::Minus, gauche, droite)
}

pub fn times(gauche: Expr, droite: Expr) -> Expr {
    bin_op(Op::Times, gauche, droite)
}

pub fn div(gauche: Expr, droite: Expr) -> Expr {
    bin_op(Op::Div, gauche, droite)
}

impl Expr {
    /// Précédence d’affichage : 0 pour une feuille.
    pub fn precedence(&self) -> u8 {
        match self {
            Expr::Number(_) => 0,
            Expr::BinOp(op, _, _) => op.precedence(),
        }
    }

    /// Vrai si le noeud est le littéral 0.
    pub fn est_zero(&self) -> bool {
        matches!(self, Expr::Number(n) if n.is_zero())
    }

    /// Vrai si le noeud est le littéral 1.
    pub fn est_un(&self) -> bool {
        matches!(self, Expr::Number(n) if n.is_one())
    }

    /// Nombre de noeuds.
    pub fn taille(&self) -> usize {
        match self {
            Expr::Number(_) => 1,
            Expr::BinOp(_, a, b) => 1 + a.taille() + b.taille(),
        }
    }

    /// Profondeur (une feuille vaut 1).
    pub fn profondeur(&self) -> usize {
        match self {
            Expr::Number(_) => 1,
            Expr::BinOp(_, a, b) => 1 + a.profondeur().max(b.profondeur()),
        }
    }

    /* ------------------------ Raccourcis vers le noyau ------------------------ */

    pub fn eval(&self) -> Result<BigInt, Indefini> {
        eval(self)
    }

    pub fn lecture_etendue(&self) -> Lecture {
        lecture_etendue(self)
    }

    pub fn simplify_top(self) -> Expr {
        simplify_top(self)
    }

    pub fn simplify_all(self) -> Expr {
        simplify_all(self)
    }

    pub fn simplify_point_fixe(self) -> Expr {
        simplify_point_fixe(self)
    }
}

/* ------------------------ Affichage (forme infixe minimale) ------------------------ */

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_expr(self))
    }
}
