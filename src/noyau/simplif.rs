// src/noyau/simplif.rs
//
// Simplification par règles locales (ordre = priorité, la première règle gagne).
//
// simplify_top : racine seulement
//   1) x + 0 -> x
//   2) x * 1 -> x
//   3) _ * 0 -> 0 (le zéro filtré lui-même)
//   4) sinon inchangé
//
// simplify_all : arbre entier
//   1) x + 0 -> all(x)
//   2) x * 1 -> all(x)
//   3) _ * 0 -> 0 (on ne descend pas)
//   4) x + x -> 2 * all(x)  (égalité STRUCTURELLE, testée avant le repli)
//   5) op(l, r) -> op(all(l), all(r))
//   6) feuille inchangée
//
// IMPORTANT : une seule passe de simplify_all n’est pas toujours un point fixe
// (ex: (a + 0) + a -> a + a). simplify_point_fixe itère jusqu’à stabilité.

use super::expr::{number, Expr, Op};

/// Règles appliquées à la racine uniquement ; les enfants ne sont pas touchés.
pub fn simplify_top(e: Expr) -> Expr {
    match e {
        Expr::BinOp(Op::Plus, x, y) if y.est_zero() => *x,
        Expr::BinOp(Op::Times, x, y) if y.est_un() => *x,
        Expr::BinOp(Op::Times, _, y) if y.est_zero() => *y,
        autre => autre,
    }
}

/// Normalisation récursive (une passe).
pub fn simplify_all(e: Expr) -> Expr {
    match e {
        n @ Expr::Number(_) => n,

        Expr::BinOp(Op::Plus, x, y) if y.est_zero() => simplify_all(*x),
        Expr::BinOp(Op::Times, x, y) if y.est_un() => simplify_all(*x),

        // zéro absorbant : pas de descente
        Expr::BinOp(Op::Times, _, y) if y.est_zero() => *y,

        Expr::BinOp(Op::Plus, x, y) if x == y => Expr::BinOp(
            Op::Times,
            Box::new(number(2)),
            Box::new(simplify_all(*y)),
        ),

        Expr::BinOp(op, l, r) => Expr::BinOp(
            op,
            Box::new(simplify_all(*l)),
            Box::new(simplify_all(*r)),
        ),
    }
}

/* ------------------------ Point fixe + démarche ------------------------ */

/// Une passe de simplify_all, numérotée (0 = arbre de départ).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Etape {
    pub passe: usize,
    pub expr: Expr,
}

/// Enchaîne les passes de simplify_all jusqu’à stabilité.
///
/// Terminaison : chaque passe qui change l’arbre fait baisser
/// (taille, nombre de `+`) dans l’ordre lexicographique.
pub fn trace_simplification(e: Expr) -> Vec<Etape> {
    // garde-fou : borne largement supérieure au nombre de baisses possibles
    let max_passes = 2 * e.taille() + 1;

    let mut etapes = vec![Etape { passe: 0, expr: e }];

    for passe in 1..=max_passes {
        let courant = match etapes.last() {
            Some(derniere) => derniere.expr.clone(),
            None => break,
        };
        let suivant = simplify_all(courant.clone());
        if suivant == courant {
            break;
        }
        etapes.push(Etape {
            passe,
            expr: suivant,
        });
    }

    etapes
}

/// simplify_all itéré jusqu’au point fixe (idempotent).
pub fn simplify_point_fixe(e: Expr) -> Expr {
    let mut courant = e;
    let max_passes = 2 * courant.taille() + 1;

    for _ in 0..max_passes {
        let suivant = simplify_all(courant.clone());
        if suivant == courant {
            break;
        }
        courant = suivant;
    }

    courant
}
