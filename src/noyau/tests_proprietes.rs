//! Tests de propriétés (campagne exhaustive bornée).
//!
//! But : vérifier les invariants sur TOUS les arbres de profondeur ≤ 3
//! construits sur un petit alphabet de feuilles (0, 1, 2, -3),
//! plus un échantillon déterministe de profondeur 4.
//!
//! Notes (aligné avec l’état actuel du noyau) :
//! - simplify_all fait UNE passe : pas idempotent en général
//!   (ex: (2 + 0) + 2 -> 2 + 2 -> 2 * 2). L’idempotence est donc vérifiée
//!   sur simplify_point_fixe, et sur simplify_all pour les cas littéraux.
//! - simplify_* peuvent rendre défini un arbre indéfini (zéro absorbant) :
//!   la préservation de la valeur ne porte que sur les arbres définis.

use num_bigint::BigInt;

use super::{
    div, eval, format_expr, minus, number, plus, simplify_all, simplify_point_fixe,
    simplify_top, times, Expr, Op,
};

const FEUILLES: [i64; 4] = [0, 1, 2, -3];

fn feuilles() -> Vec<Expr> {
    FEUILLES.iter().map(|&n| number(n)).collect()
}

/// Tous les arbres de profondeur ≤ `profondeur` (1 = feuilles seules).
fn tous_les_arbres(profondeur: usize) -> Vec<Expr> {
    if profondeur <= 1 {
        return feuilles();
    }
    let sous = tous_les_arbres(profondeur - 1);
    let mut out = feuilles();
    for op in Op::TOUS {
        for a in &sous {
            for b in &sous {
                out.push(Expr::BinOp(op, Box::new(a.clone()), Box::new(b.clone())));
            }
        }
    }
    out
}

/// Profondeur 3 complète + échantillon de profondeur 4
/// (avec opérandes identiques pour la règle x + x).
fn corpus() -> Vec<Expr> {
    let p3 = tous_les_arbres(3);
    let mut out = p3.clone();
    for (i, a) in p3.iter().enumerate().step_by(97) {
        let b = &p3[(i * 31 + 5) % p3.len()];
        for op in Op::TOUS {
            out.push(Expr::BinOp(op, Box::new(a.clone()), Box::new(b.clone())));
            out.push(Expr::BinOp(op, Box::new(a.clone()), Box::new(a.clone())));
        }
    }
    out
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn prop_feuille_vaut_sa_valeur() {
    for n in [-1_000_000_i64, -1, 0, 1, 42, i64::MAX, i64::MIN] {
        assert_eq!(eval(&number(n)), Ok(BigInt::from(n)));
    }
}

#[test]
fn prop_plus_zero_neutre_a_l_evaluation() {
    for e in corpus() {
        let avec_zero = plus(e.clone(), number(0));
        match eval(&e) {
            Ok(v) => assert_eq!(eval(&avec_zero), Ok(v), "e={e:?}"),
            Err(_) => assert!(eval(&avec_zero).is_err(), "e={e:?}"),
        }
    }
}

#[test]
fn prop_division_par_zero_jamais_numerique() {
    for e in corpus() {
        assert!(eval(&div(e.clone(), number(0))).is_err(), "e={e:?}");
    }
    assert!(eval(&div(number(5), number(0))).is_err());
}

/* ------------------------ simplify_top ------------------------ */

#[test]
fn prop_top_retire_plus_zero() {
    for e in corpus() {
        assert_eq!(simplify_top(plus(e.clone(), number(0))), e);
    }
}

#[test]
fn prop_top_stable_sur_noeud_sans_regle() {
    for e in corpus() {
        let regle_applicable = match &e {
            Expr::BinOp(Op::Plus, _, y) => y.est_zero(),
            Expr::BinOp(Op::Times, _, y) => y.est_zero() || y.est_un(),
            Expr::BinOp(Op::Minus | Op::Div, _, _) | Expr::Number(_) => false,
        };
        if !regle_applicable {
            assert_eq!(simplify_top(e.clone()), e);
        }
    }
}

#[test]
fn prop_top_preserve_la_valeur() {
    for e in corpus() {
        if let Ok(v) = eval(&e) {
            assert_eq!(eval(&simplify_top(e.clone())), Ok(v), "e={e:?}");
        }
    }
}

/* ------------------------ simplify_all ------------------------ */

#[test]
fn prop_all_preserve_la_valeur() {
    for e in corpus() {
        if let Ok(v) = eval(&e) {
            let s = simplify_all(e.clone());
            assert_eq!(eval(&s), Ok(v), "e={e:?} s={s:?}");
        }
    }
}

#[test]
fn prop_all_ne_grossit_pas() {
    for e in corpus() {
        let s = simplify_all(e.clone());
        assert!(s.taille() <= e.taille(), "e={e:?} s={s:?}");
    }
}

#[test]
fn prop_all_idempotent_sur_cas_litteraux() {
    let cas = [
        plus(number(2), number(2)),
        plus(number(3), number(0)),
        times(plus(number(3), number(4)), number(5)),
        div(times(number(1), number(6)), plus(number(2), number(1))),
        times(minus(number(9), number(1)), number(0)),
        plus(times(number(2), number(1)), times(number(2), number(1))),
    ];
    for e in cas {
        let une = simplify_all(e.clone());
        assert_eq!(simplify_all(une.clone()), une, "e={e:?}");
    }
}

#[test]
fn prop_point_fixe_idempotent_et_fidele() {
    for e in corpus() {
        let s = simplify_point_fixe(e.clone());
        assert_eq!(simplify_all(s.clone()), s, "e={e:?}");
        assert_eq!(simplify_point_fixe(s.clone()), s, "e={e:?}");
        if let Ok(v) = eval(&e) {
            assert_eq!(eval(&s), Ok(v), "e={e:?}");
        }
    }
}

/* ------------------------ Cas littéraux ------------------------ */

#[test]
fn prop_formats_litteraux() {
    assert_eq!(
        format_expr(&plus(number(3), times(number(4), number(5)))),
        "3 + 4 * 5"
    );
    assert_eq!(
        format_expr(&times(plus(number(3), number(4)), number(5))),
        "(3 + 4) * 5"
    );
    let demo = div(times(number(1), number(6)), plus(number(2), number(1)));
    assert_eq!(format_expr(&demo), "1 * 6 / (2 + 1)");
    assert_eq!(eval(&demo), Ok(BigInt::from(2)));
}

#[test]
fn prop_simplifications_litterales() {
    assert_eq!(simplify_top(plus(number(3), number(0))), number(3));
    assert_eq!(
        simplify_all(plus(number(2), number(2))),
        times(number(2), number(2))
    );
}

#[test]
fn prop_egalite_structurelle() {
    for e in tous_les_arbres(2) {
        let copie = e.clone();
        assert_eq!(e, copie);
        // toute modification d’un sous-arbre ou de l’opérateur casse l’égalité
        if let Expr::BinOp(op, a, b) = &e {
            let modifie = Expr::BinOp(*op, a.clone(), Box::new(plus(*b.clone(), number(1))));
            assert_ne!(e, modifie);
            for autre in Op::TOUS {
                if autre != *op {
                    assert_ne!(e, Expr::BinOp(autre, a.clone(), b.clone()));
                }
            }
        }
    }
}
