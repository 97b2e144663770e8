// src/noyau/catalogue.rs
//
// Expressions d’exemple, construites à la main (pas de lecture texte).

use super::expr::{div, minus, number, plus, times, Expr};

/// (titre, expression) dans l’ordre d’affichage.
pub fn exemples() -> Vec<(&'static str, Expr)> {
    vec![
        (
            "Démo",
            div(times(number(1), number(6)), plus(number(2), number(1))),
        ),
        (
            "Produit dans somme",
            plus(number(3), times(number(4), number(5))),
        ),
        (
            "Somme dans produit",
            times(plus(number(3), number(4)), number(5)),
        ),
        ("Neutre additif", plus(number(3), number(0))),
        ("Somme identique", plus(number(2), number(2))),
        (
            "Neutres imbriqués",
            minus(
                times(plus(number(5), number(0)), number(1)),
                div(number(4), times(number(3), number(1))),
            ),
        ),
        (
            "Zéro absorbant",
            times(plus(div(number(1), number(0)), number(0)), number(0)),
        ),
        (
            "Deux passes",
            plus(
                plus(minus(number(4), number(1)), number(0)),
                minus(number(4), number(1)),
            ),
        ),
        ("Division par zéro", div(number(5), number(0))),
        ("Division négative", div(number(-7), number(2))),
        (
            "Soustraction à droite",
            minus(number(1), minus(number(2), number(3))),
        ),
    ]
}
