// src/noyau/format.rs
//
// Affichage infixe “minimal” :
// - parenthèses seulement si l’enfant lie moins fort que le parent
// - comparaison de précédence UNIQUEMENT (pas d’associativité)
//
// Note : `1 - (2 - 3)` s’affiche donc `1 - 2 - 3`. Limite connue, conservée
// telle quelle (les sorties attendues en dépendent).

use super::eval::eval;
use super::expr::Expr;

/// Formate l’expression avec le minimum de parenthèses (règle de précédence seule).
pub fn format_expr(e: &Expr) -> String {
    let mut out = String::new();
    ecrire(e, &mut out);
    out
}

fn ecrire(e: &Expr, out: &mut String) {
    match e {
        Expr::Number(n) => out.push_str(&n.to_string()),
        Expr::BinOp(op, a, b) => {
            let p = op.precedence();
            ecrire_enfant(a, p, out);
            out.push(' ');
            out.push_str(op.symbole());
            out.push(' ');
            ecrire_enfant(b, p, out);
        }
    }
}

fn ecrire_enfant(enfant: &Expr, prec_parent: u8, out: &mut String) {
    if enfant.precedence() > prec_parent {
        out.push('(');
        ecrire(enfant, out);
        out.push(')');
    } else {
        ecrire(enfant, out);
    }
}

/// Ligne de démonstration : `format(e) = eval(e)` (ou `indéfini`).
pub fn format_egalite(e: &Expr) -> String {
    match eval(e) {
        Ok(v) => format!("{} = {v}", format_expr(e)),
        Err(_) => format!("{} = indéfini", format_expr(e)),
    }
}
