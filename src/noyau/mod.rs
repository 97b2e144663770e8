//! Noyau d’expressions entières
//!
//! Organisation interne :
//! - expr.rs     : AST fermé (Number / BinOp) + fabriques
//! - eval.rs     : évaluation entière + indéfini explicite + lecture ±∞/NaN
//! - format.rs   : affichage infixe, parenthèses minimales (précédence seule)
//! - simplif.rs  : simplify_top / simplify_all / point fixe
//! - catalogue.rs: expressions d’exemple (démo console + UI)

pub mod catalogue;
pub mod eval;
pub mod expr;
pub mod format;
pub mod simplif;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use eval::{eval, lecture_etendue, Indefini, Lecture};
pub use expr::{bin_op, div, minus, number, plus, times, Expr, Op};
pub use format::{format_egalite, format_expr};
pub use simplif::{simplify_all, simplify_point_fixe, simplify_top, trace_simplification, Etape};
