// src/bin/demo.rs
//
// Démo console (façon REPL) : pour chaque exemple du catalogue,
//   format(e) = eval(e)
// puis les formes simplifiées.

use calculatrice_expr::noyau::{
    catalogue, format_egalite, format_expr, lecture_etendue, simplify_all,
    simplify_point_fixe, simplify_top, Lecture,
};

fn main() {
    for (titre, e) in catalogue::exemples() {
        println!("# {titre}");
        println!("> {}", format_egalite(&e));

        if let l @ (Lecture::PlusInfini | Lecture::MoinsInfini | Lecture::PasUnNombre) =
            lecture_etendue(&e)
        {
            println!("  lecture étendue : {l}");
        }

        println!("  arbre        : {e:?}");
        println!("  simplify_top : {}", format_expr(&simplify_top(e.clone())));
        println!("  simplify_all : {}", format_expr(&simplify_all(e.clone())));
        println!("  point fixe   : {}", format_expr(&simplify_point_fixe(e)));
        println!();
    }
}
