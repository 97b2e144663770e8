//! Calculatrice d’expressions — bibliothèque
//!
//! Le noyau (AST + évaluation + affichage + simplification) est public pour
//! la composition programmatique ; `app` reste l’affaire des binaires.

pub mod noyau;
