//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’expression courante, le catalogue d’exemples, la démarche
//! (arbres successifs) et offrir les actions des boutons sans logique d’affichage.
//!
//! Contrats :
//! - Aucune règle de calcul ici : tout passe par le noyau.
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur la constante du compositeur et sur l’historique.

use calculatrice_expr::noyau::{self, bin_op, catalogue, number, Expr, Lecture, Op};

/// Constante par défaut du compositeur.
const CONSTANTE_DEFAUT: i64 = 0;

/// Garde-fou : bornes de la constante (saisie DragValue).
pub const CONSTANTE_MAX: i64 = 1_000_000;

/// Garde-fou : nombre d’étapes conservées dans la démarche.
const HISTORIQUE_MAX: usize = 64;

/// Opérations de simplification proposées.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Simplification {
    Top,
    All,
    PointFixe,
}

impl Simplification {
    pub fn libelle(self) -> &'static str {
        match self {
            Simplification::Top => "simplify_top",
            Simplification::All => "simplify_all",
            Simplification::PointFixe => "point fixe",
        }
    }
}

/// Côté où l’expression courante est placée lors d’un enveloppement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cote {
    Gauche, // op(courante, k)
    Droite, // op(k, courante)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Etape {
    pub action: String,
    pub expr: Expr,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- catalogue ---
    pub exemples: Vec<(&'static str, Expr)>,
    pub choix: usize,

    // --- expression courante + démarche ---
    pub courante: Expr,
    pub demarche: Vec<Etape>,

    // --- compositeur ---
    pub op: Op,
    pub constante: i64,

    // --- message (indéfini, historique plein, etc.) ---
    pub erreur: String,
}

impl Default for AppCalc {
    fn default() -> Self {
        let mut app = Self {
            exemples: catalogue::exemples(),
            choix: 0,
            courante: number(0),
            demarche: Vec::new(),
            op: Op::Plus,
            constante: CONSTANTE_DEFAUT,
            erreur: String::new(),
        };
        // au lancement : premier exemple du catalogue
        app.choisir_exemple(0);
        app
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Charge l’exemple `i` (hors bornes => rien).
    pub fn choisir_exemple(&mut self, i: usize) {
        let Some((titre, e)) = self.exemples.get(i).cloned() else {
            return;
        };
        self.choix = i;
        self.demarche.clear();
        self.erreur.clear();
        self.courante = e.clone();
        self.pousser(titre, e);
    }

    /// Rétablit l’exemple choisi tel que construit.
    pub fn retablir(&mut self) {
        self.choisir_exemple(self.choix);
    }

    /// Applique une simplification à l’expression courante.
    ///
    /// Point fixe : chaque passe de simplify_all devient une étape de la démarche.
    pub fn simplifier(&mut self, s: Simplification) {
        let avant = self.courante.clone();
        let etapes: Vec<(String, Expr)> = match s {
            Simplification::Top => vec![(s.libelle().into(), noyau::simplify_top(avant.clone()))],
            Simplification::All => vec![(s.libelle().into(), noyau::simplify_all(avant.clone()))],
            Simplification::PointFixe => noyau::trace_simplification(avant.clone())
                .into_iter()
                .skip(1)
                .map(|et| (format!("{} (passe {})", s.libelle(), et.passe), et.expr))
                .collect(),
        };

        let change = etapes.last().is_some_and(|(_, e)| *e != avant);
        if !change {
            self.erreur = format!("{} : déjà simplifié", s.libelle());
            return;
        }

        self.erreur.clear();
        for (action, e) in etapes {
            self.courante = e.clone();
            self.pousser(&action, e);
        }
    }

    /// Enveloppe l’expression courante : op(courante, k) ou op(k, courante).
    pub fn envelopper(&mut self, cote: Cote) {
        let k = number(self.constante);
        let courante = self.courante.clone();
        let e = match cote {
            Cote::Gauche => bin_op(self.op, courante, k),
            Cote::Droite => bin_op(self.op, k, courante),
        };

        self.erreur.clear();
        self.courante = e.clone();
        let action = match cote {
            Cote::Gauche => format!("x {} {}", self.op.symbole(), self.constante),
            Cote::Droite => format!("{} {} x", self.constante, self.op.symbole()),
        };
        self.pousser(&action, e);
    }

    /// Garde-fou : borne la constante du compositeur.
    pub fn set_constante(&mut self, k: i64) {
        self.constante = k.clamp(-CONSTANTE_MAX, CONSTANTE_MAX);
    }

    fn pousser(&mut self, action: &str, expr: Expr) {
        if self.demarche.len() >= HISTORIQUE_MAX {
            // on garde le départ, on retire l’étape suivante la plus ancienne
            self.demarche.remove(1);
        }
        self.demarche.push(Etape {
            action: action.to_string(),
            expr,
        });
    }

    /* ------------------------ Lectures (pour la vue) ------------------------ */

    pub fn texte(&self) -> String {
        noyau::format_expr(&self.courante)
    }

    /// Valeur entière, ou message d’indéfini.
    pub fn valeur(&self) -> String {
        match noyau::eval(&self.courante) {
            Ok(v) => v.to_string(),
            Err(e) => format!("indéfini : {e}"),
        }
    }

    pub fn lecture(&self) -> Lecture {
        noyau::lecture_etendue(&self.courante)
    }

    pub fn arbre(&self) -> String {
        format!("{:?}", self.courante)
    }
}
