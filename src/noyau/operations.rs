//! Tables d’opérations (unaires + binaires).
//!
//! Contrat : les fonctions sont pures et signalent une violation de domaine
//! par NaN (sentinelle non finie). C’est le moteur qui transforme NaN en échec.

use std::str::FromStr;

/// Borne haute de la factorielle (170! est le dernier f64 fini).
pub const FACTORIELLE_MAX: f64 = 170.0;

/* ------------------------ Unaires ------------------------ */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpUnaire {
    Racine,
    Carre,
    Cube,
    Abs,
    Log,
    Factorielle,
    /// “Module” d’un réel = valeur absolue.
    Module,
}

impl OpUnaire {
    pub const TOUTES: [OpUnaire; 7] = [
        OpUnaire::Racine,
        OpUnaire::Carre,
        OpUnaire::Cube,
        OpUnaire::Abs,
        OpUnaire::Log,
        OpUnaire::Factorielle,
        OpUnaire::Module,
    ];

    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            OpUnaire::Racine => {
                if x < 0.0 {
                    f64::NAN
                } else {
                    x.sqrt()
                }
            }
            OpUnaire::Carre => x * x,
            OpUnaire::Cube => x * x * x,
            OpUnaire::Abs => x.abs(),
            OpUnaire::Log => {
                if x <= 0.0 {
                    f64::NAN
                } else {
                    x.log10()
                }
            }
            OpUnaire::Factorielle => factorielle(x),
            OpUnaire::Module => {
                if x < 0.0 {
                    -x
                } else {
                    x
                }
            }
        }
    }

    /// Identifiant de bouton / raccourci.
    pub fn id(self) -> &'static str {
        match self {
            OpUnaire::Racine => "sqrt",
            OpUnaire::Carre => "sq",
            OpUnaire::Cube => "cube",
            OpUnaire::Abs => "abs",
            OpUnaire::Log => "log",
            OpUnaire::Factorielle => "fact",
            OpUnaire::Module => "mod",
        }
    }

    /// Nom affiché après un succès.
    pub fn nom(self) -> &'static str {
        match self {
            OpUnaire::Racine => "Racine",
            OpUnaire::Carre => "Carré",
            OpUnaire::Cube => "Cube",
            OpUnaire::Abs => "|x|",
            OpUnaire::Log => "Log",
            OpUnaire::Factorielle => "Factorielle",
            OpUnaire::Module => "Module",
        }
    }

    /// Nom affiché après une violation de domaine.
    pub fn nom_echec(self) -> &'static str {
        match self {
            OpUnaire::Racine => "Racine carrée",
            OpUnaire::Log => "Logarithme",
            OpUnaire::Factorielle => "Factorielle",
            OpUnaire::Module => "Module",
            _ => "Opération",
        }
    }

    /// Libellé du bouton.
    pub fn libelle(self) -> &'static str {
        match self {
            OpUnaire::Racine => "√x",
            OpUnaire::Carre => "x²",
            OpUnaire::Cube => "x³",
            OpUnaire::Abs => "|x|",
            OpUnaire::Log => "log",
            OpUnaire::Factorielle => "x!",
            OpUnaire::Module => "mod",
        }
    }
}

impl FromStr for OpUnaire {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpUnaire::TOUTES
            .into_iter()
            .find(|op| op.id() == s)
            .ok_or_else(|| format!("opération unaire inconnue: '{s}'"))
    }
}

/// Factorielle itérative ; NaN hors {0, 1, …, 170}.
pub fn factorielle(x: f64) -> f64 {
    if x.fract() != 0.0 || !(0.0..=FACTORIELLE_MAX).contains(&x) {
        return f64::NAN;
    }
    let n = x as u32;
    (2..=n).fold(1.0, |acc, i| acc * f64::from(i))
}

/// Puissance x^y (l’exposant vient d’un fournisseur externe).
pub fn puissance(x: f64, y: f64) -> f64 {
    x.powf(y)
}

/* ------------------------ Binaires ------------------------ */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpBinaire {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl OpBinaire {
    pub const TOUTES: [OpBinaire; 4] = [
        OpBinaire::Plus,
        OpBinaire::Moins,
        OpBinaire::Fois,
        OpBinaire::Divise,
    ];

    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            OpBinaire::Plus => a + b,
            OpBinaire::Moins => a - b,
            OpBinaire::Fois => a * b,
            OpBinaire::Divise => {
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            }
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            OpBinaire::Plus => "plus",
            OpBinaire::Moins => "minus",
            OpBinaire::Fois => "multiply",
            OpBinaire::Divise => "divide",
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            OpBinaire::Plus => "Addition",
            OpBinaire::Moins => "Soustraction",
            OpBinaire::Fois => "Multiplication",
            OpBinaire::Divise => "Division",
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            OpBinaire::Plus => "+",
            OpBinaire::Moins => "-",
            OpBinaire::Fois => "*",
            OpBinaire::Divise => "/",
        }
    }
}

impl FromStr for OpBinaire {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpBinaire::TOUTES
            .into_iter()
            .find(|op| op.id() == s)
            .ok_or_else(|| format!("opérateur inconnu: '{s}'"))
    }
}
