//! Noyau — moteur arithmétique
//!
//! Une `Session` par calculatrice : elle porte l’unique accumulateur
//! “opération en attente” (premier opérande + opérateur).
//!
//! Contrats :
//! - aucune panique : chaque appel rend `Result<Resultat, Echec>`
//! - un échec ne modifie jamais l’état en attente (seul AC le remet à zéro)
//! - la bande de grandeur est recalculée après chaque succès (info seulement)

use super::erreur::{Echec, ErreurCalc};
use super::format::{format_nombre, libelle_info};
use super::operations::{puissance, OpBinaire, OpUnaire};
use super::saisie::normaliser;

/// Libellés d’échec communs.
const NOM_ENTREE_INVALIDE: &str = "Entrée invalide";
const NOM_OPERATEUR: &str = "Opérateur";
const NOM_EGAL: &str = "Égal";
const NOM_CALCUL: &str = "Calcul";
const NOM_PUISSANCE: &str = "Puissance";

/// Résultat prêt à afficher : écran + champ info.
#[derive(Debug, Clone, PartialEq)]
pub struct Resultat {
    pub valeur: f64,
    pub affichage: String,
    pub info: String,
}

impl Resultat {
    pub fn new(operation: &str, valeur: f64) -> Self {
        Self {
            valeur,
            affichage: format_nombre(valeur),
            info: libelle_info(operation, valeur),
        }
    }
}

/// Opération binaire commencée, en attente du second opérande.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OperationEnAttente {
    pub premier: Option<f64>,
    pub operateur: Option<OpBinaire>,
}

/// Fournisseur d’exposant pour x^y (boîte de saisie, test, etc.).
///
/// `None` = l’utilisateur a annulé.
pub trait SaisieExposant {
    fn demander_exposant(&mut self) -> Option<String>;
}

impl<F> SaisieExposant for F
where
    F: FnMut() -> Option<String>,
{
    fn demander_exposant(&mut self) -> Option<String> {
        self()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    en_attente: OperationEnAttente,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn en_attente(&self) -> OperationEnAttente {
        self.en_attente
    }

    /// AC : efface l’opération en attente (idempotent).
    pub fn reinitialiser(&mut self) {
        self.en_attente = OperationEnAttente::default();
    }

    /// Applique une opération unaire au texte de l’écran.
    pub fn appliquer_unaire(&self, op: OpUnaire, x: &str) -> Result<Resultat, Echec> {
        let x = normaliser(x).map_err(|e| Echec::new(NOM_ENTREE_INVALIDE, e))?;

        let r = op.appliquer(x);
        if !r.is_finite() {
            log::debug!("{} hors domaine pour x={x}", op.id());
            return Err(Echec::new(op.nom_echec(), ErreurCalc::HorsDomaine));
        }

        log::debug!("{}({x}) = {r}", op.id());
        Ok(Resultat::new(op.nom(), r))
    }

    /// x^y : l’exposant est demandé au fournisseur (après validation de x).
    pub fn appliquer_puissance(
        &self,
        x: &str,
        fournisseur: &mut dyn SaisieExposant,
    ) -> Result<Resultat, Echec> {
        let x = normaliser(x).map_err(|e| Echec::new(NOM_ENTREE_INVALIDE, e))?;

        let y = fournisseur
            .demander_exposant()
            .ok_or(ErreurCalc::EntreeVide)
            .and_then(|t| normaliser(&t))
            .map_err(|e| Echec::new(NOM_PUISSANCE, e))?;

        let r = puissance(x, y);
        if !r.is_finite() {
            return Err(Echec::new(NOM_PUISSANCE, ErreurCalc::HorsDomaine));
        }

        log::debug!("{x}^{y} = {r}");
        Ok(Resultat::new(NOM_PUISSANCE, r))
    }

    /// Choix d’un opérateur : mémorise l’écran comme premier opérande.
    ///
    /// Succès => l’UI doit vider l’écran.
    pub fn commencer_binaire(&mut self, op: OpBinaire, x: &str) -> Result<(), Echec> {
        let x = normaliser(x).map_err(|e| Echec::new(NOM_OPERATEUR, e))?;
        self.en_attente = OperationEnAttente {
            premier: Some(x),
            operateur: Some(op),
        };
        log::debug!("en attente : {x} {}", op.symbole());
        Ok(())
    }

    /// “=” : termine l’opération en attente avec le second opérande.
    pub fn terminer_binaire(&mut self, y: &str) -> Result<Resultat, Echec> {
        let (a, op) = match self.en_attente {
            OperationEnAttente {
                premier: Some(a),
                operateur: Some(op),
            } => (a, op),
            _ => return Err(Echec::new(NOM_EGAL, ErreurCalc::AucuneOperationEnAttente)),
        };

        let b = normaliser(y).map_err(|e| Echec::new(NOM_EGAL, e))?;

        if op == OpBinaire::Divise && b == 0.0 {
            return Err(Echec::new(NOM_CALCUL, ErreurCalc::DivisionParZero));
        }

        let r = op.appliquer(a, b);
        if !r.is_finite() {
            return Err(Echec::new(NOM_CALCUL, ErreurCalc::HorsDomaine));
        }

        log::debug!("{a} {} {b} = {r}", op.symbole());
        self.reinitialiser();
        Ok(Resultat::new(op.nom(), r))
    }
}
