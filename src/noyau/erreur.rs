//! Noyau — taxonomie des erreurs
//!
//! Toutes les erreurs sont récupérées localement : le noyau ne panique jamais,
//! chaque opération rend un `Result` consommé tout de suite par l’UI.

use thiserror::Error;

/// Cause d’un échec (saisie, domaine, état, liste CSV).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    #[error("entrée vide")]
    EntreeVide,

    #[error("valeur non numérique")]
    PasUnNombre,

    #[error("hors du domaine de l’opération")]
    HorsDomaine,

    #[error("aucune opération en attente")]
    AucuneOperationEnAttente,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("Liste CSV vide")]
    SequenceVide,

    #[error("Liste CSV incomplète")]
    SequenceIncomplete,

    #[error("La liste contient des valeurs non numériques")]
    SequenceNonNumerique,

    #[error("Indice non valide")]
    IndiceInvalide,

    #[error("Indice hors plage")]
    IndiceHorsPlage,
}

/// Échec “rendu” : la cause + le nom d’opération affiché dans le champ info.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} : {erreur}")]
pub struct Echec {
    pub operation: &'static str,
    #[source]
    pub erreur: ErreurCalc,
}

impl Echec {
    pub fn new(operation: &'static str, erreur: ErreurCalc) -> Self {
        Self { operation, erreur }
    }

    /// Texte du champ info (toujours la forme “erreur”).
    pub fn info(&self) -> String {
        super::format::libelle_info(self.operation, f64::NAN)
    }
}
