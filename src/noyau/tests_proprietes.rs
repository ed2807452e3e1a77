//! Tests de propriétés : le contrat observable du noyau, cas par cas.
//!
//! - unaires : identités algébriques + domaines (NaN hors domaine)
//! - binaires : flux “opérateur puis =” + état en attente
//! - CSV : parse, tri, inversion, retraits

use super::csv::SequenceNumerique;
use super::erreur::ErreurCalc;
use super::moteur::{OperationEnAttente, Session};
use super::operations::{factorielle, OpBinaire, OpUnaire};

fn seq(v: &[f64]) -> SequenceNumerique {
    SequenceNumerique::from(v.to_vec())
}

/* ------------------------ Unaires ------------------------ */

#[test]
fn prop_carre_et_cube() {
    for x in [-1e5, -12.5, -1.0, 0.0, 0.3, 2.0, 7.25, 1e10] {
        assert_eq!(OpUnaire::Carre.appliquer(x), x * x, "x={x}");
        assert_eq!(OpUnaire::Cube.appliquer(x), x * x * x, "x={x}");
    }
}

#[test]
fn prop_racine() {
    for x in [-1e-9, -1.0, -100.0] {
        assert!(OpUnaire::Racine.appliquer(x).is_nan(), "x={x}");
    }
    for x in [0.0, 2.0, 16.0, 1e6] {
        let r = OpUnaire::Racine.appliquer(x);
        assert!((r * r - x).abs() <= 1e-9 * x.max(1.0), "x={x} r={r}");
    }
}

#[test]
fn prop_factorielle() {
    assert!(factorielle(0.5).is_nan());
    assert!(factorielle(-3.0).is_nan());
    assert!(factorielle(171.0).is_nan());
    assert_eq!(factorielle(0.0), 1.0);
    assert_eq!(factorielle(5.0), 120.0);
    assert_eq!(OpUnaire::Factorielle.appliquer(10.0), 3_628_800.0);
}

/* ------------------------ Binaires ------------------------ */

#[test]
fn prop_division() {
    for a in [-3.0, 0.0, 10.0] {
        assert!(OpBinaire::Divise.appliquer(a, 0.0).is_nan(), "a={a}");
    }
    assert_eq!(OpBinaire::Divise.appliquer(10.0, 2.0), 5.0);
}

#[test]
fn prop_flux_binaire() {
    let mut s = Session::new();
    s.commencer_binaire(OpBinaire::Plus, "3").unwrap();
    assert_eq!(
        s.en_attente(),
        OperationEnAttente {
            premier: Some(3.0),
            operateur: Some(OpBinaire::Plus)
        }
    );

    let r = s.terminer_binaire("4").unwrap();
    assert_eq!(r.valeur, 7.0);
    assert_eq!(r.affichage, "7");
    assert_eq!(s.en_attente(), OperationEnAttente::default());
}

#[test]
fn prop_egal_sans_attente() {
    let mut s = Session::new();
    let e = s.terminer_binaire("4").unwrap_err();
    assert_eq!(e.erreur, ErreurCalc::AucuneOperationEnAttente);
}

#[test]
fn prop_reinitialiser_idempotent() {
    let mut s = Session::new();
    s.commencer_binaire(OpBinaire::Moins, "9").unwrap();

    s.reinitialiser();
    let une_fois = s.en_attente();
    s.reinitialiser();
    assert_eq!(s.en_attente(), une_fois);
    assert_eq!(une_fois, OperationEnAttente::default());
}

/* ------------------------ CSV ------------------------ */

#[test]
fn prop_csv_parse() {
    assert_eq!(SequenceNumerique::parse("1, 2, 3").unwrap(), seq(&[1.0, 2.0, 3.0]));
    assert_eq!(SequenceNumerique::parse(""), Err(ErreurCalc::SequenceVide));
    assert_eq!(
        SequenceNumerique::parse("a,b"),
        Err(ErreurCalc::SequenceNonNumerique)
    );
}

#[test]
fn prop_csv_tri_et_inversion() {
    assert_eq!(seq(&[3.0, 1.0, 2.0]).trier(), seq(&[1.0, 2.0, 3.0]));
    assert_eq!(seq(&[1.0, 2.0, 3.0]).inverser(), seq(&[3.0, 2.0, 1.0]));
}

#[test]
fn prop_csv_retraits() {
    assert_eq!(
        seq(&[1.0, 2.0, 3.0]).retirer_a(5.0),
        Err(ErreurCalc::IndiceHorsPlage)
    );
    assert_eq!(seq(&[1.0, 2.0, 3.0]).retirer_a(1.0).unwrap(), seq(&[1.0, 3.0]));
    assert_eq!(seq(&[]).retirer_dernier(), Err(ErreurCalc::SequenceVide));
}
