// src/main.rs
//
// Calculatrice fx — point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : réglages + env_logger + eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d’entrée seulement (natif + web)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;
mod reglages;

use app::AppCalc;
use reglages::Reglages;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice fx";

/// Réglages chargés ; en cas d’échec on garde les défauts (jamais fatal).
#[cfg(target_arch = "wasm32")]
fn reglages_ou_defauts() -> Reglages {
    Reglages::charger().unwrap_or_else(|e| {
        log::warn!("{e} ; réglages par défaut");
        Reglages::default()
    })
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Le logger dépend des réglages : on lit d’abord, on signale l’échec après.
    let charge = Reglages::charger();
    let reglages = charge.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(reglages.niveau_log.as_str()),
    )
    .init();

    if let Err(e) = &charge {
        log::warn!("{e} ; réglages par défaut");
    }
    log::info!("{TITRE_APP} : démarrage ({:?})", reglages.mode_initial);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([reglages.largeur_fenetre, reglages.hauteur_fenetre])
            .with_min_inner_size([360.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::avec_reglages(&reglages)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{reglages_ou_defauts, AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Branche les logs sur la console du navigateur
    /// - Fixe le titre de l’onglet (document.title)
    /// - Démarre eframe WebRunner sur le <canvas id="the_canvas_id">
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        eframe::WebLogger::init(log::LevelFilter::Info).ok();

        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let reglages = reglages_ou_defauts();
        log::info!("{TITRE_APP} : démarrage web");

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |_cc| Ok(Box::new(AppCalc::avec_reglages(&reglages)))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
