//! Comet Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use comet_dodge::consts::TUNING_KEY;
    use comet_dodge::platform::{
        AnimationFrameScheduler, HeldKeys, KeyBindings, KeyValueStore, LocalStore, Scheduler,
    };
    use comet_dodge::renderer::CanvasRenderer;
    use comet_dodge::sim::GamePhase;
    use comet_dodge::{Session, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStore>,
        held: HeldKeys,
        bindings: KeyBindings,
        renderer: CanvasRenderer,
        scheduler: AnimationFrameScheduler,
    }

    impl Game {
        fn render(&self) {
            if let Err(e) = self.renderer.render(&self.session.snapshot()) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = self.session.hud();
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&hud.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("best") {
                el.set_text_content(Some(&hud.best.to_string()));
            }
            if let Some(el) = document.get_element_by_id("lives") {
                el.set_text_content(Some(&hud.lives.to_string()));
            }
        }
    }

    /// Tuning overrides from LocalStorage, if any
    fn load_tuning(store: &LocalStore) -> Tuning {
        match store.get(TUNING_KEY) {
            Some(json) => match Tuning::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring invalid tuning: {}", e);
                    Tuning::default()
                }
            },
            None => Tuning::default(),
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Comet Dodge starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or("no canvas")?
            .dyn_into()?;

        let store = LocalStore::open();
        let mut tuning = load_tuning(&store);
        // The canvas element defines the playfield
        tuning.playfield_width = canvas.width() as f32;
        tuning.playfield_height = canvas.height() as f32;
        let tuning = tuning.validated();

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(seed, tuning, store),
            held: HeldKeys::new(),
            bindings: KeyBindings::default(),
            renderer: CanvasRenderer::new(&canvas)?,
            scheduler: AnimationFrameScheduler::new(),
        }));

        {
            let frame_game = game.clone();
            game.borrow_mut()
                .scheduler
                .set_callback(move |time| game_loop(&frame_game, time));
        }

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone())?;

        {
            let g = game.borrow();
            g.update_hud();
            g.render();
        }
        show_overlay(game);

        log::info!("Comet Dodge ready");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let mut g = game.borrow_mut();
                // Keep arrow keys from scrolling the page
                if g.bindings.is_bound(&key) {
                    event.prevent_default();
                }
                g.held.press(&key);
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().held.release(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Show the panel for the current phase (or hide the overlay while running)
    /// and wire its button to the matching transition.
    fn show_overlay(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(overlay) = document
            .get_element_by_id("overlay")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            log::warn!("No overlay element");
            return;
        };

        let panel = game.borrow().session.overlay();
        let Some(panel) = panel else {
            let _ = overlay.style().set_property("display", "none");
            return;
        };

        overlay.set_inner_html(&panel.to_html());
        let _ = overlay.style().set_property("display", "grid");

        if let Some(btn) = document.get_element_by_id(panel.button_id()) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                begin(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Start or restart, then kick off the frame loop
    fn begin(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            match g.session.phase() {
                GamePhase::Idle => g.session.start(),
                GamePhase::Ended => g.session.restart(),
                GamePhase::Running => return,
            }
            g.update_hud();
            g.scheduler.request_frame();
        }
        show_overlay(game);
    }

    /// One tick per display refresh; the session stops requesting frames once it ends
    fn game_loop(game: &Rc<RefCell<Game>>, time: f64) {
        let running = {
            let mut g = game.borrow_mut();
            let Game {
                session,
                held,
                bindings,
                scheduler,
                ..
            } = &mut *g;
            session.drive(scheduler, time, held, bindings);
            g.render();
            g.update_hud();
            g.session.is_running()
        };

        if !running {
            show_overlay(game.clone());
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use comet_dodge::Tuning;
    use comet_dodge::platform::{HeldKeys, KeyBindings, ManualScheduler, MemoryStore};

    env_logger::init();
    log::info!("Comet Dodge (native) starting...");
    log::info!("Native mode runs one unattended session - serve the wasm build for the playable version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Invalid tuning file {}: {}", path, e);
                Tuning::default()
            }),
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut session = comet_dodge::Session::new(seed, tuning, MemoryStore::new());
    let held = HeldKeys::new();
    let bindings = KeyBindings::default();
    let mut scheduler = ManualScheduler::new(1000.0 / 60.0);

    session.start();
    // Ten minutes of frames at most
    let frames = scheduler.run(60 * 60 * 10, |now_ms, s| {
        session.drive(s, now_ms, &held, &bindings);
    });

    let hud = session.hud();
    log::info!("Session finished after {} frames", frames);
    println!("{} ({:.1}s survived, seed {})", hud, session.state().time, seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
