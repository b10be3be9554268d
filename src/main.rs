//! Pogo Dash entry point
//!
//! Handles platform-specific initialization and drives the frame loop.
//! Rendering is external: this shell only samples input, steps the
//! simulation, and mirrors HUD text into the DOM.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use pogo_dash::InputState;
    use pogo_dash::consts::*;
    use pogo_dash::hud::{HudTicker, format_time};
    use pogo_dash::sim::{GameState, Phase, Terrain, Viewport, tick};

    /// Everything the frame loop touches
    struct Game {
        state: GameState,
        input: InputState,
        hud: HudTicker,
        viewport: Viewport,
        last_time: f64,
        last_phase: Phase,
    }

    impl Game {
        fn new() -> Self {
            Self {
                state: GameState::new(Terrain::default_course()),
                input: InputState::new(),
                hud: HudTicker::new(),
                viewport: read_viewport(),
                last_time: 0.0,
                last_phase: Phase::Intro,
            }
        }

        /// One animation frame: delta, tick, HUD
        fn frame(&mut self, time: f64) {
            let raw_dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                NOMINAL_DT
            };
            self.last_time = time;
            // Clamp before the sim ever sees it; a background-tab hitch
            // must not become a teleport
            let dt = raw_dt.clamp(0.0, MAX_FRAME_DT);

            tick(&mut self.state, &mut self.input, &self.viewport, time, dt);

            if let Some(stats) = self.hud.update(&self.state, dt) {
                write_hud_text(&stats);
            }
            if self.state.phase != self.last_phase {
                show_phase_overlay(&self.state);
                self.last_phase = self.state.phase;
            }
        }
    }

    /// Measure the window as the play area
    fn read_viewport() -> Viewport {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Viewport::default(),
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Viewport::new(width as f32, height as f32)
    }

    fn set_text(id: &str, text: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_hidden(id: &str, hidden: bool) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = document.get_element_by_id(id) {
                let _ = if hidden {
                    el.set_attribute("class", "overlay hidden")
                } else {
                    el.set_attribute("class", "overlay")
                };
            }
        }
    }

    fn write_hud_text(stats: &pogo_dash::hud::HudStats) {
        set_text("hud-time", &format_time(Some(stats.elapsed)));
        set_text("hud-progress", &format!("{:.0}%", stats.progress));
        set_text("hud-speed", &format!("{:.0}", stats.speed));
        set_text("hud-best", &format_time(stats.best));
    }

    fn show_phase_overlay(state: &GameState) {
        set_hidden("intro-screen", state.phase != Phase::Intro);
        set_hidden("win-screen", state.phase != Phase::Won);
        set_hidden("crash-screen", state.phase != Phase::Crashed);
        if state.phase == Phase::Won {
            set_text("final-time", &format_time(Some(state.elapsed)));
            set_text("final-best", &format_time(state.best.get()));
        }
    }

    /// Stoppable, idempotently restartable animation-frame chain
    #[derive(Clone)]
    struct FrameLoop {
        game: Rc<RefCell<Game>>,
        running: Rc<Cell<bool>>,
    }

    impl FrameLoop {
        fn new(game: Rc<RefCell<Game>>) -> Self {
            Self {
                game,
                running: Rc::new(Cell::new(false)),
            }
        }

        /// Begin scheduling frames. A second start while running is a no-op.
        fn start(&self) {
            if self.running.replace(true) {
                return;
            }
            // Fresh timebase so the first frame after a stop is nominal
            self.game.borrow_mut().last_time = 0.0;
            log::info!("frame loop started");
            self.schedule();
        }

        /// No further frames run after this returns
        fn stop(&self) {
            if self.running.replace(false) {
                log::info!("frame loop stopped");
            }
        }

        fn schedule(&self) {
            let this = self.clone();
            let closure = Closure::once(move |time: f64| {
                if !this.running.get() {
                    return;
                }
                this.game.borrow_mut().frame(time);
                this.schedule();
            });
            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Pogo Dash starting...");

        let game = Rc::new(RefCell::new(Game::new()));
        let frame_loop = FrameLoop::new(game.clone());

        setup_input_handlers(game.clone());
        setup_resize_observer(game.clone());
        setup_visibility_handler(frame_loop.clone());

        frame_loop.start();
        log::info!("Pogo Dash running");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };

        // Keydown: map to logical intents; the edge flags themselves are
        // repeat-proof, this just keeps arrows/space from scrolling
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = event.key();
                if matches!(key.as_str(), "ArrowLeft" | "ArrowRight" | "ArrowUp" | " ") {
                    event.prevent_default();
                }
                game.borrow_mut().input.key_down(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: drop held keys so nothing sticks while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input = InputState::new();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_observer(game: Rc<RefCell<Game>>) {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let viewport = read_viewport();
            game.borrow_mut().viewport = viewport;
            log::info!(
                "viewport resized to {:.0}x{:.0}",
                viewport.width,
                viewport.height
            );
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Hidden tab: stop the loop outright. Visible again: restart it.
    /// Both calls are idempotent, so repeated events are harmless.
    fn setup_visibility_handler(frame_loop: FrameLoop) {
        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(d) => d,
            None => return,
        };
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if doc.visibility_state() == web_sys::VisibilityState::Hidden {
                frame_loop.stop();
            } else {
                frame_loop.start();
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main; this only satisfies the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pogo_dash::InputState;
    use pogo_dash::consts::NOMINAL_DT;
    use pogo_dash::hud::format_time;
    use pogo_dash::sim::{GameState, Phase, Terrain, Viewport, tick};

    env_logger::init();
    log::info!("Pogo Dash (headless) starting...");

    // No browser here: run the sim under a simple scripted rider as a
    // smoke check of the full course
    let mut state = GameState::new(Terrain::default_course());
    let mut input = InputState::new();
    let viewport = Viewport::new(1280.0, 720.0);

    input.key_down("Enter");
    tick(&mut state, &mut input, &viewport, 0.0, NOMINAL_DT);
    input.key_up("Enter");

    for frame in 0..(120 * 60) {
        if state.phase != Phase::Playing {
            break;
        }
        input.lean_right = state.rider.angle < 0.20;
        input.lean_left = state.rider.angle > 0.32;
        if frame % 45 == 0 && state.on_ground {
            input.jump_pressed = true;
        }
        tick(&mut state, &mut input, &viewport, 0.0, NOMINAL_DT);
    }

    let snap = state.snapshot();
    println!(
        "outcome: {:?}  progress: {:.0}%  time: {}  best: {}",
        snap.phase,
        snap.progress,
        format_time(Some(snap.elapsed)),
        format_time(snap.best),
    );
    match serde_json::to_string(&snap) {
        Ok(json) => println!("{json}"),
        Err(err) => log::warn!("snapshot export failed: {err}"),
    }
}
