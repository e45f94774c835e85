//! Keepy Uppy entry point
//!
//! Browser host loop: frame timestamps in, clamped deltas to the session,
//! pointer events translated to canvas space, frames painted out.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use glam::Vec2;
    use keepy_uppy::config::Config;
    use keepy_uppy::highscores::BestScore;
    use keepy_uppy::platform::{self, FrameClock};
    use keepy_uppy::renderer::CanvasRenderer;
    use keepy_uppy::session::{GamePhase, Session};
    use keepy_uppy::sim::Bounds;

    /// Game instance holding all state
    struct Game {
        config: Config,
        session: Session,
        renderer: CanvasRenderer,
        clock: FrameClock,
        best: BestScore,
        viewport: (f32, f32),
    }

    impl Game {
        fn new(config: Config, renderer: CanvasRenderer, width: f32, height: f32) -> Self {
            let session = Session::new(config.clone(), width, height);
            let clock = FrameClock::new(config.gameplay.max_delta_time);
            let best = BestScore::load(&config.gameplay.storage_key);
            Self {
                config,
                session,
                renderer,
                clock,
                best,
                viewport: (width, height),
            }
        }

        fn ground_y(&self) -> f32 {
            self.viewport.1 - self.config.screen.ground_offset
        }

        /// One animation frame: clamped delta in, physics step, paint
        fn update(&mut self, time_ms: f64) {
            let dt = self.clock.tick(time_ms);
            let bounds =
                Bounds::from_viewport(self.viewport.0, self.viewport.1, self.config.screen.ground_offset);

            if self.session.frame(dt, bounds) {
                self.finish_round();
            }

            self.renderer.render_frame(self.session.body(), self.ground_y());
            self.update_hud();
        }

        /// Contact event in canvas coordinates
        fn pointer(&mut self, x: f32, y: f32) {
            if self.session.phase() == GamePhase::Paused {
                // Any tap resumes; drop the paused gap from the clock
                self.session.toggle_pause();
                self.clock.restart();
                return;
            }

            let result = self.session.pointer(Vec2::new(x, y));
            if result.hit {
                platform::vibrate(self.config.feedback.vibration_duration_ms);
            }
        }

        fn start_round(&mut self) {
            self.session.start(self.viewport.0, self.viewport.1);
            self.clock.restart();
        }

        fn finish_round(&mut self) {
            let score = self.session.score();
            if self.best.update(score) {
                self.best.save(&self.config.gameplay.storage_key);
                log::info!("New best score: {}", score);
            }
        }

        fn resize(&mut self, width: f32, height: f32) {
            self.viewport = (width, height);
            self.session.resize(width, height);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.session.score().to_string()));
            }
            if let Some(el) = document.get_element_by_id("best") {
                el.set_text_content(Some(&self.best.score.to_string()));
            }

            // Show/hide start screen
            if let Some(el) = document.get_element_by_id("start-screen") {
                if self.session.phase() == GamePhase::Ready {
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            // Show/hide pause hint
            if let Some(el) = document.get_element_by_id("pause-hint") {
                if self.session.phase() == GamePhase::Paused {
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            // Show/hide game over
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.session.phase() == GamePhase::GameOver {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.session.score().to_string()));
                    }
                    if let Some(best_el) = document.get_element_by_id("final-best") {
                        best_el.set_text_content(Some(&self.best.score.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Keepy Uppy starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = Config::load();

        // Size the backing store for the device pixel ratio; game
        // coordinates stay in CSS pixels
        let dpr = window.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let (client_w, client_h) = (rect.width() as f32, rect.height() as f32);
        canvas.set_width((rect.width() * dpr) as u32);
        canvas.set_height((rect.height() * dpr) as u32);

        let mut renderer = CanvasRenderer::new(&canvas, config.visuals.clone(), config.colors.clone())
            .expect("no 2d context");
        renderer.set_size(client_w, client_h, dpr);

        let game = Rc::new(RefCell::new(Game::new(config, renderer, client_w, client_h)));

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, game.clone());
        setup_buttons(game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);

        log::info!("Keepy Uppy running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                game.borrow_mut().pointer(x, y);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    game.borrow_mut().pointer(x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let dpr = window.device_pixel_ratio();
            let rect = canvas.get_bounding_client_rect();
            canvas.set_width((rect.width() * dpr) as u32);
            canvas.set_height((rect.height() * dpr) as u32);

            let mut g = game.borrow_mut();
            let (w, h) = (rect.width() as f32, rect.height() as f32);
            g.renderer.set_size(w, h, dpr);
            g.resize(w, h);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().start_round();
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if g.session.phase() == GamePhase::Playing {
                    g.session.toggle_pause();
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().update(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Keepy Uppy (native) starting...");
    log::info!("The game targets the browser - build with trunk/wasm-pack for the web version");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
