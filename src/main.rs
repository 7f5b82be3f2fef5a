//! Circle Platformer entry point
//!
//! Handles platform-specific initialization and runs the game loop. In the
//! browser the page draws each frame from the JSON handed to `render_frame`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{FocusEvent, KeyboardEvent};

    use circle_platformer::sim::LevelId;
    use circle_platformer::{FrameStatus, Game, GameConfig, GameError};

    // Forward frames to the page's renderer, if it registered one
    #[wasm_bindgen(inline_js = "
        export function render_frame(json) {
            if (typeof window.render_frame === 'function') {
                window.render_frame(JSON.parse(json));
            }
        }
    ")]
    extern "C" {
        fn render_frame(json: &str);
    }

    /// Game plus frame scheduling state
    struct Host {
        game: Game,
        /// An animation frame is already requested
        scheduled: bool,
    }

    thread_local! {
        static HOST: RefCell<Option<Rc<RefCell<Host>>>> = const { RefCell::new(None) };
    }

    fn host() -> Option<Rc<RefCell<Host>>> {
        HOST.with(|h| h.borrow().clone())
    }

    /// Encode the current frame. Called under the host borrow; the result is
    /// handed to [`render`] after the borrow is released, since the page may
    /// call back into an exported command.
    fn frame_json(game: &Game) -> Option<String> {
        match game.snapshot().to_json() {
            Ok(json) => Some(json),
            Err(e) => {
                log::error!("Failed to encode frame: {}", e);
                None
            }
        }
    }

    fn render(json: Option<String>) {
        if let Some(json) = json {
            render_frame(&json);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Circle Platformer starting...");

        let config = match GameConfig::builtin() {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid level catalog: {}", e);
                return;
            }
        };

        let host = Rc::new(RefCell::new(Host {
            game: Game::new(config),
            scheduled: false,
        }));
        HOST.with(|h| *h.borrow_mut() = Some(host.clone()));

        setup_input_handlers(host.clone());
        let json = frame_json(&host.borrow().game);
        render(json);

        log::info!("Circle Platformer running!");
    }

    fn setup_input_handlers(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };

        // Key down
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if host.borrow_mut().game.input_mut().key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                host.borrow_mut().game.input_mut().key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key releases will not arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
                host.borrow_mut().game.input_mut().release_all();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Start the frame loop unless one is already pending
    fn ensure_loop(host: Rc<RefCell<Host>>) {
        {
            let mut h = host.borrow_mut();
            if h.scheduled || !h.game.state().is_playing() {
                return;
            }
            h.scheduled = true;
        }
        request_animation_frame(host);
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(host);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>) {
        let (status, json) = {
            let mut h = host.borrow_mut();
            let status = h.game.frame();
            if status == FrameStatus::Stopped {
                h.scheduled = false;
            }
            (status, frame_json(&h.game))
        };
        render(json);

        if status == FrameStatus::Continue {
            request_animation_frame(host);
        }
    }

    /// Run a mode command from a page button, then redraw and resume
    pub fn command(f: impl FnOnce(&mut Game) -> Result<(), GameError>) -> Result<(), JsValue> {
        let Some(host) = host() else {
            return Err(JsValue::from_str("game not started"));
        };
        let (result, json) = {
            let mut h = host.borrow_mut();
            let result = f(&mut h.game);
            (result, frame_json(&h.game))
        };
        render(json);
        result.map_err(|e| JsValue::from_str(&e.to_string()))?;
        ensure_loop(host);
        Ok(())
    }

    pub fn select(id: LevelId) -> Result<(), JsValue> {
        command(|game| game.select_level(id))
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Level-select button
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn select_level(id: u32) -> Result<(), JsValue> {
    wasm_game::select(id)
}

/// "Restart Level" button on the game over screen
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn restart_level() -> Result<(), JsValue> {
    wasm_game::command(|game| game.restart_level())
}

/// "Back to Level Select" button on the game over screen
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn back_to_level_select() -> Result<(), JsValue> {
    wasm_game::command(|game| game.back_to_level_select())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), circle_platformer::GameError> {
    use circle_platformer::sim::GameEvent;
    use circle_platformer::{FrameStatus, Game, GameConfig};

    env_logger::init();
    log::info!("Circle Platformer (native) starting...");
    log::info!("Native mode runs a scripted demo - build for wasm32 to play");

    let mut game = Game::new(GameConfig::builtin()?);
    log::info!("Loaded {} levels", game.config().catalog().len());
    game.select_level(1)?;

    // Walk right, hopping every second
    let mut coins = 0;
    for frame in 0..600u32 {
        let input = game.input_mut();
        input.right = true;
        input.space = frame % 60 < 2;

        let status = game.frame();
        coins += game
            .last_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::CoinCollected { .. }))
            .count();
        for event in game.last_events() {
            log::info!("frame {}: {:?}", frame, event);
        }
        if status == FrameStatus::Stopped {
            break;
        }
    }

    log::info!("Demo finished in {:?} with {} coins", game.mode(), coins);
    println!("{}", game.snapshot().to_json()?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
