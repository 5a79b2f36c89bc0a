//! Headless sprite engine demo
//!
//! Builds a two-layer scene with a scrolling window, drifting rocks and a
//! handler that destroys whatever is tapped, then drives it through the
//! director against a recording surface with a scripted stream of touches.
//!
//! Usage: `sprite_demo [config.toml|config.ron]`

use sprite_engine::config::ConfigError;
use sprite_engine::core::config::{Config, DeviceMetrics, EngineConfig, SceneConfig};
use sprite_engine::entity::Entity;
use sprite_engine::render::{DrawCommand, DrawableObject, RecordingSurface, RenderSurface, Sprite, Texture, Window};
use sprite_engine::scene::{ObjectRef, Scene, SceneDirector, SceneError, SceneHandler};
use sprite_engine::input::TouchEvent;
use thiserror::Error;

const FRAME_COUNT: u64 = 120;
const GAME_LOOP_INTERVAL: u64 = 30;
const BACKGROUND_LAYER: usize = 0;
const ROCK_LAYER: usize = 1;

/// Demo errors
#[derive(Error, Debug)]
enum AppError {
    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Scene setup was rejected
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Rock that drifts across the screen and wraps at the right edge
struct Rock {
    entity: Entity,
    texture: Texture,
    wrap_at: f32,
}

impl Rock {
    fn new(x: f32, y: f32, speed: f32, angle: f32, texture: Texture, wrap_at: f32) -> Self {
        let mut entity = Entity::new();
        entity.set_posf(x, y);
        entity.set_sizef(24.0, 24.0);
        entity.set_vel_radf(speed, angle);
        entity.make_alive();
        Self { entity, texture, wrap_at }
    }
}

impl DrawableObject for Rock {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn is_touchable(&self) -> bool {
        true
    }

    fn on_draw(&mut self, surface: &mut dyn RenderSurface) {
        surface.draw_quad(self.bounds(), self.texture.id());
    }

    fn on_update(&mut self) {
        let mut x = self.entity.xf() + self.entity.vel_xf();
        let y = self.entity.yf() + self.entity.vel_yf();
        if x > self.wrap_at {
            x -= self.wrap_at;
        }
        self.entity.set_posf(x, y);
    }
}

/// Destroys tapped rocks and scrolls the window on every game-loop tick
#[derive(Default)]
struct RockBreaker {
    taps: u32,
    destroyed: u32,
    ticks: u32,
}

impl SceneHandler for RockBreaker {
    fn on_game_loop(&mut self, scene: &mut Scene) {
        self.ticks += 1;
        if let Some(window) = scene.window_mut() {
            window.move_to(window.x + 8.0, window.y);
        }
    }

    fn on_set_scene(&mut self, _scene: &mut Scene) {
        log::info!("Rock breaker scene active");
    }

    fn on_touch_down(&mut self, _scene: &mut Scene, event: &TouchEvent) {
        self.taps += 1;
        log::debug!("Tap at ({:.1}, {:.1})", event.x(), event.y());
    }

    fn on_object_touch_down(&mut self, scene: &mut Scene, target: ObjectRef, _event: &TouchEvent) {
        if target.layer == ROCK_LAYER && scene.remove(target).is_ok() {
            self.destroyed += 1;
            log::info!("Rock in slot {} destroyed", target.slot);
        }
    }
}

fn load_config() -> Result<EngineConfig, AppError> {
    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load_from_file(&path)?,
        None => EngineConfig::default()
            .with_display(DeviceMetrics::new(960.0, 640.0, 480.0, 320.0))
            .with_scene(SceneConfig::uniform(2, 32)),
    };
    config.validate()?;
    if config.scene.layer_count() <= ROCK_LAYER {
        return Err(ConfigError::Invalid(format!("demo needs {} layers", ROCK_LAYER + 1)).into());
    }
    Ok(config)
}

fn build_scene(config: &EngineConfig) -> Result<Scene, AppError> {
    let game_width = config.display.game_width;
    let game_height = config.display.game_height;

    let mut scene = Scene::from_config(&config.scene);
    let background = Texture::new("starfield", 512, 512);
    let rock = Texture::new("rock", 32, 32);
    scene.use_texture(background.clone())?;
    scene.use_texture(rock.clone())?;

    scene.add_to_layer(
        BACKGROUND_LAYER,
        Sprite::new(0.0, 0.0, game_width * 2.0, game_height).with_texture(background),
    )?;
    for i in 0..6u8 {
        let offset = f32::from(i);
        scene.add_to_layer(
            ROCK_LAYER,
            Rock::new(offset * 70.0, 40.0 + offset * 35.0, 1.5, 0.0, rock.clone(), game_width * 2.0),
        )?;
    }

    scene.set_window(Window::new(0.0, 0.0, game_width, game_height));
    Ok(scene)
}

/// Scripted host touches in device pixels, keyed by frame
fn scripted_touches(frame: u64) -> Vec<TouchEvent> {
    match frame {
        10 => vec![TouchEvent::down(40.0, 25.0), TouchEvent::up(40.0, 25.0)],
        45 => vec![TouchEvent::down(5.0, 5.0)],
        46 => vec![TouchEvent::moved(6.0, 6.0), TouchEvent::up(6.0, 6.0)],
        80 => vec![TouchEvent::down(150.0, 60.0)],
        _ => Vec::new(),
    }
}

fn run(config: &EngineConfig) -> Result<(), AppError> {
    let mut director = SceneDirector::from_config(config);
    director.set_scene(build_scene(config)?, Box::<RockBreaker>::default());

    let mut surface = RecordingSurface::new();
    let mut quads = 0;
    for frame in 0..FRAME_COUNT {
        for mut event in scripted_touches(frame) {
            director.handle_touch(&mut event);
        }
        if frame % GAME_LOOP_INTERVAL == 0 {
            director.game_loop();
        }

        director.on_frame(&mut surface);
        quads += surface
            .take_commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::DrawQuad { .. }))
            .count();
    }

    if let Some(active) = director.end_scene() {
        if let Some(breaker) = active.handler.downcast_ref::<RockBreaker>() {
            log::info!(
                "{} taps, {} rocks destroyed, {} game-loop ticks",
                breaker.taps,
                breaker.destroyed,
                breaker.ticks
            );
        }
        for diagnostic in active.scene.diagnostics().iter() {
            log::warn!("Scene diagnostic: {}", diagnostic);
        }
    }
    log::info!("{} frames drawn, {} quads submitted", director.frame_count(), quads);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    sprite_engine::foundation::logging::init_with_level(&config.log_level);

    log::info!("Starting sprite engine demo");
    match run(&config) {
        Ok(()) => {
            log::info!("Sprite engine demo completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Sprite engine demo failed: {:?}", e);
            Err(e.into())
        }
    }
}
