use std::rc::Rc;
use std::time::{Duration, Instant};

use lasergate_core::scoreboard::{Player, Scoreboard, ScoreboardError};
use log::{debug, error, info, warn};
use sdl2::event::{Event, WindowEvent};
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;

use crate::attract::{Attract, GameEvent};
use crate::config::Config;
use crate::error::FrontendError;
use crate::font;
use crate::input::{Action, KeyMap};
use crate::leds;
use crate::scene::Scene;
use crate::screenshot;
use crate::video::{self, Video};

const FRAME_TIME: Duration = Duration::from_nanos(16_683_350); // 59.94 Hz
const NOTICE_FRAMES: u32 = 120;
const SUBTITLE_FRAMES: u32 = 180;

/// Frames-per-second over the last second of presented frames.
struct FpsCounter {
    window_start: Instant,
    frames: u32,
    last: Option<f32>,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
            last: None,
        }
    }

    fn frame(&mut self) -> Option<f32> {
        self.frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= Duration::from_secs(1) {
            self.last = Some(self.frames as f32 / elapsed.as_secs_f32());
            self.frames = 0;
            self.window_start = Instant::now();
        }
        self.last
    }
}

fn show_banner<'r>(
    scene: &mut Scene<Texture<'r>>,
    creator: &'r TextureCreator<WindowContext>,
    text: &str,
) {
    let bitmap = font::rasterize(text);
    match video::upload_rgba(creator, bitmap.width, bitmap.height, &bitmap.pixels) {
        Ok(texture) => scene.show_notice(texture, bitmap.width, bitmap.height, NOTICE_FRAMES),
        Err(e) => warn!("cannot show notice {text:?}: {e}"),
    }
}

fn game_event_text(event: GameEvent, game: &Attract) -> String {
    let (what, player) = match event {
        GameEvent::Started(p) => ("READY", p),
        GameEvent::LifeLost(p) => ("LOST A LIFE", p),
        GameEvent::GameOver(p) => ("GAME OVER", p),
    };
    let n = match player {
        Player::One => 1,
        Player::Two => 2,
    };
    match event {
        GameEvent::GameOver(p) => format!("PLAYER {n} {what} - {}", game.score(p)),
        _ => format!("PLAYER {n} {what}"),
    }
}

fn start(
    game: &mut Attract,
    player: Player,
    board: &mut dyn Scoreboard,
) -> Result<Option<GameEvent>, ScoreboardError> {
    if game.is_playing(player) {
        debug!("{player:?} is already playing");
        return Ok(None);
    }
    if game.credits() == 0 {
        debug!("no credits; insert a coin first");
        return Ok(None);
    }
    game.start(player, board)
}

fn save_screenshot(video: &Video, config: &Config) -> Result<std::path::PathBuf, FrontendError> {
    let (w, h, rgb) = video.read_rgb()?;
    let path = screenshot::next_path(&config.screenshot_dir());
    screenshot::write_png(&path, w, h, &rgb)?;
    Ok(path)
}

pub fn run(config: &Config, key_map: &KeyMap) -> Result<(), FrontendError> {
    let sdl_context = sdl2::init()?;
    let sdl_video = sdl_context.video()?;

    let mut video = Video::new(&sdl_video, "Lasergate", &config.video)?;
    let creator = video.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let led_sheet = video::upload_rgba(
        &creator,
        leds::SHEET_WIDTH,
        leds::SHEET_HEIGHT,
        &leds::sheet_pixels(),
    )?;
    let mut scene = Scene::new(config, Rc::new(led_sheet));
    let (out_w, out_h) = video.output_size()?;
    scene.fit(out_w, out_h);

    let mut game = Attract::new();
    if let Err(e) = game.sync(scene.board()) {
        warn!("scoreboard rejected initial state: {e}");
    }

    let mut fps = FpsCounter::new();
    let mut last_fps = None;
    info!("running at {out_w}x{out_h}");

    'main: loop {
        let frame_start = Instant::now();
        let mut want_screenshot = false;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main,

                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => scene.fit_output(video.output_size()),

                Event::MouseMotion { x, y, .. } => {
                    let (sx, sy) = video.pointer_scale();
                    scene.pointer(x as f32 * sx, y as f32 * sy);
                }

                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => {
                    let Some(action) = key_map.get(sc) else {
                        continue;
                    };
                    let result = match action {
                        Action::Quit => break 'main,
                        Action::Coin => game.insert_coin(scene.board()).map(|_| None),
                        Action::Start1 => start(&mut game, Player::One, scene.board()),
                        Action::Start2 => start(&mut game, Player::Two, scene.board()),
                        Action::ToggleScoreboard => {
                            let visible = scene.toggle_scoreboard();
                            let text = if visible { "SCOREBOARD ON" } else { "SCOREBOARD OFF" };
                            show_banner(&mut scene, &creator, text);
                            Ok(None)
                        }
                        Action::Screenshot => {
                            want_screenshot = true;
                            Ok(None)
                        }
                    };
                    match result {
                        Ok(Some(event)) => {
                            scene.subtitle().show(game_event_text(event, &game), SUBTITLE_FRAMES);
                        }
                        Ok(None) => {}
                        Err(e) => warn!("scoreboard update failed: {e}"),
                    }
                }

                _ => {}
            }
        }

        match game.tick(scene.board()) {
            Ok(events) => {
                for event in events {
                    scene.subtitle().show(game_event_text(event, &game), SUBTITLE_FRAMES);
                }
            }
            Err(e) => warn!("scoreboard update failed: {e}"),
        }
        scene.tick(last_fps);

        video.clear();
        scene.render(&mut video.renderer());
        if want_screenshot {
            match save_screenshot(&video, config) {
                Ok(path) => {
                    info!("screenshot saved to {}", path.display());
                    show_banner(&mut scene, &creator, "SCREENSHOT SAVED");
                }
                Err(e) => error!("screenshot failed: {e}"),
            }
        }
        video.present();
        last_fps = fps.frame();

        if !config.video.vsync
            && let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed())
        {
            std::thread::sleep(rest);
        }
    }

    Ok(())
}
