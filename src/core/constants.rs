// World (logical pixels)
pub const WORLD_WIDTH: u32 = 800;
pub const WORLD_HEIGHT: u32 = 600;

// Timing
pub const TARGET_FPS: u32 = 60;
pub const SPAWN_DELAY_MS: u64 = 1500;
pub const GAME_OVER_PAUSE_MS: u64 = 1500;

// Player physics (per frame)
pub const GRAVITY: f32 = 0.5;
pub const JUMP_IMPULSE: f32 = -9.0;

// Sprite sizes
pub const PLAYER_WIDTH: f32 = 60.0;
pub const PLAYER_HEIGHT: f32 = 40.0;
pub const OBSTACLE_WIDTH: f32 = 70.0;
pub const OBSTACLE_HEIGHT: f32 = 300.0;

// Obstacles
pub const OBSTACLE_SPEED: f32 = 4.0;
pub const GAP_SIZE: u32 = 170;
/// Minimum distance kept between a gap and the top/bottom of the world.
pub const GAP_MARGIN: u32 = 150;

// Files
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DRAGON_SPRITE: &str = "dragon.txt";
pub const OBSTACLE_SPRITE: &str = "obstacle.txt";
pub const BACKGROUND_SPRITE: &str = "background.txt";
