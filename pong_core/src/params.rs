/// Default tuning parameters for the Pong field, in pixels and pixels per tick
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 30.0; // distance from the side wall

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 4.0; // serve speed, sign is drawn
    pub const BALL_SPEED_Y: f32 = 2.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.0 / 20_000.0; // per elapsed tick, added on paddle hit

    // Agents
    pub const RANDOM_ACTIONS: [f32; 3] = [-5.0, 0.0, 5.0];
    pub const TRACKING_SPEED: f32 = 5.0;
    pub const TRACKING_DEAD_ZONE: f32 = 5.0;

    // Presentation
    pub const TICK_RATE: u32 = 60;
}
