//! Entity base state
//!
//! An [`Entity`] is a positioned, sized, moving 2D object. Position, size,
//! velocity and acceleration each exist twice: an integer form and a float
//! form. The two forms are independent stores; setting `x` does not touch
//! `xf`. Callers pick one representation and stick to it, which keeps
//! conversions out of the per-frame path.
//!
//! Velocity and acceleration are stored only. Nothing in the engine
//! integrates them.

use crate::foundation::math::{polar_to_axes, polar_to_axes_int, Rect};

/// Positioned, sized, moving 2D object with a liveness flag
///
/// Entities start out dead. Owners call [`Entity::make_alive`] before the
/// entity takes part in updates and draws, and [`Entity::remove`] to retire
/// it without deallocating, so pooled entities can be revived later.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    dead: bool,

    x: i32,
    y: i32,
    width: i32,
    height: i32,
    vel_x: i32,
    vel_y: i32,
    acc_x: i32,
    acc_y: i32,

    xf: f32,
    yf: f32,
    widthf: f32,
    heightf: f32,
    vel_xf: f32,
    vel_yf: f32,
    acc_xf: f32,
    acc_yf: f32,

    requires_position_update: bool,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            dead: true,
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            vel_x: 0,
            vel_y: 0,
            acc_x: 0,
            acc_y: 0,
            xf: 0.0,
            yf: 0.0,
            widthf: 0.0,
            heightf: 0.0,
            vel_xf: 0.0,
            vel_yf: 0.0,
            acc_xf: 0.0,
            acc_yf: 0.0,
            requires_position_update: false,
        }
    }
}

impl Entity {
    /// Create a dead entity with every field zeroed
    pub fn new() -> Self {
        Self::default()
    }

    // Liveness

    /// Mark the entity dead; calling it again has no further effect
    pub fn remove(&mut self) {
        self.dead = true;
    }

    /// Whether the entity is dead
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Bring the entity (back) to life
    pub fn make_alive(&mut self) {
        self.dead = false;
    }

    // Dirty flag

    /// Whether position or size changed since the flag was last consumed
    pub fn requires_position_update(&self) -> bool {
        self.requires_position_update
    }

    /// Read and clear the position/size dirty flag
    pub fn take_position_update(&mut self) -> bool {
        std::mem::replace(&mut self.requires_position_update, false)
    }

    // Position

    /// Set integer x
    pub fn set_x(&mut self, x: i32) {
        self.x = x;
        self.requires_position_update = true;
    }

    /// Set float x
    pub fn set_xf(&mut self, x: f32) {
        self.xf = x;
        self.requires_position_update = true;
    }

    /// Set integer y
    pub fn set_y(&mut self, y: i32) {
        self.y = y;
        self.requires_position_update = true;
    }

    /// Set float y
    pub fn set_yf(&mut self, y: f32) {
        self.yf = y;
        self.requires_position_update = true;
    }

    /// Set both integer coordinates
    pub fn set_pos(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        self.requires_position_update = true;
    }

    /// Set both float coordinates
    pub fn set_posf(&mut self, x: f32, y: f32) {
        self.xf = x;
        self.yf = y;
        self.requires_position_update = true;
    }

    /// Integer x
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Float x
    pub fn xf(&self) -> f32 {
        self.xf
    }

    /// Integer y
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Float y
    pub fn yf(&self) -> f32 {
        self.yf
    }

    // Size

    /// Set integer width
    pub fn set_width(&mut self, width: i32) {
        self.width = width;
        self.requires_position_update = true;
    }

    /// Set float width
    pub fn set_widthf(&mut self, width: f32) {
        self.widthf = width;
        self.requires_position_update = true;
    }

    /// Set integer height
    pub fn set_height(&mut self, height: i32) {
        self.height = height;
        self.requires_position_update = true;
    }

    /// Set float height
    pub fn set_heightf(&mut self, height: f32) {
        self.heightf = height;
        self.requires_position_update = true;
    }

    /// Set both integer dimensions
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.requires_position_update = true;
    }

    /// Set both float dimensions
    pub fn set_sizef(&mut self, width: f32, height: f32) {
        self.widthf = width;
        self.heightf = height;
        self.requires_position_update = true;
    }

    /// Integer width
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Float width
    pub fn widthf(&self) -> f32 {
        self.widthf
    }

    /// Integer height
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Float height
    pub fn heightf(&self) -> f32 {
        self.heightf
    }

    /// Float-form bounds, used for hit testing and drawing
    pub fn bounds(&self) -> Rect {
        Rect::new(self.xf, self.yf, self.widthf, self.heightf)
    }

    // Velocity

    /// Set integer x velocity
    pub fn set_vel_x(&mut self, vel_x: i32) {
        self.vel_x = vel_x;
    }

    /// Set float x velocity
    pub fn set_vel_xf(&mut self, vel_x: f32) {
        self.vel_xf = vel_x;
    }

    /// Set integer y velocity
    pub fn set_vel_y(&mut self, vel_y: i32) {
        self.vel_y = vel_y;
    }

    /// Set float y velocity
    pub fn set_vel_yf(&mut self, vel_y: f32) {
        self.vel_yf = vel_y;
    }

    /// Set both integer velocity components
    pub fn set_vel(&mut self, vel_x: i32, vel_y: i32) {
        self.vel_x = vel_x;
        self.vel_y = vel_y;
    }

    /// Set both float velocity components
    pub fn set_velf(&mut self, vel_x: f32, vel_y: f32) {
        self.vel_xf = vel_x;
        self.vel_yf = vel_y;
    }

    /// Set integer velocity from a magnitude and an angle in `[0, 0x10000)`
    pub fn set_vel_rad(&mut self, velocity: i32, angle: i32) {
        let (vel_x, vel_y) = polar_to_axes_int(velocity, angle);
        self.set_vel(vel_x, vel_y);
    }

    /// Set float velocity from a magnitude and a turn fraction in `[0, 1)`
    pub fn set_vel_radf(&mut self, velocity: f32, angle: f32) {
        let (vel_x, vel_y) = polar_to_axes(velocity, angle);
        self.set_velf(vel_x, vel_y);
    }

    /// Integer x velocity
    pub fn vel_x(&self) -> i32 {
        self.vel_x
    }

    /// Float x velocity
    pub fn vel_xf(&self) -> f32 {
        self.vel_xf
    }

    /// Integer y velocity
    pub fn vel_y(&self) -> i32 {
        self.vel_y
    }

    /// Float y velocity
    pub fn vel_yf(&self) -> f32 {
        self.vel_yf
    }

    // Acceleration

    /// Set integer x acceleration
    pub fn set_acc_x(&mut self, acc_x: i32) {
        self.acc_x = acc_x;
    }

    /// Set float x acceleration
    pub fn set_acc_xf(&mut self, acc_x: f32) {
        self.acc_xf = acc_x;
    }

    /// Set integer y acceleration
    pub fn set_acc_y(&mut self, acc_y: i32) {
        self.acc_y = acc_y;
    }

    /// Set float y acceleration
    pub fn set_acc_yf(&mut self, acc_y: f32) {
        self.acc_yf = acc_y;
    }

    /// Set both integer acceleration components
    pub fn set_acc(&mut self, acc_x: i32, acc_y: i32) {
        self.acc_x = acc_x;
        self.acc_y = acc_y;
    }

    /// Set both float acceleration components
    pub fn set_accf(&mut self, acc_x: f32, acc_y: f32) {
        self.acc_xf = acc_x;
        self.acc_yf = acc_y;
    }

    /// Set integer acceleration from a magnitude and an angle in `[0, 0x10000)`
    pub fn set_acc_rad(&mut self, acceleration: i32, angle: i32) {
        let (acc_x, acc_y) = polar_to_axes_int(acceleration, angle);
        self.set_acc(acc_x, acc_y);
    }

    /// Set float acceleration from a magnitude and a turn fraction in `[0, 1)`
    pub fn set_acc_radf(&mut self, acceleration: f32, angle: f32) {
        let (acc_x, acc_y) = polar_to_axes(acceleration, angle);
        self.set_accf(acc_x, acc_y);
    }

    /// Integer x acceleration
    pub fn acc_x(&self) -> i32 {
        self.acc_x
    }

    /// Float x acceleration
    pub fn acc_xf(&self) -> f32 {
        self.acc_xf
    }

    /// Integer y acceleration
    pub fn acc_y(&self) -> i32 {
        self.acc_y
    }

    /// Float y acceleration
    pub fn acc_yf(&self) -> f32 {
        self.acc_yf
    }
}
